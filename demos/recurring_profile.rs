/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Creates a monthly recurring billing profile and prints the profile id.
//!
//! Run with: `cargo run --example recurring_profile`

use nvpay::client::MockTransport;
use nvpay::prelude::*;

#[tokio::main]
async fn main() {
    let mut profile = RecurringProfile::new(RecurringAction::Add);
    profile.profile_name = Some("GoldPlan".to_string());
    profile.start = Some("01152027".to_string());
    profile.term = Some(12);
    profile.pay_period = Some("MONT".to_string());

    let request = TransactionRequest::new(
        Credentials::new("merchant_user", "merchant_vendor", "PayPal", "secret"),
        TrxType::Recurring,
        TenderType::CreditCard,
    )
    .with_card(CreditCard::new("5105105105105100", "0130"))
    .with_recurring(profile);

    let transport = MockTransport::with_response(
        "RESULT=0&RPREF=R7PA0000001&PROFILEID=RT0000000100&RESPMSG=Approved",
    );
    let client = GatewayClient::new(
        GatewayConfig::new("pilot-payflowpro.paypal.com"),
        transport,
    );

    let result = client.submit(&request).await;
    let recurring = result
        .response
        .recurring
        .as_ref()
        .expect("recurring family response");
    println!("approved:   {}", result.is_approved());
    println!("profile id: {:?}", recurring.profileid);
    println!("rpref:      {:?}", recurring.rpref);
}
