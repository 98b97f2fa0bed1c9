/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Submits a card sale through a scripted transport and prints the outcome.
//!
//! Run with: `cargo run --example card_sale`

use nvpay::client::MockTransport;
use nvpay::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    let mut invoice = nvpay::objects::Invoice::new();
    invoice.amt = Some(CurrencyValue::new(Decimal::from_str("25.00").unwrap()));
    invoice.invnum = Some("INV-1001".to_string());

    let request = TransactionRequest::new(
        Credentials::new("merchant_user", "merchant_vendor", "PayPal", "secret"),
        TrxType::Sale,
        TenderType::CreditCard,
    )
    .with_card(CreditCard::new("5105105105105100", "0130").with_cvv2("123"))
    .with_invoice(invoice);

    // A real deployment plugs in a TLS transport here.
    let transport = MockTransport::with_response(
        "RESULT=0&PNREF=V19A2B3C4D5E&RESPMSG=Approved&AUTHCODE=010101&AVSADDR=Y&AVSZIP=Y",
    );
    let client = GatewayClient::new(
        GatewayConfig::new("pilot-payflowpro.paypal.com"),
        transport,
    );

    let result = client.submit(&request).await;
    println!("request id: {}", result.request_id);
    println!("approved:   {}", result.is_approved());
    println!("pnref:      {:?}", result.response.transaction.pnref);
    println!("respmsg:    {:?}", result.response.transaction.respmsg);
    for entry in &result.errors {
        println!("context:    {entry}");
    }
}
