/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay Response
//!
//! Typed response field claimers and the claim pipeline for the NVPay SDK.
//!
//! Each claimer owns a fixed, hard-coded key set. Claiming removes those keys
//! from the shared [`ResponseFieldPool`](nvpay_nvp::ResponseFieldPool), so a
//! key is observed by at most one claimer. Missing keys are `None` in the
//! typed result, never a failure. Whatever no claimer recognizes becomes the
//! extended-data list, preserved for forward compatibility.

pub mod buyer_auth;
pub mod claimer;
pub mod express_checkout;
pub mod fraud;
pub mod pipeline;
pub mod recurring;
pub mod transaction;

pub use buyer_auth::BuyerAuthResponse;
pub use claimer::FieldClaimer;
pub use express_checkout::{
    EcDoResponse, EcGetResponse, EcSetResponse, EcUpdateResponse, ExpressCheckoutResponse,
};
pub use fraud::FraudResponse;
pub use pipeline::{GatewayResponse, ResponsePipeline};
pub use recurring::RecurringResponse;
pub use transaction::TransactionResponse;
