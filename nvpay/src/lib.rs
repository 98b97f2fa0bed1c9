/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay
//!
//! A payment-gateway SDK for Rust speaking the tagged-length name/value pair
//! wire format.
//!
//! Requests are composed from typed data objects into a single `NAME[len]=value&`
//! parameter list; responses are tokenized into a claim-once field pool and
//! distributed to typed response structs through a fixed claimer pipeline.
//!
//! ## Features
//!
//! - **Delimiter-safe values**: the length tag carries the exact byte count,
//!   so values may contain `&` and `=` literally with no escaping
//! - **Never-throw codec**: compose and decode always complete, degrading to
//!   best-effort artifacts plus severity-tagged context entries
//! - **Claim-once distribution**: each response field is owned by at most one
//!   typed decoder; the remainder survives as extended data
//! - **Async client**: built on Tokio with a pluggable transport
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nvpay::prelude::*;
//!
//! let request = TransactionRequest::new(
//!     Credentials::new("user", "vendor", "PayPal", "pwd"),
//!     TrxType::Sale,
//!     TenderType::CreditCard,
//! )
//! .with_card(CreditCard::new("5105105105105100", "0130"));
//!
//! let client = GatewayClient::new(GatewayConfig::new("pilot-payflowpro.paypal.com"), transport);
//! let result = client.submit(&request).await;
//! if result.is_approved() {
//!     println!("PNREF: {:?}", result.response.transaction.pnref);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Fundamental types, traits, and error definitions
//! - [`nvp`]: Tagged-length NVP encoding and decoding
//! - [`response`]: Typed response claimers and the claim pipeline
//! - [`objects`]: Typed request data objects
//! - [`client`]: Async client facade and transport abstraction

pub mod core {
    //! Core types, traits, and error definitions.
    pub use nvpay_core::*;
}

pub mod nvp {
    //! Tagged-length NVP encoding and decoding.
    pub use nvpay_nvp::*;
}

pub mod response {
    //! Typed response claimers and the claim pipeline.
    pub use nvpay_response::*;
}

pub mod objects {
    //! Typed request data objects.
    pub use nvpay_objects::*;
}

pub mod client {
    //! Async client facade and transport abstraction.
    pub use nvpay_client::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use nvpay_core::{
        ContributesFields, CurrencyValue, ErrorContext, ErrorEntry, GatewayRequest, NvpError,
        Result, Severity, TenderType, TransactionFamily, TransportError, TrxType,
    };

    // NVP codec
    pub use nvpay_nvp::{NvpDecoder, NvpEncoder, RequestComposer, ResponseFieldPool, WireMessage};

    // Response distribution
    pub use nvpay_response::{
        ExpressCheckoutResponse, GatewayResponse, RecurringResponse, ResponsePipeline,
        TransactionResponse,
    };

    // Data objects
    pub use nvpay_objects::{
        BillTo, CreditCard, Credentials, Invoice, LineItem, PostalAddress, RecurringAction,
        RecurringProfile, ShipTo, TransactionRequest,
    };

    // Client
    pub use nvpay_client::{
        GatewayClient, GatewayConfig, GatewayTransport, RequestId, RequestIdSource,
        TransactionResult,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _trx = TrxType::Sale;
        let _tender = TenderType::CreditCard;
        let _ctx = ErrorContext::new();
    }

    #[test]
    fn test_end_to_end_compose_and_decode() {
        let request = TransactionRequest::new(
            Credentials::new("user", "vendor", "PayPal", "pwd"),
            TrxType::Sale,
            TenderType::CreditCard,
        )
        .with_card(CreditCard::new("5105105105105100", "0130"));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&request.contribute_fields(), &mut ctx);
        assert!(ctx.is_empty());
        assert!(wire.as_str().starts_with("TRXTYPE[1]=S"));

        let (pool, decode_ctx) = NvpDecoder::new("RESULT[1]=0&RESPMSG[8]=Approved").decode();
        assert!(decode_ctx.is_empty());
        let response = ResponsePipeline::run(pool, TransactionFamily::General);
        assert!(response.transaction.is_approved());
    }
}
