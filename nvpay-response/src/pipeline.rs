/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The fixed claim pipeline.
//!
//! Generic claimers (Transaction, Fraud, BuyerAuth) run unconditionally, then
//! the pipeline branches by transaction family: Recurring-family responses run
//! the Recurring claimer, everything else runs the four ExpressCheckout
//! claimers. Whatever remains in the pool afterwards becomes the extended-data
//! list, in pool order.

use crate::buyer_auth::BuyerAuthResponse;
use crate::claimer::FieldClaimer;
use crate::express_checkout::ExpressCheckoutResponse;
use crate::fraud::FraudResponse;
use crate::recurring::RecurringResponse;
use crate::transaction::TransactionResponse;
use nvpay_core::types::TransactionFamily;
use nvpay_nvp::{ExtendedParam, ResponseFieldPool};

/// Fully distributed view of one gateway response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayResponse {
    /// Core transaction result.
    pub transaction: TransactionResponse,
    /// Fraud-filter screening results.
    pub fraud: FraudResponse,
    /// Buyer-authentication handshake results.
    pub buyer_auth: BuyerAuthResponse,
    /// Recurring-profile fields; present only for the Recurring family.
    pub recurring: Option<RecurringResponse>,
    /// ExpressCheckout fields; present for every other family.
    pub express_checkout: Option<ExpressCheckoutResponse>,
    /// Fields no claimer recognized, preserved for forward compatibility.
    pub extended: Vec<ExtendedParam>,
}

/// Drains a [`ResponseFieldPool`] through the fixed claimer sequence.
#[derive(Debug)]
pub struct ResponsePipeline;

impl ResponsePipeline {
    /// Runs the pipeline to completion and converts the remainder into
    /// extended data.
    #[must_use]
    pub fn run(mut pool: ResponseFieldPool, family: TransactionFamily) -> GatewayResponse {
        let transaction = TransactionResponse::claim(&mut pool);
        let fraud = FraudResponse::claim(&mut pool);
        let buyer_auth = BuyerAuthResponse::claim(&mut pool);

        let (recurring, express_checkout) = match family {
            TransactionFamily::Recurring => (Some(RecurringResponse::claim(&mut pool)), None),
            TransactionFamily::General => {
                (None, Some(ExpressCheckoutResponse::claim_all(&mut pool)))
            }
        };

        GatewayResponse {
            transaction,
            fraud,
            buyer_auth,
            recurring,
            express_checkout,
            extended: pool.into_extended_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvpay_nvp::NvpDecoder;

    fn decode(wire: &str) -> ResponseFieldPool {
        let (pool, ctx) = NvpDecoder::new(wire).decode();
        assert!(!ctx.is_fatal());
        pool
    }

    #[test]
    fn test_general_family_runs_express_checkout() {
        let pool = decode("RESULT=0&PNREF=V1&RESPMSG=Approved&TOKEN=EC-123&PAYERID=ABC");
        let response = ResponsePipeline::run(pool, TransactionFamily::General);

        assert!(response.transaction.is_approved());
        assert!(response.recurring.is_none());
        let ec = response.express_checkout.expect("EC claimers must run");
        assert_eq!(ec.set.token.as_deref(), Some("EC-123"));
        assert_eq!(ec.get.payerid.as_deref(), Some("ABC"));
        assert!(response.extended.is_empty());
    }

    #[test]
    fn test_recurring_family_skips_express_checkout() {
        let pool = decode("RESULT=0&RPREF=R7&PROFILEID=RT0000000001&STATUS=ACTIVE");
        let response = ResponsePipeline::run(pool, TransactionFamily::Recurring);

        assert!(response.express_checkout.is_none());
        let recurring = response.recurring.expect("recurring claimer must run");
        assert_eq!(recurring.profileid.as_deref(), Some("RT0000000001"));
        assert_eq!(recurring.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn test_unclaimed_fields_become_extended_data_in_order() {
        let pool = decode("RESULT=0&ZEBRA=z&PNREF=V1&APPLE=a");
        let response = ResponsePipeline::run(pool, TransactionFamily::General);

        let names: Vec<&str> = response.extended.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ZEBRA", "APPLE"]);
    }

    #[test]
    fn test_claimed_keys_never_reach_extended_data() {
        let pool = decode("RESULT=0&PNREF=V1&PREFPSMSG=Review&ACSURL=u&TOKEN=t&CUSTOM=x");
        let response = ResponsePipeline::run(pool, TransactionFamily::General);

        for claimed in ["RESULT", "PNREF", "PREFPSMSG", "ACSURL", "TOKEN"] {
            assert!(
                !response.extended.iter().any(|p| p.name == claimed),
                "claimed key {claimed} leaked into extended data"
            );
        }
        assert_eq!(response.extended.len(), 1);
        assert_eq!(response.extended[0].name, "CUSTOM");
    }

    #[test]
    fn test_duplicate_extended_fields_survive_pipeline() {
        let pool = decode("RESULT=0&EXTDATA=a&EXTDATA=b");
        let response = ResponsePipeline::run(pool, TransactionFamily::General);

        let names: Vec<&str> = response.extended.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["EXTDATA", "EXTDATA_DUPLICATE_1"]);
    }
}
