/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core transaction response fields.
//!
//! This claimer runs first in the pipeline and owns the result/reference
//! fields every gateway response carries, plus the processor echo fields.

use crate::claimer::FieldClaimer;
use nvpay_nvp::ResponseFieldPool;

/// Typed view of the core transaction result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Numeric result code; `0` is approval.
    pub result: Option<i32>,
    /// Gateway reference id.
    pub pnref: Option<String>,
    /// Human-readable response message.
    pub respmsg: Option<String>,
    /// Approval code returned by the processor.
    pub authcode: Option<String>,
    /// Address verification match on the street address (Y/N/X).
    pub avsaddr: Option<String>,
    /// Address verification match on the postal code (Y/N/X).
    pub avszip: Option<String>,
    /// Card security code match (Y/N/X).
    pub cvv2match: Option<String>,
    /// International address verification result.
    pub iavs: Option<String>,
    /// Card-on-file security result.
    pub cardsecure: Option<String>,
    /// Result of the original transaction, for inquiries.
    pub origresult: Option<i32>,
    /// State of the transaction in the settlement pipeline.
    pub transstate: Option<i32>,
    /// Merchant-supplied reference echoed back.
    pub custref: Option<String>,
    /// Correlation id for gateway support.
    pub correlationid: Option<String>,
    /// Duplicate-transaction indicator.
    pub duplicate: Option<String>,
    /// Date the transaction settles.
    pub date_to_settle: Option<String>,
    /// Settlement batch id.
    pub batchid: Option<String>,
    /// Additional messages from the processor.
    pub addlmsgs: Option<String>,
    /// American Express transaction id.
    pub amexid: Option<String>,
    /// American Express POS data echo.
    pub amexposdata: Option<String>,
    /// Payment type indicator.
    pub paymenttype: Option<String>,
    /// Reason a payment is pending.
    pub pendingreason: Option<String>,
    /// Raw host processor response code.
    pub hostcode: Option<String>,
    /// Raw host processor response text.
    pub resptext: Option<String>,
    /// Processor-level AVS response.
    pub procavs: Option<String>,
    /// Processor-level card security code response.
    pub proccvv2: Option<String>,
    /// Processor-level card-on-file security response.
    pub proccardsecure: Option<String>,
    /// Additional amount echo (partial approvals).
    pub addlamt: Option<String>,
    /// Amount actually processed.
    pub amt: Option<String>,
    /// Originally requested amount.
    pub origamt: Option<String>,
    /// Remaining balance on prepaid cards.
    pub balamt: Option<String>,
}

impl TransactionResponse {
    /// Returns true if the gateway approved the transaction.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.result == Some(0)
    }
}

impl FieldClaimer for TransactionResponse {
    const KEYS: &'static [&'static str] = &[
        "RESULT",
        "PNREF",
        "RESPMSG",
        "AUTHCODE",
        "AVSADDR",
        "AVSZIP",
        "CVV2MATCH",
        "IAVS",
        "CARDSECURE",
        "ORIGRESULT",
        "TRANSSTATE",
        "CUSTREF",
        "CORRELATIONID",
        "DUPLICATE",
        "DATE_TO_SETTLE",
        "BATCHID",
        "ADDLMSGS",
        "AMEXID",
        "AMEXPOSDATA",
        "PAYMENTTYPE",
        "PENDINGREASON",
        "HOSTCODE",
        "RESPTEXT",
        "PROCAVS",
        "PROCCVV2",
        "PROCCARDSECURE",
        "ADDLAMT",
        "AMT",
        "ORIGAMT",
        "BALAMT",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            result: pool.take_parsed("RESULT"),
            pnref: pool.take("PNREF"),
            respmsg: pool.take("RESPMSG"),
            authcode: pool.take("AUTHCODE"),
            avsaddr: pool.take("AVSADDR"),
            avszip: pool.take("AVSZIP"),
            cvv2match: pool.take("CVV2MATCH"),
            iavs: pool.take("IAVS"),
            cardsecure: pool.take("CARDSECURE"),
            origresult: pool.take_parsed("ORIGRESULT"),
            transstate: pool.take_parsed("TRANSSTATE"),
            custref: pool.take("CUSTREF"),
            correlationid: pool.take("CORRELATIONID"),
            duplicate: pool.take("DUPLICATE"),
            date_to_settle: pool.take("DATE_TO_SETTLE"),
            batchid: pool.take("BATCHID"),
            addlmsgs: pool.take("ADDLMSGS"),
            amexid: pool.take("AMEXID"),
            amexposdata: pool.take("AMEXPOSDATA"),
            paymenttype: pool.take("PAYMENTTYPE"),
            pendingreason: pool.take("PENDINGREASON"),
            hostcode: pool.take("HOSTCODE"),
            resptext: pool.take("RESPTEXT"),
            procavs: pool.take("PROCAVS"),
            proccvv2: pool.take("PROCCVV2"),
            proccardsecure: pool.take("PROCCARDSECURE"),
            addlamt: pool.take("ADDLAMT"),
            amt: pool.take("AMT"),
            origamt: pool.take("ORIGAMT"),
            balamt: pool.take("BALAMT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_removes_owned_keys() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("RESULT", "0".to_string());
        pool.insert("PNREF", "V19A2A192BE9".to_string());
        pool.insert("RESPMSG", "Approved".to_string());
        pool.insert("UNMODELED", "kept".to_string());

        let response = TransactionResponse::claim(&mut pool);
        assert_eq!(response.result, Some(0));
        assert!(response.is_approved());
        assert_eq!(response.pnref.as_deref(), Some("V19A2A192BE9"));
        assert_eq!(response.respmsg.as_deref(), Some("Approved"));

        for key in TransactionResponse::KEYS {
            assert!(!pool.contains(key), "claimed key {key} still in pool");
        }
        assert_eq!(pool.get("UNMODELED"), Some("kept"));
    }

    #[test]
    fn test_missing_keys_are_none_not_errors() {
        let mut pool = ResponseFieldPool::new();
        let response = TransactionResponse::claim(&mut pool);
        assert_eq!(response.result, None);
        assert_eq!(response.pnref, None);
        assert!(!response.is_approved());
    }

    #[test]
    fn test_declined_result() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("RESULT", "12".to_string());
        pool.insert("RESPMSG", "Declined".to_string());

        let response = TransactionResponse::claim(&mut pool);
        assert_eq!(response.result, Some(12));
        assert!(!response.is_approved());
    }
}
