/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Recurring-profile response fields.
//!
//! Runs instead of the ExpressCheckout claimers when the request belonged to
//! the Recurring transaction family.

use crate::claimer::FieldClaimer;
use nvpay_nvp::ResponseFieldPool;

/// Typed view of a recurring-profile operation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringResponse {
    /// Recurring profile id.
    pub profileid: Option<String>,
    /// Reference id for the profile operation.
    pub rpref: Option<String>,
    /// Reference id of the optional inline transaction.
    pub trxpnref: Option<String>,
    /// Result code of the optional inline transaction.
    pub trxresult: Option<i32>,
    /// Response message of the optional inline transaction.
    pub trxrespmsg: Option<String>,
    /// Profile status.
    pub status: Option<String>,
    /// Profile name echo.
    pub profname: Option<String>,
    /// First payment date.
    pub start: Option<String>,
    /// Total number of payments.
    pub term: Option<String>,
    /// Payment period code.
    pub payperiod: Option<String>,
    /// Date of the next scheduled payment.
    pub nextpayment: Option<String>,
    /// Date the profile ends.
    pub end: Option<String>,
    /// Total amount collected so far.
    pub aggregateamt: Option<String>,
    /// Total optional amount collected so far.
    pub aggregateoptionalamt: Option<String>,
    /// Sequence number of the next payment.
    pub nextpaymentnum: Option<String>,
    /// Number of failed payments.
    pub numfailpayments: Option<String>,
    /// Days between retry attempts.
    pub retrynumdays: Option<String>,
    /// Masked account number on the profile.
    pub acct: Option<String>,
    /// Expiry of the account on the profile.
    pub expdate: Option<String>,
}

impl FieldClaimer for RecurringResponse {
    const KEYS: &'static [&'static str] = &[
        "PROFILEID",
        "RPREF",
        "TRXPNREF",
        "TRXRESULT",
        "TRXRESPMSG",
        "STATUS",
        "PROFNAME",
        "START",
        "TERM",
        "PAYPERIOD",
        "NEXTPAYMENT",
        "END",
        "AGGREGATEAMT",
        "AGGREGATEOPTIONALAMT",
        "NEXTPAYMENTNUM",
        "NUMFAILPAYMENTS",
        "RETRYNUMDAYS",
        "ACCT",
        "EXPDATE",
    ];

    fn claim(pool: &mut ResponseFieldPool) -> Self {
        Self {
            profileid: pool.take("PROFILEID"),
            rpref: pool.take("RPREF"),
            trxpnref: pool.take("TRXPNREF"),
            trxresult: pool.take_parsed("TRXRESULT"),
            trxrespmsg: pool.take("TRXRESPMSG"),
            status: pool.take("STATUS"),
            profname: pool.take("PROFNAME"),
            start: pool.take("START"),
            term: pool.take("TERM"),
            payperiod: pool.take("PAYPERIOD"),
            nextpayment: pool.take("NEXTPAYMENT"),
            end: pool.take("END"),
            aggregateamt: pool.take("AGGREGATEAMT"),
            aggregateoptionalamt: pool.take("AGGREGATEOPTIONALAMT"),
            nextpaymentnum: pool.take("NEXTPAYMENTNUM"),
            numfailpayments: pool.take("NUMFAILPAYMENTS"),
            retrynumdays: pool.take("RETRYNUMDAYS"),
            acct: pool.take("ACCT"),
            expdate: pool.take("EXPDATE"),
        }
    }
}
