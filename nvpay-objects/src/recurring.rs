/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Recurring billing profile data.

use nvpay_core::currency::CurrencyValue;
use nvpay_core::field::{ContributesFields, FieldGroup};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action to perform on a recurring billing profile (ACTION parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringAction {
    /// Create a new profile (A).
    Add,
    /// Modify an existing profile (M).
    Modify,
    /// Reactivate a cancelled profile (R).
    Reactivate,
    /// Cancel a profile (C).
    Cancel,
    /// Look up profile status and history (I).
    Inquiry,
    /// Retry a failed payment (P).
    Payment,
}

impl RecurringAction {
    /// Returns the wire letter for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "A",
            Self::Modify => "M",
            Self::Reactivate => "R",
            Self::Cancel => "C",
            Self::Inquiry => "I",
            Self::Payment => "P",
        }
    }
}

impl fmt::Display for RecurringAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters describing a recurring billing profile.
///
/// Which fields the gateway requires depends on the action: `Add` needs the
/// schedule fields, while `Cancel` or `Inquiry` only need `orig_profile_id`.
/// The object does not enforce that; the gateway rejects incomplete requests
/// with a declined RESULT.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringProfile {
    /// Action to perform.
    pub action: RecurringAction,
    /// Merchant-assigned profile name.
    pub profile_name: Option<String>,
    /// Start date of the schedule, MMDDYYYY.
    pub start: Option<String>,
    /// Number of payments; 0 means until cancelled.
    pub term: Option<i64>,
    /// Payment period keyword (WEEK, MONT, YEAR, ...).
    pub pay_period: Option<String>,
    /// Maximum consecutive failures before suspension.
    pub max_fail_payments: Option<i64>,
    /// Days to wait between retries of a failed payment.
    pub retry_num_days: Option<i64>,
    /// Profile identifier for actions against an existing profile.
    pub orig_profile_id: Option<String>,
    /// Optional inline transaction to run with the profile action.
    pub optional_trx: Option<String>,
    /// Amount for the optional inline transaction.
    pub optional_trx_amt: Option<CurrencyValue>,
}

impl RecurringProfile {
    /// Creates a profile request for the given action with no fields set.
    #[must_use]
    pub fn new(action: RecurringAction) -> Self {
        Self {
            action,
            profile_name: None,
            start: None,
            term: None,
            pay_period: None,
            max_fail_payments: None,
            retry_num_days: None,
            orig_profile_id: None,
            optional_trx: None,
            optional_trx_amt: None,
        }
    }
}

impl ContributesFields for RecurringProfile {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_text("ACTION", Some(self.action.as_str()));
        group.add_text("PROFILENAME", self.profile_name.clone());
        group.add_text("START", self.start.clone());
        group.add_int("TERM", self.term);
        group.add_text("PAYPERIOD", self.pay_period.clone());
        group.add_int("MAXFAILPAYMENTS", self.max_fail_payments);
        group.add_int("RETRYNUMDAYS", self.retry_num_days);
        group.add_text("ORIGPROFILEID", self.orig_profile_id.clone());
        group.add_text("OPTIONALTRX", self.optional_trx.clone());
        group.add_currency("OPTIONALTRXAMT", self.optional_trx_amt.clone());
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvpay_core::context::ErrorContext;
    use nvpay_nvp::RequestComposer;

    #[test]
    fn test_add_profile_fields() {
        let mut profile = RecurringProfile::new(RecurringAction::Add);
        profile.profile_name = Some("GoldPlan".to_string());
        profile.start = Some("01152026".to_string());
        profile.term = Some(12);
        profile.pay_period = Some("MONT".to_string());

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&profile.contribute_fields(), &mut ctx);
        assert_eq!(
            wire.as_str(),
            "ACTION[1]=A&PROFILENAME[8]=GoldPlan&START[8]=01152026&TERM[2]=12&PAYPERIOD[4]=MONT"
        );
    }

    #[test]
    fn test_cancel_only_needs_profile_id() {
        let mut profile = RecurringProfile::new(RecurringAction::Cancel);
        profile.orig_profile_id = Some("RT0000000001".to_string());

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&profile.contribute_fields(), &mut ctx);
        assert_eq!(
            wire.as_str(),
            "ACTION[1]=C&ORIGPROFILEID[12]=RT0000000001"
        );
    }
}
