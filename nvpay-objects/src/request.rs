/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The top-level transaction request object.
//!
//! A [`TransactionRequest`] aggregates credentials, the transaction
//! vocabulary, and the nested data objects, and contributes them in wire
//! order: vocabulary first, then credentials, then nested groups. The
//! claimer-pipeline branch for the response follows from the TRXTYPE letter.

use crate::card::CreditCard;
use crate::invoice::Invoice;
use crate::recurring::RecurringProfile;
use nvpay_core::field::{ContributesFields, FieldGroup};
use nvpay_core::types::{GatewayRequest, TenderType, TransactionFamily, TrxType};

/// Merchant credentials for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account user name.
    pub user: String,
    /// Merchant vendor identifier.
    pub vendor: String,
    /// Partner identifier.
    pub partner: String,
    /// Account password.
    pub pwd: String,
}

impl Credentials {
    /// Creates a credential set.
    #[must_use]
    pub fn new(
        user: impl Into<String>,
        vendor: impl Into<String>,
        partner: impl Into<String>,
        pwd: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            vendor: vendor.into(),
            partner: partner.into(),
            pwd: pwd.into(),
        }
    }
}

impl ContributesFields for Credentials {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_text("USER", Some(self.user.clone()));
        group.add_text("VENDOR", Some(self.vendor.clone()));
        group.add_text("PARTNER", Some(self.partner.clone()));
        group.add_text("PWD", Some(self.pwd.clone()));
        group
    }
}

/// One complete gateway transaction request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    /// Merchant credentials.
    pub credentials: Credentials,
    /// Transaction type letter.
    pub trxtype: TrxType,
    /// Payment method letter.
    pub tender: TenderType,
    /// Response verbosity level (e.g. HIGH).
    pub verbosity: Option<String>,
    /// Transaction-level comment, field one.
    pub comment1: Option<String>,
    /// Transaction-level comment, field two.
    pub comment2: Option<String>,
    /// Payment card, when tender is a card.
    pub card: Option<CreditCard>,
    /// Invoice data.
    pub invoice: Option<Invoice>,
    /// Recurring profile data, when trxtype is Recurring.
    pub recurring: Option<RecurringProfile>,
}

impl TransactionRequest {
    /// Creates a request with the given credentials, type, and tender.
    #[must_use]
    pub fn new(credentials: Credentials, trxtype: TrxType, tender: TenderType) -> Self {
        Self {
            credentials,
            trxtype,
            tender,
            verbosity: None,
            comment1: None,
            comment2: None,
            card: None,
            invoice: None,
            recurring: None,
        }
    }

    /// Sets the payment card.
    #[must_use]
    pub fn with_card(mut self, card: CreditCard) -> Self {
        self.card = Some(card);
        self
    }

    /// Sets the invoice.
    #[must_use]
    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoice = Some(invoice);
        self
    }

    /// Sets the recurring profile.
    #[must_use]
    pub fn with_recurring(mut self, profile: RecurringProfile) -> Self {
        self.recurring = Some(profile);
        self
    }

    /// Sets the response verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: impl Into<String>) -> Self {
        self.verbosity = Some(verbosity.into());
        self
    }
}

impl ContributesFields for TransactionRequest {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_text("TRXTYPE", Some(self.trxtype.as_str()));
        group.add_text("TENDER", Some(self.tender.as_str()));
        group.add_group(self.credentials.contribute_fields());
        group.add_text("VERBOSITY", self.verbosity.clone());
        group.add_text("COMMENT1", self.comment1.clone());
        group.add_text("COMMENT2", self.comment2.clone());

        if let Some(card) = &self.card {
            group.add_group(card.contribute_fields());
        }
        if let Some(recurring) = &self.recurring {
            group.add_group(recurring.contribute_fields());
        }
        if let Some(invoice) = &self.invoice {
            group.add_group(invoice.contribute_fields());
        }

        group
    }
}

impl GatewayRequest for TransactionRequest {
    fn family(&self) -> TransactionFamily {
        self.trxtype.family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvpay_core::context::ErrorContext;
    use nvpay_core::currency::CurrencyValue;
    use nvpay_nvp::RequestComposer;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn credentials() -> Credentials {
        Credentials::new("user", "vendor", "PayPal", "pwd123")
    }

    #[test]
    fn test_sale_request_wire_order() {
        let mut invoice = Invoice::new();
        invoice.amt = Some(CurrencyValue::new(Decimal::from_str("25.00").unwrap()));

        let request = TransactionRequest::new(credentials(), TrxType::Sale, TenderType::CreditCard)
            .with_card(CreditCard::new("5105105105105100", "0130"))
            .with_invoice(invoice);

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&request.contribute_fields(), &mut ctx);
        assert_eq!(
            wire.as_str(),
            "TRXTYPE[1]=S&TENDER[1]=C&USER[4]=user&VENDOR[6]=vendor&PARTNER[6]=PayPal&\
             PWD[6]=pwd123&ACCT[16]=5105105105105100&EXPDATE[4]=0130&AMT[5]=25.00"
        );
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_family_follows_trxtype() {
        let sale = TransactionRequest::new(credentials(), TrxType::Sale, TenderType::CreditCard);
        assert_eq!(sale.family(), TransactionFamily::General);

        let recurring =
            TransactionRequest::new(credentials(), TrxType::Recurring, TenderType::CreditCard)
                .with_recurring(RecurringProfile::new(crate::recurring::RecurringAction::Add));
        assert_eq!(recurring.family(), TransactionFamily::Recurring);
    }
}
