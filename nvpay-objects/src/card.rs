/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Payment card data.

use nvpay_core::field::{ContributesFields, FieldGroup};

/// A credit or purchase card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    /// Card number.
    pub acct: String,
    /// Expiry date in MMYY form.
    pub expdate: String,
    /// Card security code.
    pub cvv2: Option<String>,
    /// Name on the card.
    pub name: Option<String>,
}

impl CreditCard {
    /// Creates a card from its account number and MMYY expiry.
    #[must_use]
    pub fn new(acct: impl Into<String>, expdate: impl Into<String>) -> Self {
        Self {
            acct: acct.into(),
            expdate: expdate.into(),
            cvv2: None,
            name: None,
        }
    }

    /// Sets the card security code.
    #[must_use]
    pub fn with_cvv2(mut self, cvv2: impl Into<String>) -> Self {
        self.cvv2 = Some(cvv2.into());
        self
    }

    /// Sets the name on the card.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl ContributesFields for CreditCard {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_text("ACCT", Some(self.acct.clone()));
        group.add_text("EXPDATE", Some(self.expdate.clone()));
        group.add_text("CVV2", self.cvv2.clone());
        group.add_text("NAME", self.name.clone());
        group
    }
}
