/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Postal addresses.
//!
//! Billing and shipping addresses carry the same data under different
//! field-name prefixes, so the shared encoder takes a prefix parameter:
//! [`BillTo`] contributes bare names (`STREET`, `CITY`, ...) while
//! [`ShipTo`] contributes `SHIPTO`-prefixed names.

use nvpay_core::field::{ContributesFields, FieldGroup};

/// A postal address with optional contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    /// Recipient first name.
    pub first_name: Option<String>,
    /// Recipient last name.
    pub last_name: Option<String>,
    /// Street address, line one.
    pub street: Option<String>,
    /// Street address, line two.
    pub street2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl PostalAddress {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contributes the set fields under the given field-name prefix.
    #[must_use]
    pub fn contribute_with_prefix(&self, prefix: &str) -> FieldGroup {
        let name = |base: &str| format!("{}{}", prefix, base);
        let mut group = FieldGroup::new();
        group.add_text(&name("FIRSTNAME"), self.first_name.clone());
        group.add_text(&name("LASTNAME"), self.last_name.clone());
        group.add_text(&name("STREET"), self.street.clone());
        group.add_text(&name("STREET2"), self.street2.clone());
        group.add_text(&name("CITY"), self.city.clone());
        group.add_text(&name("STATE"), self.state.clone());
        group.add_text(&name("ZIP"), self.zip.clone());
        group.add_text(&name("COUNTRY"), self.country.clone());
        group.add_text(&name("PHONENUM"), self.phone.clone());
        group.add_text(&name("EMAIL"), self.email.clone());
        group
    }
}

/// Billing address; contributes bare field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillTo {
    /// The underlying address.
    pub address: PostalAddress,
}

impl BillTo {
    /// Wraps an address as the billing address.
    #[must_use]
    pub fn new(address: PostalAddress) -> Self {
        Self { address }
    }
}

impl ContributesFields for BillTo {
    fn contribute_fields(&self) -> FieldGroup {
        self.address.contribute_with_prefix("")
    }
}

/// Shipping address; contributes `SHIPTO`-prefixed field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipTo {
    /// The underlying address.
    pub address: PostalAddress,
}

impl ShipTo {
    /// Wraps an address as the shipping address.
    #[must_use]
    pub fn new(address: PostalAddress) -> Self {
        Self { address }
    }
}

impl ContributesFields for ShipTo {
    fn contribute_fields(&self) -> FieldGroup {
        self.address.contribute_with_prefix("SHIPTO")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvpay_core::context::ErrorContext;
    use nvpay_nvp::RequestComposer;

    fn sample() -> PostalAddress {
        PostalAddress {
            first_name: Some("Ada".to_string()),
            street: Some("123 Main St".to_string()),
            city: Some("San Jose".to_string()),
            state: Some("CA".to_string()),
            zip: Some("95131".to_string()),
            ..PostalAddress::default()
        }
    }

    #[test]
    fn test_billto_uses_bare_names() {
        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&BillTo::new(sample()).contribute_fields(), &mut ctx);
        assert_eq!(
            wire.as_str(),
            "FIRSTNAME[3]=Ada&STREET[11]=123 Main St&CITY[8]=San Jose&STATE[2]=CA&ZIP[5]=95131"
        );
    }

    #[test]
    fn test_shipto_uses_prefixed_names() {
        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&ShipTo::new(sample()).contribute_fields(), &mut ctx);
        assert!(wire.as_str().starts_with("SHIPTOFIRSTNAME[3]=Ada"));
        assert!(wire.as_str().contains("SHIPTOZIP[5]=95131"));
        assert!(!wire.as_str().contains("&STREET["));
    }
}
