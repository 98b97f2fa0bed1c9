/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Invoice data: totals, references, addresses, and repeating item groups.
//!
//! Line items are a 0-based repeating group (`L_AMT0`, `L_AMT1`, ...).
//! Payment-advice details are a 1-based repeating group (`ADDLAMT1`, ...).
//! The positional convention belongs to each group, not to the SDK.

use crate::address::{BillTo, ShipTo};
use nvpay_core::currency::CurrencyValue;
use nvpay_core::field::{ContributesFields, FieldGroup, IndexBase, RepeatingGroup};

/// One purchased item on an invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItem {
    /// Item name.
    pub name: Option<String>,
    /// Item description.
    pub desc: Option<String>,
    /// Item amount.
    pub amt: Option<CurrencyValue>,
    /// Quantity purchased.
    pub qty: Option<i64>,
    /// Tax on this item.
    pub taxamt: Option<CurrencyValue>,
}

impl LineItem {
    /// Creates an empty line item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContributesFields for LineItem {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_text("L_NAME", self.name.clone());
        group.add_text("L_DESC", self.desc.clone());
        group.add_currency("L_AMT", self.amt.clone());
        group.add_int("L_QTY", self.qty);
        group.add_currency("L_TAXAMT", self.taxamt.clone());
        group
    }
}

/// One additional-amount advice detail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentAdvice {
    /// Additional amount.
    pub amt: Option<CurrencyValue>,
    /// Type code for the additional amount.
    pub amt_type: Option<i64>,
}

impl ContributesFields for PaymentAdvice {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_currency("ADDLAMT", self.amt.clone());
        group.add_int("ADDLAMTTYPE", self.amt_type);
        group
    }
}

/// Invoice totals, merchant references, and nested groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    /// Transaction amount.
    pub amt: Option<CurrencyValue>,
    /// Tax portion of the amount.
    pub taxamt: Option<CurrencyValue>,
    /// Freight portion of the amount.
    pub freightamt: Option<CurrencyValue>,
    /// Merchant invoice number.
    pub invnum: Option<String>,
    /// Purchase order number.
    pub ponum: Option<String>,
    /// Merchant comment, field one.
    pub comment1: Option<String>,
    /// Merchant comment, field two.
    pub comment2: Option<String>,
    /// Billing address.
    pub bill_to: Option<BillTo>,
    /// Shipping address.
    pub ship_to: Option<ShipTo>,
    /// Purchased items; 0-based on the wire.
    pub line_items: Vec<LineItem>,
    /// Advice details; 1-based on the wire.
    pub advice_details: Vec<PaymentAdvice>,
}

impl Invoice {
    /// Creates an empty invoice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transaction amount.
    #[must_use]
    pub fn with_amt(mut self, amt: CurrencyValue) -> Self {
        self.amt = Some(amt);
        self
    }

    /// Appends a line item.
    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Appends an advice detail.
    pub fn add_advice_detail(&mut self, advice: PaymentAdvice) {
        self.advice_details.push(advice);
    }
}

impl ContributesFields for Invoice {
    fn contribute_fields(&self) -> FieldGroup {
        let mut group = FieldGroup::new();
        group.add_currency("AMT", self.amt.clone());
        group.add_currency("TAXAMT", self.taxamt.clone());
        group.add_currency("FREIGHTAMT", self.freightamt.clone());
        group.add_text("INVNUM", self.invnum.clone());
        group.add_text("PONUM", self.ponum.clone());
        group.add_text("COMMENT1", self.comment1.clone());
        group.add_text("COMMENT2", self.comment2.clone());

        if let Some(bill_to) = &self.bill_to {
            group.add_group(bill_to.contribute_fields());
        }
        if let Some(ship_to) = &self.ship_to {
            group.add_group(ship_to.contribute_fields());
        }

        if !self.line_items.is_empty() {
            let mut items = RepeatingGroup::new(IndexBase::Zero);
            for item in &self.line_items {
                items.push(item.contribute_fields());
            }
            group.add_repeating(items);
        }

        if !self.advice_details.is_empty() {
            let mut advice = RepeatingGroup::new(IndexBase::One);
            for detail in &self.advice_details {
                advice.push(detail.contribute_fields());
            }
            group.add_repeating(advice);
        }

        group
    }
}
