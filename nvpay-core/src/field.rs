/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types and traits for NVP gateway messages.
//!
//! This module provides:
//! - [`FieldValue`]: Enumeration of possible field value types
//! - [`Field`]: A named value with an explicit presence flag
//! - [`FieldGroup`]: Ordered tree of fields, nested groups, and repeating groups
//! - [`ContributesFields`]: Trait implemented by typed data objects
//!
//! Data objects expose a read-only snapshot of their set fields via
//! [`ContributesFields::contribute_fields`]; the request composer, not the
//! object, owns buffer mutation. An absent field (`value == None`) contributes
//! nothing to the wire string.

use crate::currency::CurrencyValue;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Enumeration of possible NVP field value types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// String value, written verbatim.
    String(String),
    /// Integer value.
    Int(i64),
    /// Boolean value (Y/N on the wire).
    Bool(bool),
    /// Currency amount, rendered through the formatting policy at compose time.
    Currency(CurrencyValue),
}

impl FieldValue {
    /// Returns the value as a string, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Int variant.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the currency value, if it is a Currency variant.
    #[must_use]
    pub const fn as_currency(&self) -> Option<&CurrencyValue> {
        match self {
            Self::Currency(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", if *v { "Y" } else { "N" }),
            Self::Currency(v) => write!(f, "{}", v.amount()),
        }
    }
}

/// A named field with an explicit presence flag.
///
/// `value == None` models a setter that was never called: the field exists in
/// the object's schema but contributes nothing to the wire string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Parameter name as it appears on the wire (e.g. `AMT`).
    pub name: String,
    /// The value, or `None` for an absent field.
    pub value: Option<FieldValue>,
}

impl Field {
    /// Creates a present text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(FieldValue::String(value.into())),
        }
    }

    /// Creates a present integer field.
    #[must_use]
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(FieldValue::Int(value)),
        }
    }

    /// Creates a present Y/N flag field.
    #[must_use]
    pub fn flag(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value: Some(FieldValue::Bool(value)),
        }
    }

    /// Creates a present currency field.
    #[must_use]
    pub fn currency(name: impl Into<String>, value: CurrencyValue) -> Self {
        Self {
            name: name.into(),
            value: Some(FieldValue::Currency(value)),
        }
    }

    /// Creates an absent field.
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Returns true if the field carries a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Index base for a repeating group.
///
/// The positional convention is per group, not global: line items are 0-based
/// while payment-advice details are 1-based. Each [`RepeatingGroup`] carries
/// its own base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexBase {
    /// First instance is suffixed `0`.
    Zero,
    /// First instance is suffixed `1`.
    One,
}

impl IndexBase {
    /// Returns the suffix of the first instance.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl Default for IndexBase {
    fn default() -> Self {
        Self::Zero
    }
}

/// A repeating collection of field groups, each instance suffixing its leaf
/// field names with its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatingGroup {
    /// Positional convention for this group.
    pub base: IndexBase,
    /// Ordered instances; instance `i` is suffixed `base.offset() + i`.
    pub instances: Vec<FieldGroup>,
}

impl RepeatingGroup {
    /// Creates an empty repeating group with the given base.
    #[must_use]
    pub fn new(base: IndexBase) -> Self {
        Self {
            base,
            instances: Vec::new(),
        }
    }

    /// Appends one instance.
    pub fn push(&mut self, instance: FieldGroup) {
        self.instances.push(instance);
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if the group has no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// One node of a field tree.
///
/// The recursive variants are boxed so the node itself stays fixed-size.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupNode {
    /// A leaf field.
    Field(Field),
    /// A nested group, flattened in place.
    Group(Box<FieldGroup>),
    /// An indexed repeating group.
    Repeating(Box<RepeatingGroup>),
}

/// An ordered sequence of fields, nested groups, and repeating groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldGroup {
    nodes: SmallVec<[GroupNode; 8]>,
}

impl FieldGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn push(&mut self, node: GroupNode) {
        self.nodes.push(node);
    }

    /// Appends a leaf field.
    pub fn add_field(&mut self, field: Field) {
        self.push(GroupNode::Field(field));
    }

    /// Appends a text field; `None` records the field as absent.
    pub fn add_text(&mut self, name: &str, value: Option<impl Into<String>>) {
        let field = match value {
            Some(v) => Field::text(name, v),
            None => Field::absent(name),
        };
        self.add_field(field);
    }

    /// Appends an integer field; `None` records the field as absent.
    pub fn add_int(&mut self, name: &str, value: Option<i64>) {
        let field = match value {
            Some(v) => Field::int(name, v),
            None => Field::absent(name),
        };
        self.add_field(field);
    }

    /// Appends a Y/N flag field; `None` records the field as absent.
    pub fn add_flag(&mut self, name: &str, value: Option<bool>) {
        let field = match value {
            Some(v) => Field::flag(name, v),
            None => Field::absent(name),
        };
        self.add_field(field);
    }

    /// Appends a currency field; `None` records the field as absent.
    pub fn add_currency(&mut self, name: &str, value: Option<CurrencyValue>) {
        let field = match value {
            Some(v) => Field::currency(name, v),
            None => Field::absent(name),
        };
        self.add_field(field);
    }

    /// Appends a nested group.
    pub fn add_group(&mut self, group: FieldGroup) {
        self.push(GroupNode::Group(Box::new(group)));
    }

    /// Appends a repeating group.
    pub fn add_repeating(&mut self, group: RepeatingGroup) {
        self.push(GroupNode::Repeating(Box::new(group)));
    }

    /// Returns an iterator over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GroupNode> {
        self.nodes.iter()
    }

    /// Returns the number of direct nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the group has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Trait implemented by typed data objects that contribute fields to a request.
///
/// Implementations return an owned snapshot; the composer owns all buffer
/// mutation during the walk.
pub trait ContributesFields {
    /// Returns the fields this object contributes, in wire order.
    fn contribute_fields(&self) -> FieldGroup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_presence() {
        assert!(Field::text("AMT", "1.00").is_present());
        assert!(!Field::absent("AMT").is_present());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::String("test".to_string()).to_string(), "test");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(true).to_string(), "Y");
        assert_eq!(FieldValue::Bool(false).to_string(), "N");
    }

    #[test]
    fn test_group_add_text_none_is_absent() {
        let mut group = FieldGroup::new();
        group.add_text("CITY", None::<String>);
        group.add_text("STATE", Some("CA"));

        let fields: Vec<&Field> = group
            .nodes()
            .filter_map(|n| match n {
                GroupNode::Field(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(fields.len(), 2);
        assert!(!fields[0].is_present());
        assert!(fields[1].is_present());
    }

    #[test]
    fn test_index_base_offset() {
        assert_eq!(IndexBase::Zero.offset(), 0);
        assert_eq!(IndexBase::One.offset(), 1);
    }

    #[test]
    fn test_repeating_group() {
        let mut group = RepeatingGroup::new(IndexBase::One);
        assert!(group.is_empty());
        group.push(FieldGroup::new());
        group.push(FieldGroup::new());
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_groups_nest_to_arbitrary_depth() {
        let mut inner = FieldGroup::new();
        inner.add_text("ZIP", Some("95131"));

        let mut middle = FieldGroup::new();
        middle.add_group(inner);

        let mut items = RepeatingGroup::new(IndexBase::Zero);
        items.push(middle.clone());

        let mut root = FieldGroup::new();
        root.add_group(middle);
        root.add_repeating(items);
        assert_eq!(root.len(), 2);

        let mut depth = 0;
        let mut cursor = &root;
        while let Some(GroupNode::Group(nested)) = cursor.nodes().next() {
            cursor = nested;
            depth += 1;
        }
        assert_eq!(depth, 2);
    }
}
