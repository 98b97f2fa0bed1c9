/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Request composition.
//!
//! The composer walks a tree of field-contributing nodes depth-first and
//! drives the [`NvpEncoder`], owning the shared buffer for the duration of one
//! request build. Indexed repeating groups emit each instance with every leaf
//! field name suffixed by its position, per the group's own index base.
//!
//! Composition always completes: a currency value whose policy conflicts is
//! recorded as a FATAL entry and the field is omitted, but the rest of the
//! message is still produced.

use crate::encoder::{NvpEncoder, WireMessage};
use nvpay_core::context::ErrorContext;
use nvpay_core::field::{Field, FieldGroup, FieldValue, GroupNode};

/// Walks a field tree and produces one [`WireMessage`].
#[derive(Debug)]
pub struct RequestComposer;

impl RequestComposer {
    /// Composes the wire string for `root`, recording any formatting failures
    /// in `ctx`.
    #[must_use]
    pub fn compose(root: &FieldGroup, ctx: &mut ErrorContext) -> WireMessage {
        let mut encoder = NvpEncoder::new();
        Self::walk(root, None, &mut encoder, ctx);
        encoder.finish()
    }

    fn walk(
        group: &FieldGroup,
        index: Option<usize>,
        encoder: &mut NvpEncoder,
        ctx: &mut ErrorContext,
    ) {
        for node in group.nodes() {
            match node {
                GroupNode::Field(field) => Self::emit(field, index, encoder, ctx),
                GroupNode::Group(nested) => Self::walk(nested, index, encoder, ctx),
                GroupNode::Repeating(repeating) => {
                    for (i, instance) in repeating.instances.iter().enumerate() {
                        let position = repeating.base.offset() + i;
                        Self::walk(instance, Some(position), encoder, ctx);
                    }
                }
            }
        }
    }

    fn emit(field: &Field, index: Option<usize>, encoder: &mut NvpEncoder, ctx: &mut ErrorContext) {
        let Some(value) = &field.value else {
            return;
        };

        let rendered = match value {
            FieldValue::String(s) => s.clone(),
            FieldValue::Int(v) => {
                let mut buf = itoa::Buffer::new();
                buf.format(*v).to_string()
            }
            FieldValue::Bool(v) => if *v { "Y" } else { "N" }.to_string(),
            // A conflicting policy leaves `rendered` empty; the encoder then
            // skips the pair and composition continues.
            FieldValue::Currency(c) => c.format(ctx),
        };

        match index {
            Some(i) => {
                let mut buf = itoa::Buffer::new();
                let mut name = String::with_capacity(field.name.len() + 2);
                name.push_str(&field.name);
                name.push_str(buf.format(i));
                encoder.put(&name, &rendered);
            }
            None => encoder.put(&field.name, &rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::NvpDecoder;
    use nvpay_core::currency::CurrencyValue;
    use nvpay_core::field::{IndexBase, RepeatingGroup};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn currency(s: &str) -> CurrencyValue {
        CurrencyValue::new(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_compose_flat_group() {
        let mut group = FieldGroup::new();
        group.add_text("TRXTYPE", Some("S"));
        group.add_text("TENDER", Some("C"));
        group.add_currency("AMT", Some(currency("25.12")));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&group, &mut ctx);
        assert!(ctx.is_empty());
        assert_eq!(wire.as_str(), "TRXTYPE[1]=S&TENDER[1]=C&AMT[5]=25.12");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let mut group = FieldGroup::new();
        group.add_text("CITY", None::<String>);
        group.add_text("STATE", Some("CA"));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&group, &mut ctx);
        assert_eq!(wire.as_str(), "STATE[2]=CA");
    }

    #[test]
    fn test_nested_groups_flatten_in_order() {
        let mut billing = FieldGroup::new();
        billing.add_text("STREET", Some("123 Main St"));
        billing.add_text("ZIP", Some("00382"));

        let mut root = FieldGroup::new();
        root.add_text("TRXTYPE", Some("S"));
        root.add_group(billing);
        root.add_text("COMMENT1", Some("order 7"));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&root, &mut ctx);
        assert_eq!(
            wire.as_str(),
            "TRXTYPE[1]=S&STREET[11]=123 Main St&ZIP[5]=00382&COMMENT1[7]=order 7"
        );
    }

    #[test]
    fn test_zero_based_repeating_group() {
        let mut items = RepeatingGroup::new(IndexBase::Zero);
        for amt in ["8.95", "5.25"] {
            let mut item = FieldGroup::new();
            item.add_currency("L_AMT", Some(currency(amt)));
            item.add_int("L_QTY", Some(1));
            items.push(item);
        }

        let mut root = FieldGroup::new();
        root.add_repeating(items);

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&root, &mut ctx);
        assert_eq!(
            wire.as_str(),
            "L_AMT0[4]=8.95&L_QTY0[1]=1&L_AMT1[4]=5.25&L_QTY1[1]=1"
        );
    }

    #[test]
    fn test_one_based_repeating_group() {
        let mut advice = RepeatingGroup::new(IndexBase::One);
        for amt in ["1.00", "2.00"] {
            let mut detail = FieldGroup::new();
            detail.add_currency("ADDLAMT", Some(currency(amt)));
            advice.push(detail);
        }

        let mut root = FieldGroup::new();
        root.add_repeating(advice);

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&root, &mut ctx);
        assert_eq!(wire.as_str(), "ADDLAMT1[4]=1.00&ADDLAMT2[4]=2.00");
    }

    #[test]
    fn test_currency_conflict_omits_field_and_completes() {
        let mut bad = currency("25.1256");
        bad.set_round(true);
        bad.set_truncate(true);

        let mut root = FieldGroup::new();
        root.add_text("TRXTYPE", Some("S"));
        root.add_currency("AMT", Some(bad));
        root.add_text("COMMENT1", Some("still here"));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&root, &mut ctx);

        assert!(ctx.is_fatal());
        assert_eq!(ctx.count(), 1);
        assert!(!wire.as_str().contains("AMT"));
        assert_eq!(wire.as_str(), "TRXTYPE[1]=S&COMMENT1[10]=still here");
    }

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let mut root = FieldGroup::new();
        root.add_text("TRXTYPE", Some("S"));
        root.add_text("COMPANYNAME", Some("A&B=C"));
        root.add_currency("AMT", Some(currency("8.95")));

        let mut ctx = ErrorContext::new();
        let wire = RequestComposer::compose(&root, &mut ctx);

        // The decoder needs an anchor; splice the composed request after a
        // RESULT pair to exercise tokenization of the tagged form.
        let echoed = format!("RESULT[1]=0&{}", wire.as_str());
        let (pool, decode_ctx) = NvpDecoder::new(&echoed).decode();
        assert!(decode_ctx.is_empty());

        let pairs: Vec<(&str, &str)> = pool.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("RESULT", "0"),
                ("TRXTYPE", "S"),
                ("COMPANYNAME", "A&B=C"),
                ("AMT", "8.95"),
            ]
        );
    }
}
