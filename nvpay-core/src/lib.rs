/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay Core
//!
//! Core types, traits, and error definitions for the NVPay payment-gateway SDK.
//!
//! This crate provides the fundamental building blocks used across all NVPay crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `Field`, `FieldValue`, `FieldGroup`, and the `ContributesFields` trait
//! - **Error context**: per-operation, append-only log of severity-tagged entries
//! - **Currency values**: decimal amounts with explicit round/truncate/pad policies
//! - **Vocabulary**: `TrxType`, `TenderType`, `TransactionFamily`
//!
//! ## Never-throw Design
//!
//! Composition and decoding never abort: every failure path degrades to a
//! best-effort artifact plus one or more entries recorded in an [`ErrorContext`].
//! `Result`-returning APIs are reserved for programmer-facing conversions.

pub mod context;
pub mod currency;
pub mod error;
pub mod field;
pub mod names;
pub mod types;

pub use context::{ErrorContext, ErrorEntry, Severity};
pub use currency::{CurrencyValue, FormatPolicy};
pub use error::{FormatError, NvpError, ParseError, Result, TransportError, VocabError};
pub use field::{
    ContributesFields, Field, FieldGroup, FieldValue, GroupNode, IndexBase, RepeatingGroup,
};
pub use types::{GatewayRequest, TenderType, TransactionFamily, TrxType};
