/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay Objects
//!
//! Typed data objects for NVPay gateway requests.
//!
//! Objects are flat structs composed of optional fields; their only
//! systems-relevant behavior is contributing fields to one outgoing request
//! via [`ContributesFields`](nvpay_core::ContributesFields). Shared address
//! data is a composed struct reused under different field-name prefixes, not
//! a base class: `BillTo` and `ShipTo` wrap the same [`PostalAddress`] with
//! different prefixes.

pub mod address;
pub mod card;
pub mod invoice;
pub mod recurring;
pub mod request;

pub use address::{BillTo, PostalAddress, ShipTo};
pub use card::CreditCard;
pub use invoice::{Invoice, LineItem, PaymentAdvice};
pub use recurring::{RecurringAction, RecurringProfile};
pub use request::{Credentials, TransactionRequest};
