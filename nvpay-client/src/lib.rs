/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay Client
//!
//! Async client facade for the NVPay payment-gateway SDK.
//!
//! The facade owns the request/response cycle: compose the wire string,
//! submit it through a pluggable [`GatewayTransport`], decode the body, and
//! distribute fields through the claim pipeline. Submission never fails with
//! `Err`; degraded outcomes surface as context entries plus the synthetic
//! unknown-state response.
//!
//! ## Components
//!
//! - [`GatewayClient`]: the facade
//! - [`GatewayTransport`]: abstract connection interface
//! - [`GatewayConfig`]: host, port, timeout, and proxy settings
//! - [`RequestIdSource`]: unique per-transaction id generation

pub mod client;
pub mod config;
pub mod request_id;
pub mod transport;

pub use client::{GatewayClient, TransactionResult};
pub use config::{GatewayConfig, ProxyConfig};
pub use request_id::{RequestId, RequestIdSource};
pub use transport::{GatewayTransport, MockTransport};
