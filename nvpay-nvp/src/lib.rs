/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # NVPay NVP Codec
//!
//! Tagged-length name/value pair encoding and decoding for the NVPay gateway SDK.
//!
//! The wire format is `NAME[len]=value&` repeated, where `len` is the exact
//! UTF-8 byte length of `value`. The length tag is what allows values to
//! contain the `&` and `=` delimiter characters literally, with no escaping.
//!
//! ## Components
//!
//! - [`NvpEncoder`]: appends pairs to a growing wire string
//! - [`RequestComposer`]: walks a field tree and drives the encoder
//! - [`NvpDecoder`]: tokenizes a response into a [`ResponseFieldPool`]
//! - [`ResponseFieldPool`]: claim-once field store drained by typed decoders

pub mod composer;
pub mod decoder;
pub mod encoder;
pub mod pool;

pub use composer::RequestComposer;
pub use decoder::NvpDecoder;
pub use encoder::{NvpEncoder, PAIR_SEP, RECORD_SEP, TAG_CLOSE, TAG_OPEN, WireMessage};
pub use pool::{ExtendedParam, ResponseFieldPool};
