/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the NVPay gateway SDK.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all NVPay operations.
//!
//! Note that the codec itself never propagates these as `Err` across the public
//! boundary: compose and decode always complete and report failures through an
//! [`ErrorContext`](crate::context::ErrorContext). The types here exist so that
//! entries carry structured causes and so that collaborators (transport,
//! vocabulary parsing) have conventional `Result` signatures.

use thiserror::Error;

/// Result type alias using [`NvpError`] as the error type.
pub type Result<T> = std::result::Result<T, NvpError>;

/// Top-level error type for all NVPay operations.
#[derive(Debug, Error)]
pub enum NvpError {
    /// Error while tokenizing a response parameter list.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error while formatting an outgoing value.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Error in the transport collaborator.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Unknown vocabulary code.
    #[error("vocabulary error: {0}")]
    Vocab(#[from] VocabError),
}

/// Errors that occur while tokenizing a gateway response string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A length tag declared more bytes than remain in the buffer.
    #[error("truncated value: declared {declared} bytes, {remaining} remain")]
    TruncatedValue {
        /// Byte count declared by the length tag.
        declared: usize,
        /// Bytes actually remaining in the buffer.
        remaining: usize,
    },

    /// A length tag was opened but never closed, or held a non-numeric count.
    #[error("invalid length tag: {0}")]
    InvalidLengthTag(String),

    /// A declared length splits a multi-byte UTF-8 character.
    #[error("value at offset {offset} is not valid utf-8")]
    InvalidUtf8Boundary {
        /// Byte offset of the offending value.
        offset: usize,
    },

    /// The response carried no recognizable anchor key.
    #[error("response has no anchor key, state unknown")]
    MissingAnchor,
}

/// Errors that occur while rendering an outgoing field value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Round and Truncate were both requested on the same currency value.
    #[error("conflicting currency policy: round and truncate both set")]
    ConflictingPolicy,
}

/// Errors surfaced by the transport collaborator.
///
/// The codec treats these as opaque: any variant becomes a FATAL entry plus
/// the synthetic RESULT/RESPMSG fallback, never a propagated failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the gateway host.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The gateway did not answer within the configured timeout.
    #[error("timeout after {elapsed_ms} milliseconds")]
    Timeout {
        /// Elapsed time in milliseconds.
        elapsed_ms: u64,
    },

    /// Proxy negotiation failed.
    #[error("proxy error: {0}")]
    Proxy(String),

    /// Other I/O failure on the connection.
    #[error("io error: {0}")]
    Io(String),
}

/// Unknown wire codes for the closed vocabulary enums.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// Unrecognized TRXTYPE letter.
    #[error("unknown transaction type: {0}")]
    UnknownTrxType(String),

    /// Unrecognized TENDER letter.
    #[error("unknown tender type: {0}")]
    UnknownTenderType(String),
}
