/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Per-operation error context.
//!
//! This module provides:
//! - [`Severity`]: ordered WARN/ERROR/FATAL levels
//! - [`ErrorEntry`]: one severity-tagged, coded error record
//! - [`ErrorContext`]: append-only ordered log owned by one request/response cycle
//!
//! The context is monotonic: entries are added, never removed. Its highest
//! severity is the single signal that gates decoder fallback behavior and that
//! callers inspect to decide whether to trust a typed result. A new context is
//! created per operation; it is never process-global state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code: round and truncate both requested on one currency value.
pub const E_CURRENCY_PROCESS_ERROR: &str = "E_CURRENCY_PROCESS_ERROR";
/// Error code: malformed or truncated response parameter list.
pub const E_PARSE_ERROR: &str = "E_PARSE_ERROR";
/// Error code: response missing the anchor key, state unknown.
pub const E_UNKNOWN_STATE: &str = "E_UNKNOWN_STATE";
/// Error code: transport collaborator failure.
pub const E_TRANSPORT_ERROR: &str = "E_TRANSPORT_ERROR";

/// Severity of an [`ErrorEntry`].
///
/// Ordering is significant: `Warn < Error < Fatal`. A FATAL entry in the
/// context short-circuits normal response decoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Advisory; the operation result is fully usable.
    Warn,
    /// A field or group was degraded; the rest of the result is usable.
    Error,
    /// The operation could not complete normally; typed fields may be absent.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        };
        write!(f, "{}", s)
    }
}

/// One severity-tagged error record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Severity of this entry.
    pub severity: Severity,
    /// Stable machine-readable code (see the `E_*` constants).
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

/// Append-only ordered list of [`ErrorEntry`] records for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    entries: Vec<ErrorEntry>,
}

impl ErrorContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Appends an entry built from its parts.
    pub fn add(
        &mut self,
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(ErrorEntry::new(severity, code, message));
    }

    /// Appends a FATAL entry.
    pub fn add_fatal(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.add(Severity::Fatal, code, message);
    }

    /// Moves all entries from `other` onto the end of this context,
    /// preserving their order.
    pub fn append(&mut self, mut other: ErrorContext) {
        self.entries.append(&mut other.entries);
    }

    /// Returns the highest severity recorded, or `None` if the context is empty.
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.entries.iter().map(|e| e.severity).max()
    }

    /// Returns true if any FATAL entry has been recorded.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.highest_severity() == Some(Severity::Fatal)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorContext {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
