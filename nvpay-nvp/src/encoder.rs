/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! NVP wire-string encoder.
//!
//! This module provides an encoder for building gateway parameter lists in the
//! tagged-length `NAME[len]=value` format, with pairs separated by `&`.

use std::fmt;

/// Opens a length tag after the parameter name.
pub const TAG_OPEN: u8 = b'[';

/// Closes a length tag.
pub const TAG_CLOSE: u8 = b']';

/// Separates the tagged name from the value.
pub const PAIR_SEP: u8 = b'=';

/// Separates consecutive pairs.
pub const RECORD_SEP: u8 = b'&';

/// A fully encoded request parameter list.
///
/// Logically an ordered sequence of `(name, tagged length, value)` triples.
/// Re-decoding a `WireMessage` reproduces exactly the field set used to build
/// it, except for intentional omissions of absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireMessage(String);

impl WireMessage {
    /// Returns the wire string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no pairs were emitted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the message and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WireMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NVP parameter-list encoder.
///
/// The encoder appends pairs in insertion order; the wire format does not sort
/// keys, and some receivers are order-sensitive for indexed groups. It owns no
/// domain knowledge: callers pass already-resolved values.
#[derive(Debug, Default)]
pub struct NvpEncoder {
    buf: String,
}

impl NvpEncoder {
    /// Creates a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    /// Creates a new encoder with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends one `name[len]=value` pair.
    ///
    /// Empty values are skipped entirely: no key is emitted. The length tag is
    /// the exact UTF-8 byte length of `value`, so the value may contain the
    /// record or pair delimiter characters literally.
    pub fn put(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if !self.buf.is_empty() {
            self.buf.push(RECORD_SEP as char);
        }
        let mut len_buf = itoa::Buffer::new();
        self.buf.push_str(name);
        self.buf.push(TAG_OPEN as char);
        self.buf.push_str(len_buf.format(value.len()));
        self.buf.push(TAG_CLOSE as char);
        self.buf.push(PAIR_SEP as char);
        self.buf.push_str(value);
    }

    /// Appends a pair with an integer value.
    pub fn put_int(&mut self, name: &str, value: i64) {
        let mut buf = itoa::Buffer::new();
        let s = buf.format(value);
        self.put(name, s);
    }

    /// Appends a pair with a Y/N flag value.
    pub fn put_flag(&mut self, name: &str, value: bool) {
        self.put(name, if value { "Y" } else { "N" });
    }

    /// Returns the current buffer length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been emitted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Finalizes the buffer into a [`WireMessage`].
    #[must_use]
    pub fn finish(self) -> WireMessage {
        WireMessage(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_basic() {
        let mut encoder = NvpEncoder::new();
        encoder.put("TRXTYPE", "S");
        encoder.put("AMT", "25.12");

        let wire = encoder.finish();
        assert_eq!(wire.as_str(), "TRXTYPE[1]=S&AMT[5]=25.12");
    }

    #[test]
    fn test_encoder_length_is_byte_count() {
        let mut encoder = NvpEncoder::new();
        encoder.put("COMMENT1", "caf\u{e9}");

        // 'é' is two bytes in UTF-8.
        assert_eq!(encoder.finish().as_str(), "COMMENT1[5]=caf\u{e9}");
    }

    #[test]
    fn test_encoder_value_may_contain_delimiters() {
        let mut encoder = NvpEncoder::new();
        encoder.put("COMPANYNAME", "A&B=C");

        assert_eq!(encoder.finish().as_str(), "COMPANYNAME[5]=A&B=C");
    }

    #[test]
    fn test_encoder_skips_empty_values() {
        let mut encoder = NvpEncoder::new();
        encoder.put("CITY", "");
        encoder.put("STATE", "CA");

        let wire = encoder.finish();
        assert_eq!(wire.as_str(), "STATE[2]=CA");
        assert!(!wire.as_str().contains("CITY"));
    }

    #[test]
    fn test_encoder_preserves_insertion_order() {
        let mut encoder = NvpEncoder::new();
        encoder.put("ZZZ", "1");
        encoder.put("AAA", "2");

        assert_eq!(encoder.finish().as_str(), "ZZZ[1]=1&AAA[1]=2");
    }

    #[test]
    fn test_encoder_int_and_flag() {
        let mut encoder = NvpEncoder::new();
        encoder.put_int("TERM", 12);
        encoder.put_flag("VERBOSE", true);

        assert_eq!(encoder.finish().as_str(), "TERM[2]=12&VERBOSE[1]=Y");
    }

    #[test]
    fn test_encoder_clear() {
        let mut encoder = NvpEncoder::new();
        encoder.put("AMT", "1.00");
        assert!(!encoder.is_empty());

        encoder.clear();
        assert!(encoder.is_empty());
    }
}
