/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! NVP response decoder.
//!
//! This module tokenizes a raw gateway response string into a
//! [`ResponseFieldPool`]. Decoding is best-effort and never aborts: malformed
//! input degrades to a FATAL entry in the operation's [`ErrorContext`] while
//! tokens already decoded remain in the pool. A response with no recognizable
//! anchor key yields the synthetic RESULT/RESPMSG fallback pool instead.
//!
//! Both wire forms are accepted: the tagged-length `NAME[len]=value` form,
//! which is immune to delimiter characters embedded in values, and the plain
//! `NAME=value` form the gateway emits for ordinary fields.

use crate::encoder::{PAIR_SEP, RECORD_SEP, TAG_CLOSE, TAG_OPEN};
use crate::pool::ResponseFieldPool;
use memchr::{memchr, memmem};
use nvpay_core::context::{E_PARSE_ERROR, E_UNKNOWN_STATE, ErrorContext};
use nvpay_core::error::ParseError;
use nvpay_core::names::RESULT;

/// NVP response decoder.
///
/// The decoder scans the input left-to-right, reading a name up to the
/// length-tag opener or pair separator, then the value per the declared form.
#[derive(Debug)]
pub struct NvpDecoder<'a> {
    /// Input buffer.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
}

impl<'a> NvpDecoder<'a> {
    /// Creates a new decoder for the given response string.
    #[inline]
    #[must_use]
    pub const fn new(wire: &'a str) -> Self {
        Self {
            input: wire.as_bytes(),
            offset: 0,
        }
    }

    /// Decodes the response into a field pool plus the error context for this
    /// operation.
    ///
    /// Never fails: an unparseable payload yields the unknown-state fallback
    /// pool, and a truncated payload yields whatever tokens were decoded
    /// before the fault, each with a FATAL entry recorded.
    #[must_use]
    pub fn decode(mut self) -> (ResponseFieldPool, ErrorContext) {
        let mut ctx = ErrorContext::new();

        if !has_anchor(self.input) {
            ctx.add_fatal(E_UNKNOWN_STATE, ParseError::MissingAnchor.to_string());
            return (ResponseFieldPool::unknown_state(), ctx);
        }

        let mut pool = ResponseFieldPool::new();
        loop {
            match self.next_pair() {
                Ok(Some((name, value))) => pool.insert(name, value.to_string()),
                Ok(None) => break,
                Err(e) => {
                    ctx.add_fatal(E_PARSE_ERROR, e.to_string());
                    break;
                }
            }
        }
        (pool, ctx)
    }

    /// Parses the next pair from the buffer.
    ///
    /// # Errors
    /// Returns `ParseError` if a length tag is malformed or declares more
    /// bytes than remain.
    fn next_pair(&mut self) -> Result<Option<(&'a str, &'a str)>, ParseError> {
        while self.offset < self.input.len() && self.input[self.offset] == RECORD_SEP {
            self.offset += 1;
        }
        if self.offset >= self.input.len() {
            return Ok(None);
        }

        let remaining = &self.input[self.offset..];
        let bracket = memchr(TAG_OPEN, remaining);
        let eq = memchr(PAIR_SEP, remaining);

        match (bracket, eq) {
            // Tagged form: NAME[len]=value
            (Some(b), e) if b < e.unwrap_or(usize::MAX) => {
                let name = as_utf8(&remaining[..b], self.offset)?;
                self.parse_tagged(b, remaining).map(|value| Some((name, value)))
            }
            // Plain form: NAME=value, value runs to the next record separator.
            (_, Some(e)) => {
                let name = as_utf8(&remaining[..e], self.offset)?;
                let value_start = e + 1;
                let value_end = memchr(RECORD_SEP, &remaining[value_start..])
                    .map_or(remaining.len(), |p| value_start + p);
                let value = as_utf8(&remaining[value_start..value_end], self.offset)?;
                self.offset += value_end;
                Ok(Some((name, value)))
            }
            // A trailing token with no pair separator at all; keep it as a
            // bare name. The guarded arm already captured every tagged pair.
            (_, None) => {
                let name = as_utf8(remaining, self.offset)?;
                self.offset = self.input.len();
                Ok(Some((name, "")))
            }
        }
    }

    /// Parses the `[len]=value` tail of a tagged pair starting at the opener.
    fn parse_tagged(&mut self, bracket: usize, remaining: &'a [u8]) -> Result<&'a str, ParseError> {
        let len_start = bracket + 1;
        let close = memchr(TAG_CLOSE, &remaining[len_start..])
            .map(|p| len_start + p)
            .ok_or_else(|| ParseError::InvalidLengthTag("unterminated length tag".to_string()))?;

        let declared = parse_length(&remaining[len_start..close]).ok_or_else(|| {
            ParseError::InvalidLengthTag(
                String::from_utf8_lossy(&remaining[len_start..close]).into_owned(),
            )
        })?;

        let sep = close + 1;
        if remaining.get(sep) != Some(&PAIR_SEP) {
            return Err(ParseError::InvalidLengthTag(
                "length tag not followed by pair separator".to_string(),
            ));
        }

        let value_start = sep + 1;
        let available = remaining.len() - value_start;
        if declared > available {
            return Err(ParseError::TruncatedValue {
                declared,
                remaining: available,
            });
        }

        let value = as_utf8(
            &remaining[value_start..value_start + declared],
            self.offset + value_start,
        )?;
        self.offset += value_start + declared;
        Ok(value)
    }

    /// Returns the current offset in the buffer.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Checks the value bytes are valid UTF-8 (a declared length can split a
/// multi-byte character).
fn as_utf8(bytes: &[u8], offset: usize) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8Boundary { offset })
}

/// Parses a declared length from ASCII digits.
fn parse_length(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }
    let mut result: usize = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as usize)?;
    }
    Some(result)
}

/// Looks for the anchor key (the transaction-result field) at the start of the
/// buffer or immediately after a record separator.
fn has_anchor(input: &[u8]) -> bool {
    let anchor = RESULT.as_bytes();
    memmem::find_iter(input, anchor).any(|pos| {
        let starts_pair = pos == 0 || input[pos - 1] == RECORD_SEP;
        let followed = matches!(
            input.get(pos + anchor.len()),
            Some(&TAG_OPEN) | Some(&PAIR_SEP)
        );
        starts_pair && followed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length(b"0"), Some(0));
        assert_eq!(parse_length(b"42"), Some(42));
        assert_eq!(parse_length(b""), None);
        assert_eq!(parse_length(b"4a"), None);
    }

    #[test]
    fn test_has_anchor() {
        assert!(has_anchor(b"RESULT=0&RESPMSG=Approved"));
        assert!(has_anchor(b"PNREF=V1&RESULT[1]=0"));
        assert!(!has_anchor(b"ORIGRESULT=0"));
        assert!(!has_anchor(b"not a valid payflow response"));
    }

    #[test]
    fn test_decode_plain_pairs() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&PNREF=V19A2A192BE9&RESPMSG=Approved").decode();
        assert!(ctx.is_empty());
        assert_eq!(pool.get("RESULT"), Some("0"));
        assert_eq!(pool.get("PNREF"), Some("V19A2A192BE9"));
        assert_eq!(pool.get("RESPMSG"), Some("Approved"));
    }

    #[test]
    fn test_decode_tagged_value_with_embedded_delimiters() {
        let (pool, ctx) = NvpDecoder::new("RESULT[1]=0&RESPMSG[5]=A&B=C").decode();
        assert!(ctx.is_empty());
        assert_eq!(pool.get("RESPMSG"), Some("A&B=C"));
    }

    #[test]
    fn test_decode_garbage_yields_fallback() {
        let (pool, ctx) = NvpDecoder::new("not a valid payflow response").decode();
        assert_eq!(ctx.count(), 1);
        assert!(ctx.is_fatal());
        assert_eq!(pool.get("RESULT"), Some("-255"));
        assert!(pool.get("RESPMSG").is_some());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_decode_truncated_length_keeps_partial_results() {
        let (pool, ctx) = NvpDecoder::new("RESULT[1]=0&RESPMSG[50]=short").decode();
        assert!(ctx.is_fatal());
        assert_eq!(ctx.count(), 1);
        // The token decoded before the fault stays in the pool.
        assert_eq!(pool.get("RESULT"), Some("0"));
        assert!(pool.get("RESPMSG").is_none());
    }

    #[test]
    fn test_decode_duplicate_keys_are_suffixed() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&EXTDATA=a&EXTDATA=b").decode();
        assert!(ctx.is_empty());
        assert_eq!(pool.get("EXTDATA"), Some("a"));
        assert_eq!(pool.get("EXTDATA_DUPLICATE_1"), Some("b"));
    }

    #[test]
    fn test_decode_mixed_forms() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&COMMENT1[11]=a&b&c&d&e&f&AVSZIP=Y").decode();
        assert!(ctx.is_empty());
        assert_eq!(pool.get("COMMENT1"), Some("a&b&c&d&e&f"));
        assert_eq!(pool.get("AVSZIP"), Some("Y"));
    }

    #[test]
    fn test_decode_invalid_length_tag() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&BAD[xx]=y").decode();
        assert!(ctx.is_fatal());
        assert_eq!(pool.get("RESULT"), Some("0"));
    }

    #[test]
    fn test_decode_trailing_bare_token() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&DANGLING").decode();
        assert!(ctx.is_empty());
        assert_eq!(pool.get("RESULT"), Some("0"));
        assert_eq!(pool.get("DANGLING"), Some(""));
    }

    #[test]
    fn test_decode_unterminated_tag_is_fatal_not_a_panic() {
        let (pool, ctx) = NvpDecoder::new("RESULT=0&ODD[3").decode();
        assert!(ctx.is_fatal());
        assert_eq!(pool.get("RESULT"), Some("0"));
    }
}
