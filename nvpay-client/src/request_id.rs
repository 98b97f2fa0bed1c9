/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Unique per-transaction request identifiers.
//!
//! The gateway deduplicates retries by request id: resubmitting a transaction
//! under the same id returns the original result instead of charging twice.
//! Ids therefore must be unique per logical transaction, and the source must
//! be safe to share across tasks.

use arrayvec::ArrayString;
use chrono::Utc;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// A fixed-capacity, stack-allocated request identifier.
pub type RequestId = ArrayString<32>;

/// Process-wide sequence shared by every source; two clients in one process
/// must never hand the gateway the same id within a millisecond.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Thread-safe generator of unique [`RequestId`] values.
///
/// Each id combines the UTC timestamp in milliseconds with a process-wide
/// monotonic counter, so ids stay unique even when generated within the same
/// millisecond, across threads, and across independent sources.
#[derive(Debug, Default)]
pub struct RequestIdSource;

impl RequestIdSource {
    /// Creates a new source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates the next identifier.
    #[must_use]
    pub fn next_id(&self) -> RequestId {
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let millis = Utc::now().timestamp_millis().max(0) as u64;

        let mut id = RequestId::new();
        // 16 + 16 hex digits fills the 32-byte capacity exactly.
        write!(id, "{:016X}{:016X}", millis, seq).expect("id fits its capacity");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_are_32_chars() {
        let source = RequestIdSource::new();
        let id = source.next_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_unique_within_one_millisecond() {
        let source = RequestIdSource::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(source.next_id()));
        }
    }

    #[test]
    fn test_ids_unique_across_sources() {
        let first = RequestIdSource::new();
        let second = RequestIdSource::new();

        let mut seen = HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(first.next_id()));
            assert!(seen.insert(second.next_id()));
        }
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let source = Arc::new(RequestIdSource::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || (0..250).map(|_| source.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate request id generated");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
