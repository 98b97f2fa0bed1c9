/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Claim-once response field store.
//!
//! This module provides:
//! - [`ResponseFieldPool`]: insertion-ordered multimap built once per response
//! - [`ExtendedParam`]: one leftover name/value pair
//!
//! The pool enforces the ownership invariant of response distribution: once a
//! claimer removes a key, no other claimer may observe it. Whatever remains
//! after the claim pipeline becomes the extended-data list, in pool order, as
//! the forward-compatibility path for fields the SDK does not yet model.

use nvpay_core::names::{
    DUPLICATE_MARKER, RESPMSG, RESULT, UNKNOWN_STATE_RESPMSG, UNKNOWN_STATE_RESULT,
};
use std::collections::HashMap;
use std::str::FromStr;

/// A response field left unclaimed by every typed decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedParam {
    /// Parameter name, possibly carrying a duplicate suffix.
    pub name: String,
    /// Raw value.
    pub value: String,
}

/// Insertion-ordered name/value store drained by the claimer pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFieldPool {
    entries: Vec<(String, String)>,
    /// Occurrence count per decoded name, tracked exactly so a gateway field
    /// that happens to contain the duplicate marker cannot skew the counter.
    seen: HashMap<String, usize>,
}

impl ResponseFieldPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the synthetic fallback pool for an unparseable response.
    ///
    /// Every call site can still read a RESULT/RESPMSG pair, carrying the
    /// generic unknown-state code.
    #[must_use]
    pub fn unknown_state() -> Self {
        let mut pool = Self::new();
        pool.insert(RESULT, UNKNOWN_STATE_RESULT.to_string());
        pool.insert(RESPMSG, UNKNOWN_STATE_RESPMSG.to_string());
        pool
    }

    /// Inserts a decoded pair.
    ///
    /// If the name has already been seen, the new entry is stored under a
    /// deterministic suffixed key (`NAME_DUPLICATE_1`, `NAME_DUPLICATE_2`, ...)
    /// so both values stay retrievable; the bare name always refers to the
    /// first occurrence.
    pub fn insert(&mut self, name: &str, value: String) {
        let prior = self.seen.entry(name.to_string()).or_insert(0);
        if *prior == 0 {
            *prior = 1;
            self.entries.push((name.to_string(), value));
            return;
        }

        // Skip over any key the gateway itself emitted under the marker name.
        let mut idx = itoa::Buffer::new();
        let mut n = *prior;
        let mut key = format!("{}{}{}", name, DUPLICATE_MARKER, idx.format(n));
        while self.entries.iter().any(|(k, _)| *k == key) {
            n += 1;
            key = format!("{}{}{}", name, DUPLICATE_MARKER, idx.format(n));
        }
        self.seen.insert(name.to_string(), n + 1);
        self.entries.push((key, value));
    }

    /// Returns the value under `name` without removing it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Removes and returns the value under `name` (ownership transfer,
    /// at-most-once).
    #[must_use]
    pub fn take(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Removes the value under `name` and parses it.
    ///
    /// An unparseable value is treated the same as a missing one: the entry is
    /// still consumed, and `None` is returned.
    #[must_use]
    pub fn take_parsed<T: FromStr>(&mut self, name: &str) -> Option<T> {
        self.take(name).and_then(|v| v.parse().ok())
    }

    /// Returns true if `name` is currently in the pool.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Returns the number of fields remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the pool has been fully drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the remaining pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the remainder into the immutable extended-data list,
    /// preserving pool order.
    #[must_use]
    pub fn into_extended_data(self) -> Vec<ExtendedParam> {
        self.entries
            .into_iter()
            .map(|(name, value)| ExtendedParam { name, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_take_is_at_most_once() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("PNREF", "V19A2A192BE9".to_string());

        assert_eq!(pool.take("PNREF").as_deref(), Some("V19A2A192BE9"));
        assert_eq!(pool.take("PNREF"), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_duplicate_suffixing() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("EXTDATA", "first".to_string());
        pool.insert("EXTDATA", "second".to_string());
        pool.insert("EXTDATA", "third".to_string());

        assert_eq!(pool.get("EXTDATA"), Some("first"));
        assert_eq!(pool.get("EXTDATA_DUPLICATE_1"), Some("second"));
        assert_eq!(pool.get("EXTDATA_DUPLICATE_2"), Some("third"));
    }

    #[test]
    fn test_pool_duplicate_counter_ignores_prefix_collisions() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("AMT", "1.00".to_string());
        pool.insert("AMTX", "2.00".to_string());
        pool.insert("AMT", "3.00".to_string());

        assert_eq!(pool.get("AMT"), Some("1.00"));
        assert_eq!(pool.get("AMTX"), Some("2.00"));
        assert_eq!(pool.get("AMT_DUPLICATE_1"), Some("3.00"));
    }

    #[test]
    fn test_pool_literal_marker_key_keeps_bare_first_invariant() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("AMT_DUPLICATE_1", "from the gateway".to_string());
        pool.insert("AMT", "first".to_string());
        pool.insert("AMT", "second".to_string());

        // The bare key is still the first real occurrence, and the suffixed
        // copy never overwrites the gateway's literal field.
        assert_eq!(pool.get("AMT"), Some("first"));
        assert_eq!(pool.get("AMT_DUPLICATE_1"), Some("from the gateway"));
        assert_eq!(pool.get("AMT_DUPLICATE_2"), Some("second"));
    }

    #[test]
    fn test_pool_take_parsed() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("RESULT", "0".to_string());
        pool.insert("TRANSSTATE", "not a number".to_string());

        assert_eq!(pool.take_parsed::<i32>("RESULT"), Some(0));
        assert_eq!(pool.take_parsed::<i32>("TRANSSTATE"), None);
        assert_eq!(pool.take_parsed::<i32>("MISSING"), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_extended_data_preserves_order() {
        let mut pool = ResponseFieldPool::new();
        pool.insert("B", "2".to_string());
        pool.insert("A", "1".to_string());
        let _ = pool.take("B");
        pool.insert("C", "3".to_string());

        let extended = pool.into_extended_data();
        let names: Vec<&str> = extended.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_unknown_state_pool() {
        let pool = ResponseFieldPool::unknown_state();
        assert_eq!(pool.get("RESULT"), Some("-255"));
        assert!(pool.get("RESPMSG").is_some());
        assert_eq!(pool.len(), 2);
    }
}
