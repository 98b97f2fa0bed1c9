/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Currency values and wire formatting.
//!
//! This module provides:
//! - [`CurrencyValue`]: a decimal amount with an explicit formatting policy
//! - [`FormatPolicy`]: the resolved None/Round/Truncate policy
//!
//! Round and Truncate are mutually exclusive. Requesting both is reported as a
//! FATAL entry in the operation's [`ErrorContext`] and the formatter yields an
//! empty string, so that composition can still complete with the field omitted.

use crate::context::{E_CURRENCY_PROCESS_ERROR, ErrorContext};
use crate::error::FormatError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default number of fractional digits for gateway amounts.
pub const DEFAULT_DECIMAL_DIGITS: u32 = 2;

/// Resolved formatting policy for one currency value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatPolicy {
    /// Natural precision, padded to a minimum of two fractional digits
    /// (unless the value uses zero decimal digits).
    None,
    /// Round half-up to exactly `decimal_digits` using fixed-point arithmetic.
    Round,
    /// Cut the fraction to exactly `decimal_digits`, zero-padding short values.
    Truncate,
}

/// A decimal amount plus the policy that renders it for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyValue {
    amount: Decimal,
    currency_code: Option<String>,
    decimal_digits: u32,
    round: bool,
    truncate: bool,
}

impl CurrencyValue {
    /// Creates a currency value with the default two decimal digits and no
    /// round/truncate policy.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency_code: None,
            decimal_digits: DEFAULT_DECIMAL_DIGITS,
            round: false,
            truncate: false,
        }
    }

    /// Sets the ISO currency code (e.g. "USD").
    #[must_use]
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Sets the number of fractional digits the wire format requires.
    #[must_use]
    pub const fn with_decimal_digits(mut self, digits: u32) -> Self {
        self.decimal_digits = digits;
        self
    }

    /// Requests half-up rounding to `decimal_digits`.
    pub const fn set_round(&mut self, round: bool) {
        self.round = round;
    }

    /// Requests truncation to `decimal_digits`.
    pub const fn set_truncate(&mut self, truncate: bool) {
        self.truncate = truncate;
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code, if set.
    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    /// Returns the configured number of fractional digits.
    #[must_use]
    pub const fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    /// Resolves the round/truncate flags into a single policy.
    ///
    /// # Errors
    /// Returns [`FormatError::ConflictingPolicy`] if both flags are set.
    pub const fn policy(&self) -> Result<FormatPolicy, FormatError> {
        match (self.round, self.truncate) {
            (true, true) => Err(FormatError::ConflictingPolicy),
            (true, false) => Ok(FormatPolicy::Round),
            (false, true) => Ok(FormatPolicy::Truncate),
            (false, false) => Ok(FormatPolicy::None),
        }
    }

    /// Renders the amount to the exact string the wire format requires.
    ///
    /// A policy conflict appends exactly one FATAL entry to `ctx` and returns
    /// an empty string; the caller omits the field and completes composition.
    #[must_use]
    pub fn format(&self, ctx: &mut ErrorContext) -> String {
        let policy = match self.policy() {
            Ok(p) => p,
            Err(e) => {
                ctx.add_fatal(E_CURRENCY_PROCESS_ERROR, e.to_string());
                return String::new();
            }
        };

        match policy {
            FormatPolicy::Truncate => {
                let mut v = self.amount.trunc_with_scale(self.decimal_digits);
                v.rescale(self.decimal_digits);
                v.to_string()
            }
            FormatPolicy::Round => {
                let mut v = self
                    .amount
                    .round_dp_with_strategy(self.decimal_digits, RoundingStrategy::MidpointAwayFromZero);
                v.rescale(self.decimal_digits);
                v.to_string()
            }
            FormatPolicy::None => {
                let mut v = self.amount;
                // Minimum emitted precision is two fractional digits, except
                // for zero-decimal currencies.
                if self.decimal_digits != 0 && v.scale() < 2 {
                    v.rescale(2);
                }
                v.to_string()
            }
        }
    }
}

impl From<Decimal> for CurrencyValue {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}
