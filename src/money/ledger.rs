//! Monetary amounts stored as a bounded sequence of decimal digits.
use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::money::types::{Digit, FRACTION_DIGITS, MAX_DIGITS};

/// An amount kept as individual decimal digits, the last two being cents.
///
/// Digits are stored in the order they are written: index 0 is the first
/// character of the normalized amount, so `"12.3"` holds `[1, 2, 3]` and
/// displays as `1.23`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DigitLedger {
    /// The digits of the amount, never longer than [`MAX_DIGITS`].
    digits: Vec<Digit>,
}

impl DigitLedger {
    /// Creates a ledger from a number, rounded to two fractional digits.
    ///
    /// Negative and non-finite numbers are rejected as malformed amounts.
    pub fn from_number(amount: f64) -> Result<Self, LedgerError> {
        format!("{amount:.FRACTION_DIGITS$}").parse()
    }

    /// Gets the digit at `index`.
    pub fn get(&self, index: usize) -> Result<Digit, LedgerError> {
        self.digits
            .get(index)
            .copied()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Overwrites the digit at `index`.
    pub fn set(&mut self, index: usize, value: Digit) -> Result<(), LedgerError> {
        let count = self.count();
        let slot = self
            .digits
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, count })?;
        if value > 9 {
            return Err(LedgerError::InvalidDigit(value));
        }
        *slot = value;
        debug!(index, value, "ledger digit overwritten");
        Ok(())
    }

    /// Returns the fixed capacity of the ledger.
    pub fn size(&self) -> usize {
        MAX_DIGITS
    }

    /// Returns the number of digits currently stored.
    pub fn count(&self) -> usize {
        self.digits.len()
    }

    /// Gets the stored digits.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Appends a digit at the end.
    pub fn append_digit(&mut self, digit: Digit) -> Result<(), LedgerError> {
        if self.count() >= MAX_DIGITS {
            return Err(LedgerError::CapacityExceeded);
        }
        if digit > 9 {
            return Err(LedgerError::InvalidDigit(digit));
        }
        self.digits.push(digit);
        debug!(digit, count = self.count(), "ledger digit appended");
        Ok(())
    }

    /// Removes and returns the most recently appended digit.
    pub fn remove_last_digit(&mut self) -> Result<Digit, LedgerError> {
        let digit = self.digits.pop().ok_or(LedgerError::EmptyLedger)?;
        debug!(digit, count = self.count(), "ledger digit removed");
        Ok(digit)
    }
}

impl FromStr for DigitLedger {
    type Err = LedgerError;

    /// Parses an amount such as `"1234.56"`.
    ///
    /// A single decimal point is dropped; every remaining character must be an
    /// ASCII digit. The fractional part is taken as written, not padded.
    fn from_str(amount: &str) -> Result<Self, Self::Err> {
        let digits = amount
            .replacen('.', "", 1)
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as Digit))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| LedgerError::InvalidAmountFormat(amount.to_string()))?;
        if digits.len() > MAX_DIGITS {
            return Err(LedgerError::CapacityExceeded);
        }
        Ok(DigitLedger { digits })
    }
}

impl TryFrom<&str> for DigitLedger {
    type Error = LedgerError;

    fn try_from(amount: &str) -> Result<Self, Self::Error> {
        amount.parse()
    }
}

impl TryFrom<f64> for DigitLedger {
    type Error = LedgerError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        DigitLedger::from_number(amount)
    }
}

impl fmt::Display for DigitLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .digits
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect::<String>();
        if joined.len() <= FRACTION_DIGITS {
            write!(f, "0.{joined:0>FRACTION_DIGITS$}")
        } else {
            let (whole, fraction) = joined.split_at(joined.len() - FRACTION_DIGITS);
            write!(f, "{whole}.{fraction}")
        }
    }
}

impl fmt::Debug for DigitLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigitLedger").field(&self.to_string()).finish()
    }
}

/// Errors that can occur when building or editing a digit ledger.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount format: {0:?}")]
    InvalidAmountFormat(String),
    #[error("Ledger cannot hold more than {} digits", MAX_DIGITS)]
    CapacityExceeded,
    #[error("Index {index} is out of range for {count} digits")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Digit must be between 0 and 9, got {0}")]
    InvalidDigit(Digit),
    #[error("Ledger is empty")]
    EmptyLedger,
}
