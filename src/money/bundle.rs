//! Bundles of banknotes of a single denomination.
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::types::{Denomination, NoteCount, TotalValue, is_valid_denomination};

/// A positive number of banknotes sharing one denomination.
///
/// Bundles are immutable: arithmetic returns a new bundle. Equality and
/// ordering compare the total value only, so `Bundle(50, 2)` equals
/// `Bundle(100, 1)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "BundleRecord", try_from = "BundleRecord")]
pub struct Bundle {
    denomination: Denomination,
    count: NoteCount,
}

impl Bundle {
    /// Creates a bundle, validating the denomination and the note count.
    pub fn new(denomination: Denomination, count: NoteCount) -> Result<Self, BundleError> {
        if !is_valid_denomination(denomination) {
            return Err(BundleError::InvalidDenomination(denomination));
        }
        if count == 0 {
            return Err(BundleError::InvalidCount);
        }
        Ok(Bundle {
            denomination,
            count,
        })
    }

    /// Gets the face value of each note.
    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Gets the number of notes.
    pub fn count(&self) -> NoteCount {
        self.count
    }

    /// Returns `denomination * count`.
    pub fn total_value(&self) -> TotalValue {
        TotalValue::from(self.denomination) * TotalValue::from(self.count)
    }

    /// Combines two bundles of the same denomination.
    pub fn add(&self, other: &Bundle) -> Result<Bundle, BundleError> {
        self.ensure_same_denomination(other)?;
        let count = self
            .count
            .checked_add(other.count)
            .ok_or(BundleError::CountOverflow)?;
        Bundle::new(self.denomination, count)
    }

    /// Takes `other.count` notes out of this bundle.
    ///
    /// Removing every note fails with [`BundleError::InvalidCount`], since an
    /// empty bundle cannot exist.
    pub fn subtract(&self, other: &Bundle) -> Result<Bundle, BundleError> {
        self.ensure_same_denomination(other)?;
        if self.count < other.count {
            return Err(BundleError::InsufficientCount {
                available: self.count,
                requested: other.count,
            });
        }
        Bundle::new(self.denomination, self.count - other.count)
    }

    /// Multiplies the note count by a positive factor.
    pub fn multiply(&self, multiplier: NoteCount) -> Result<Bundle, BundleError> {
        if multiplier == 0 {
            return Err(BundleError::InvalidMultiplier);
        }
        let count = self
            .count
            .checked_mul(multiplier)
            .ok_or(BundleError::CountOverflow)?;
        Bundle::new(self.denomination, count)
    }

    fn ensure_same_denomination(&self, other: &Bundle) -> Result<(), BundleError> {
        if self.denomination == other.denomination {
            Ok(())
        } else {
            Err(BundleError::DenominationMismatch {
                left: self.denomination,
                right: other.denomination,
            })
        }
    }
}

impl PartialEq for Bundle {
    fn eq(&self, other: &Self) -> bool {
        self.total_value() == other.total_value()
    }
}

impl Eq for Bundle {}

impl PartialOrd for Bundle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bundle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_value().cmp(&other.total_value())
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Denomination: {}, Count: {}",
            self.denomination, self.count
        )
    }
}

/// Flat record form of a [`Bundle`], used for serialization.
///
/// `total` is written out for reporting and ignored when reading.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct BundleRecord {
    pub denomination: Denomination,
    pub count: NoteCount,
    #[serde(default, skip_deserializing)]
    pub total: TotalValue,
}

impl From<Bundle> for BundleRecord {
    fn from(bundle: Bundle) -> Self {
        BundleRecord {
            denomination: bundle.denomination,
            count: bundle.count,
            total: bundle.total_value(),
        }
    }
}

impl TryFrom<BundleRecord> for Bundle {
    type Error = BundleError;

    fn try_from(record: BundleRecord) -> Result<Self, Self::Error> {
        Bundle::new(record.denomination, record.count)
    }
}

/// Errors that can occur when building or combining bundles.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BundleError {
    #[error("Invalid denomination {0}")]
    InvalidDenomination(Denomination),
    #[error("Note count must be a positive integer")]
    InvalidCount,
    #[error("Cannot combine denominations {left} and {right}")]
    DenominationMismatch {
        left: Denomination,
        right: Denomination,
    },
    #[error("Cannot take {requested} notes from a bundle of {available}")]
    InsufficientCount {
        available: NoteCount,
        requested: NoteCount,
    },
    #[error("Multiplier must be a positive integer")]
    InvalidMultiplier,
    #[error("Note count overflow")]
    CountOverflow,
}
