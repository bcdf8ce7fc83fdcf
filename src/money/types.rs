//! Types and constants shared by the money value types.

/// Banknote face values a bundle may hold.
pub const DENOMINATIONS: [Denomination; 9] = [1, 2, 5, 10, 50, 100, 500, 1000, 5000];

/// Maximum number of digits a digit ledger can store.
pub const MAX_DIGITS: usize = 100;

/// Number of trailing ledger digits that represent fractional units.
pub const FRACTION_DIGITS: usize = 2;

/// Face value of a single banknote.
pub type Denomination = u32;

/// Number of banknotes in a bundle.
pub type NoteCount = u32;

/// Total value of a bundle, wide enough for any denomination times any count.
pub type TotalValue = u64;

/// A single decimal digit, `0..=9`.
pub type Digit = u8;

/// Returns `true` if `denomination` is one of the accepted face values.
pub fn is_valid_denomination(denomination: Denomination) -> bool {
    DENOMINATIONS.contains(&denomination)
}
