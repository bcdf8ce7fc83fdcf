//! Money value types: banknote bundles and digit ledgers.
mod bundle;
mod ledger;
mod types;

pub use bundle::*;
pub use ledger::*;
pub use types::*;
