//! Validated currency value types.
pub mod money;

pub use money::*;
