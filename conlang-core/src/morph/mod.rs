//! Morphology: morphemes and how they combine into words.
//!
//! - `Morpheme`: free or bound (prefix / suffix) unit of meaning
//! - `Morpheme::combine`: deterministic binary composition

/// Morpheme value type and its combination rules.
pub mod morpheme;

pub use morpheme::{Affix, Morpheme};
