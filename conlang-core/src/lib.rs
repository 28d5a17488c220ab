//! Constructed-language toolkit.
//!
//! This crate provides the building blocks for inventing words:
//! - Morphemes (free, prefix, suffix) and their deterministic combination
//! - Letters tagged with classes, gathered into alphabets
//! - Pattern driven word generation with a seedable random source
//! - Small collection helpers (filter, random draw, shuffle, sort)
//!
//! Combining morphemes never fails. The only fallible operations are reading
//! letters from text and configuring generation.

/// Morphemes and their combination rules.
pub mod morph;

/// Letters, classes and alphabets.
pub mod alphabet;

/// Pattern driven word generation.
pub mod generator;

/// Helpers shared by `Vec` and `HashSet` (random draw, shuffle, sort).
pub mod collection;

/// Error type and `Result` alias.
pub mod errors;

pub use errors::{ConlangError, Result};
