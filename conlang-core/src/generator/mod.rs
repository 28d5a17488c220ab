//! Pattern driven word generation.
//!
//! Words are built from a pattern string such as `"CVC"`: each character names
//! a letter class and is replaced by a random letter of that class.
//! - Generation settings (`GenerationInput`)
//! - A generator owning the letter partition and its random source (`WordGenerator`)

/// Settings controlling how generated words are rendered.
///
/// Created through `WordGenerator::make_generation_input`.
pub mod generation_input;

/// High-level interface drawing letters by class and assembling words.
pub mod word_generator;

pub use generation_input::GenerationInput;
pub use word_generator::WordGenerator;
