use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag classifying letters (ex. `C` for consonants, `V` for vowels).
///
/// A class is a single code point, so a word pattern such as `"CVC"` reads
/// as one class per character.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Class(pub char);

impl Class {
	/// Class carried by the placeholder letter.
	pub const UNKNOWN: Class = Class('?');

	/// Returns the underlying character.
	pub fn as_char(self) -> char {
		self.0
	}
}

impl From<char> for Class {
	fn from(c: char) -> Self {
		Class(c)
	}
}

impl fmt::Display for Class {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Converts a pattern into its sequence of classes.
///
/// Each character is one class. An empty pattern gives an empty vector.
pub fn classes_from_pattern(pattern: &str) -> Vec<Class> {
	pattern.chars().map(Class).collect()
}
