//! Letters, letter classes and alphabets.
//!
//! An alphabet is an ordered list of letters, each tagged with one or more
//! classes. Classes drive pattern based word generation (see
//! [`crate::generator`]).

/// Single-character letter classes and pattern conversion.
pub mod class;

/// Letters with upper/lower forms and class tags.
pub mod letter;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub use class::{Class, classes_from_pattern};
pub use letter::Letter;

/// Ordered collection of letters, queryable by class.
///
/// # Invariants
/// - Letter order is the construction order and is never changed
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
	letters: Vec<Letter>,
}

impl Alphabet {
	/// Creates an alphabet from an ordered list of letters.
	pub fn new(letters: Vec<Letter>) -> Self {
		Self { letters }
	}

	/// Returns all letters, in construction order.
	pub fn letters(&self) -> &[Letter] {
		&self.letters
	}

	/// Returns the letters carrying `class`, in construction order.
	pub fn letters_by_class(&self, class: Class) -> Vec<Letter> {
		self.letters
			.iter()
			.filter(|letter| letter.is_class(class))
			.cloned()
			.collect()
	}

	/// Returns every distinct class used by the alphabet, in order of first
	/// appearance.
	pub fn classes(&self) -> Vec<Class> {
		let mut seen = HashSet::new();
		self.letters
			.iter()
			.flat_map(Letter::classes)
			.filter(|class| seen.insert(*class))
			.collect()
	}

	/// Groups letters by class. A letter with several classes appears in
	/// each of its groups.
	pub fn partition_by_class(&self) -> HashMap<Class, Vec<Letter>> {
		let mut partition: HashMap<Class, Vec<Letter>> = HashMap::new();
		for letter in &self.letters {
			for class in letter.classes() {
				partition.entry(class).or_default().push(letter.clone());
			}
		}
		partition
	}

	pub fn len(&self) -> usize {
		self.letters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.letters.is_empty()
	}
}

impl FromIterator<Letter> for Alphabet {
	fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
