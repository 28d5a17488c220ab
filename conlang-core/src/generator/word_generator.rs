use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::{Alphabet, Class, Letter, classes_from_pattern};
use crate::collection::Collection;
use crate::generator::generation_input::GenerationInput;

/// High-level generator turning class patterns into words.
///
/// # Responsibilities
/// - Partition an `Alphabet`'s letters by class once, at construction
/// - Draw a uniformly random letter for a requested class
/// - Assemble words from pattern strings, one letter per pattern character
///
/// The random source is owned by the generator. Seed it (`from_seed`) for
/// reproducible output; give each thread its own generator rather than
/// sharing one.
#[derive(Debug)]
pub struct WordGenerator<R = StdRng> {
	/// Letters available for each class, in alphabet order.
	letters: HashMap<Class, Vec<Letter>>,
	rng: R,
}

impl WordGenerator<StdRng> {
	/// Creates a reproducible generator seeded with `seed`.
	pub fn from_seed(alphabet: &Alphabet, seed: u64) -> Self {
		Self::new(alphabet, StdRng::seed_from_u64(seed))
	}

	/// Creates a generator seeded from the operating system.
	pub fn from_os_rng(alphabet: &Alphabet) -> Self {
		Self::new(alphabet, StdRng::from_os_rng())
	}
}

impl<R: Rng> WordGenerator<R> {
	/// Creates a generator over `alphabet` drawing from `rng`.
	pub fn new(alphabet: &Alphabet, rng: R) -> Self {
		let letters = alphabet.partition_by_class();
		debug!(
			"word generator: {} letters in {} classes",
			alphabet.len(),
			letters.len()
		);
		Self { letters, rng }
	}

	/// Creates a `GenerationInput` with default settings.
	pub fn make_generation_input(&self) -> GenerationInput {
		GenerationInput::new()
	}

	/// Returns the classes this generator can draw from, sorted.
	pub fn classes(&self) -> Vec<Class> {
		let mut classes: Vec<Class> = self.letters.keys().copied().collect();
		classes.sort();
		classes
	}

	/// Returns the letters of `class`, empty if the class is unknown.
	pub fn letters_of(&self, class: Class) -> &[Letter] {
		self.letters.get(&class).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Draws a random letter of `class`.
	///
	/// Returns a copy of the input's placeholder when no letter carries
	/// `class`; this is not an error.
	pub fn random_letter(&mut self, class: Class, input: &GenerationInput) -> Letter {
		match self.letters.get(&class).and_then(|letters| letters.pick(&mut self.rng)) {
			Some(letter) => letter.clone(),
			None => {
				debug!("no letter for class {class:?}, using placeholder");
				input.placeholder().clone()
			}
		}
	}

	/// Generates one word from `pattern`.
	///
	/// Each pattern character is a class. The first letter uses its upper form
	/// when `input.capitalize_first` is set; every other letter uses its lower
	/// form. An empty pattern gives an empty word.
	pub fn generate(&mut self, pattern: &str, input: &GenerationInput) -> String {
		let mut word = String::new();
		for (i, class) in classes_from_pattern(pattern).into_iter().enumerate() {
			let letter = self.random_letter(class, input);
			if i == 0 && input.capitalize_first {
				word.push_str(letter.upper());
			} else {
				word.push_str(letter.lower());
			}
		}
		word
	}

	/// Generates one word per pattern, in order.
	pub fn generate_many<S>(&mut self, patterns: &[S], input: &GenerationInput) -> Vec<String>
	where
		S: AsRef<str>,
	{
		patterns
			.iter()
			.map(|pattern| self.generate(pattern.as_ref(), input))
			.collect()
	}
}
