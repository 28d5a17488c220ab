use crate::alphabet::Letter;
use crate::errors::{ConlangError, Result};

/// Input parameters for generating words from patterns.
///
/// # Responsibilities
/// - Choose how the first letter of a word is rendered (`capitalize_first`)
/// - Hold the placeholder letter used when a pattern names an unknown class
///
/// # Invariants
/// - The placeholder always has non-empty upper and lower forms, so an
///   unknown class stays visible in the generated word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Render the first letter with its upper form, the others with their
	/// lower form. When false every letter uses its lower form.
	pub capitalize_first: bool,

	/// Letter standing in for classes without any letter.
	placeholder: Letter,
}

impl GenerationInput {
	/// Creates the default input: capitalized words, `?` placeholder.
	///
	/// # Visibility
	/// - `pub(crate)` so that inputs come from a generator.
	pub(crate) fn new() -> Self {
		Self {
			capitalize_first: true,
			placeholder: Letter::placeholder(),
		}
	}

	/// Returns the current placeholder letter.
	pub fn placeholder(&self) -> &Letter {
		&self.placeholder
	}

	/// Replaces the placeholder letter.
	///
	/// # Errors
	/// Returns an error if either form of the letter is empty.
	pub fn set_placeholder(&mut self, placeholder: Letter) -> Result<()> {
		if placeholder.upper().is_empty() || placeholder.lower().is_empty() {
			return Err(ConlangError::invalid_argument(
				"placeholder",
				"placeholder forms cannot be empty",
			));
		}
		self.placeholder = placeholder;
		Ok(())
	}
}
