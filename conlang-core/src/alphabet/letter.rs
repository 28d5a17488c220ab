use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::class::{Class, classes_from_pattern};
use crate::errors::ConlangError;

/// Symbol representing a sound.
///
/// A letter has an upper and a lower written form (identical for scripts
/// without case) and a set of classes. Two letters are equal when their forms
/// and classes are equal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Letter {
	upper: String,
	lower: String,
	classes: BTreeSet<Class>,
}

impl Letter {
	/// Creates a letter from its forms and classes. Duplicate classes collapse.
	pub fn new<I>(upper: &str, lower: &str, classes: I) -> Self
	where
		I: IntoIterator<Item = Class>,
	{
		Self {
			upper: upper.to_owned(),
			lower: lower.to_owned(),
			classes: classes.into_iter().collect(),
		}
	}

	/// Sentinel returned when no letter matches a requested class.
	pub fn placeholder() -> Self {
		Self::new("?", "?", [Class::UNKNOWN])
	}

	pub fn upper(&self) -> &str {
		&self.upper
	}

	pub fn lower(&self) -> &str {
		&self.lower
	}

	/// Returns `true` if the letter carries `class`.
	pub fn is_class(&self, class: Class) -> bool {
		self.classes.contains(&class)
	}

	/// Returns the letter's classes in ascending order.
	pub fn classes(&self) -> Vec<Class> {
		self.classes.iter().copied().collect()
	}
}

/// Prints the lower form. The alternate form (`{:#}`) prints the upper form.
impl fmt::Display for Letter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			f.write_str(&self.upper)
		} else {
			f.write_str(&self.lower)
		}
	}
}

/// Reads a letter from an `"Upper,lower,CLASSES"` triple, where every
/// character of the third field is one class (ex. `"A,a,V"`).
impl FromStr for Letter {
	type Err = ConlangError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fields: Vec<&str> = s.split(',').collect();
		let [upper, lower, classes] = fields.as_slice() else {
			return Err(ConlangError::invalid_letter(
				s,
				format!("expected 3 comma separated fields, got {}", fields.len()),
			));
		};
		if upper.is_empty() || lower.is_empty() {
			return Err(ConlangError::invalid_letter(s, "letter forms cannot be empty"));
		}
		Ok(Self::new(upper, lower, classes_from_pattern(classes)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse() {
		let letter: Letter = "A,a,V".parse().unwrap();
		assert_eq!(letter.upper(), "A");
		assert_eq!(letter.lower(), "a");
		assert!(letter.is_class(Class('V')));
		assert!(!letter.is_class(Class('C')));
		assert_eq!(letter, Letter::new("A", "a", [Class('V')]));
	}

	#[test]
	fn test_parse_several_classes() {
		let letter: Letter = "Y,y,VCC".parse().unwrap();
		assert_eq!(letter.classes(), vec![Class('C'), Class('V')]);
	}

	#[test]
	fn test_parse_invalid() {
		assert!(matches!(
			"A,a".parse::<Letter>(),
			Err(ConlangError::InvalidLetter { .. })
		));
		assert!("A,a,V,C".parse::<Letter>().is_err());
		assert!(",a,V".parse::<Letter>().is_err());
		assert!("".parse::<Letter>().is_err());
	}

	#[test]
	fn test_caseless_letter() {
		let letter = Letter::new("ʔ", "ʔ", [Class('C')]);
		assert_eq!(letter.upper(), letter.lower());
	}

	#[test]
	fn test_display() {
		let letter: Letter = "Sh,sh,C".parse().unwrap();
		assert_eq!(letter.to_string(), "sh");
		assert_eq!(format!("{letter:#}"), "Sh");
	}

	#[test]
	fn test_serde_keeps_classes() {
		let letter: Letter = "Y,y,VC".parse().unwrap();
		let bytes = postcard::to_stdvec(&letter).unwrap();
		let decoded: Letter = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(decoded, letter);
		assert!(decoded.is_class(Class('V')) && decoded.is_class(Class('C')));
	}

	#[test]
	fn test_placeholder() {
		let placeholder = Letter::placeholder();
		assert_eq!(placeholder.upper(), "?");
		assert_eq!(placeholder.lower(), "?");
		assert!(placeholder.is_class(Class::UNKNOWN));
	}
}
