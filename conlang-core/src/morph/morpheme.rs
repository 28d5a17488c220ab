use std::fmt;

use serde::{Deserialize, Serialize};

/// Side on which a bound morpheme attaches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Affix {
	/// Precedes the morpheme it binds to (`un-`).
	Prefix,
	/// Follows the morpheme it binds to (`-ly`).
	Suffix,
}

/// Smallest meaningful unit of a word.
///
/// A morpheme is either **free** (it can stand alone as a word, like `do`)
/// or **bound** (it only appears attached to another morpheme, like `un-`
/// or `-ly`). Only bound morphemes carry an [`Affix`] orientation, so a free
/// morpheme with a prefix/suffix flag cannot be built.
///
/// Morphemes are plain values: combining two of them never touches the
/// inputs and always produces a new morpheme.
///
/// # Examples
/// ```
/// use conlang_core::morph::Morpheme;
///
/// let undo = Morpheme::prefix("un").combine(&Morpheme::stem("do"));
/// assert_eq!(undo, Morpheme::stem("undo"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Morpheme {
	/// Independent morpheme (root or stem).
	Free { text: String },
	/// Dependent morpheme attached before or after another one.
	Bound { text: String, affix: Affix },
}

impl Morpheme {
	/// Creates a bound prefix morpheme.
	pub fn prefix(text: &str) -> Self {
		Self::Bound {
			text: text.to_owned(),
			affix: Affix::Prefix,
		}
	}

	/// Creates a free morpheme (stem).
	pub fn stem(text: &str) -> Self {
		Self::Free {
			text: text.to_owned(),
		}
	}

	/// Creates a bound suffix morpheme.
	pub fn suffix(text: &str) -> Self {
		Self::Bound {
			text: text.to_owned(),
			affix: Affix::Suffix,
		}
	}

	/// Creates a morpheme from explicit flags.
	///
	/// `is_prefix` is ignored when `is_free` is true.
	pub fn new(text: &str, is_free: bool, is_prefix: bool) -> Self {
		match (is_free, is_prefix) {
			(true, _) => Self::stem(text),
			(false, true) => Self::prefix(text),
			(false, false) => Self::suffix(text),
		}
	}

	/// Returns the textual form.
	pub fn text(&self) -> &str {
		match self {
			Self::Free { text } | Self::Bound { text, .. } => text,
		}
	}

	/// Returns `true` for free morphemes.
	pub fn is_free(&self) -> bool {
		matches!(self, Self::Free { .. })
	}

	/// Returns `true` for bound prefixes. Free morphemes are never prefixes.
	pub fn is_prefix(&self) -> bool {
		self.affix() == Some(Affix::Prefix)
	}

	/// Returns the orientation of a bound morpheme, `None` when free.
	pub fn affix(&self) -> Option<Affix> {
		match self {
			Self::Free { .. } => None,
			Self::Bound { affix, .. } => Some(*affix),
		}
	}

	/// Combines `self` with `other` into a new morpheme.
	///
	/// | self            | other            | result                         |
	/// |-----------------|------------------|--------------------------------|
	/// | prefix          | free             | free `self + other`            |
	/// | suffix          | free             | free `other + self`            |
	/// | prefix          | suffix           | free `self + other`            |
	/// | suffix          | prefix           | free `other + self`            |
	/// | prefix / suffix | same orientation | same orientation `self + other`|
	/// | free            | free             | free `self + other`            |
	/// | free            | prefix           | free `other + self`            |
	/// | free            | suffix           | free `self + other`            |
	///
	/// Only stacking two affixes of the same orientation stays bound.
	/// The texts are concatenated as-is: no spelling adjustment is made
	/// (`cool` + `-ly` gives `coolly`) and no check is made that the result
	/// is a plausible word (`un-` + `-ly` gives `unly`).
	pub fn combine(&self, other: &Morpheme) -> Morpheme {
		match (self, other) {
			(Self::Bound { text, affix: Affix::Prefix }, Self::Free { text: other_text }) => {
				Self::free_joined(text, other_text)
			}
			(Self::Bound { text, affix: Affix::Suffix }, Self::Free { text: other_text }) => {
				Self::free_joined(other_text, text)
			}
			(Self::Bound { text, affix }, Self::Bound { text: other_text, affix: other_affix }) => {
				if affix == other_affix {
					Self::Bound {
						text: format!("{text}{other_text}"),
						affix: *affix,
					}
				} else if *affix == Affix::Prefix {
					Self::free_joined(text, other_text)
				} else {
					Self::free_joined(other_text, text)
				}
			}
			(Self::Free { text }, Self::Free { text: other_text }) => {
				Self::free_joined(text, other_text)
			}
			(Self::Free { text }, Self::Bound { text: other_text, affix: Affix::Prefix }) => {
				Self::free_joined(other_text, text)
			}
			(Self::Free { text }, Self::Bound { text: other_text, affix: Affix::Suffix }) => {
				Self::free_joined(text, other_text)
			}
		}
	}

	/// Folds a sequence of morphemes with [`Morpheme::combine`], strictly
	/// left to right: `((m1 · m2) · m3) · ...`.
	///
	/// Returns `None` for an empty sequence.
	pub fn chain<'a, I>(morphemes: I) -> Option<Morpheme>
	where
		I: IntoIterator<Item = &'a Morpheme>,
	{
		let mut iter = morphemes.into_iter();
		let first = iter.next()?.clone();
		Some(iter.fold(first, |acc, next| acc.combine(next)))
	}

	fn free_joined(first: &str, second: &str) -> Morpheme {
		Self::Free {
			text: format!("{first}{second}"),
		}
	}
}

/// Prints the bare text. The alternate form (`{:#}`) adds a hyphen on the
/// attaching side of bound morphemes: `un-`, `-ly`.
impl fmt::Display for Morpheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self, f.alternate()) {
			(Self::Bound { text, affix: Affix::Prefix }, true) => write!(f, "{text}-"),
			(Self::Bound { text, affix: Affix::Suffix }, true) => write!(f, "-{text}"),
			_ => f.write_str(self.text()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constructors() {
		let stem = Morpheme::stem("do");
		assert!(stem.is_free());
		assert!(!stem.is_prefix());
		assert_eq!(stem.affix(), None);

		let prefix = Morpheme::prefix("un");
		assert!(!prefix.is_free());
		assert!(prefix.is_prefix());

		let suffix = Morpheme::suffix("ly");
		assert!(!suffix.is_free());
		assert!(!suffix.is_prefix());
		assert_eq!(suffix.affix(), Some(Affix::Suffix));
	}

	#[test]
	fn test_new_ignores_orientation_when_free() {
		assert_eq!(Morpheme::new("do", true, true), Morpheme::stem("do"));
		assert_eq!(Morpheme::new("do", true, false), Morpheme::stem("do"));
		assert_eq!(Morpheme::new("un", false, true), Morpheme::prefix("un"));
		assert_eq!(Morpheme::new("ly", false, false), Morpheme::suffix("ly"));
	}

	#[test]
	fn test_literal_combinations() {
		let cases = [
			(Morpheme::prefix("un"), Morpheme::stem("do"), Morpheme::stem("undo")),
			(Morpheme::stem("couch"), Morpheme::stem("pillow"), Morpheme::stem("couchpillow")),
			(Morpheme::suffix("ly"), Morpheme::stem("mad"), Morpheme::stem("madly")),
			(Morpheme::prefix("un"), Morpheme::prefix("re"), Morpheme::prefix("unre")),
			(Morpheme::suffix("ly"), Morpheme::prefix("re"), Morpheme::stem("rely")),
			(Morpheme::suffix("ly"), Morpheme::suffix("ly"), Morpheme::suffix("lyly")),
		];
		for (a, b, expected) in cases {
			let combined = a.combine(&b);
			assert_eq!(combined, expected, "{a:#} + {b:#}");
			assert_eq!(combined.is_free(), expected.is_free());
			assert_eq!(combined.is_prefix(), expected.is_prefix());
		}
	}

	#[test]
	fn test_bound_with_free() {
		assert_eq!(Morpheme::prefix("re").combine(&Morpheme::stem("do")), Morpheme::stem("redo"));
		assert_eq!(Morpheme::suffix("ing").combine(&Morpheme::stem("do")), Morpheme::stem("doing"));
	}

	#[test]
	fn test_free_with_bound() {
		assert_eq!(Morpheme::stem("do").combine(&Morpheme::prefix("re")), Morpheme::stem("redo"));
		assert_eq!(Morpheme::stem("do").combine(&Morpheme::suffix("ing")), Morpheme::stem("doing"));
	}

	#[test]
	fn test_crossed_orientation_becomes_free() {
		assert_eq!(Morpheme::prefix("un").combine(&Morpheme::suffix("ly")), Morpheme::stem("unly"));
		assert_eq!(Morpheme::suffix("ly").combine(&Morpheme::prefix("un")), Morpheme::stem("unly"));
	}

	#[test]
	fn test_no_orthographic_contraction() {
		assert_eq!(Morpheme::stem("cool").combine(&Morpheme::suffix("ly")).text(), "coolly");
		assert_eq!(Morpheme::suffix("ly").combine(&Morpheme::stem("cool")).text(), "coolly");
	}

	#[test]
	fn test_inputs_untouched() {
		let a = Morpheme::prefix("un");
		let b = Morpheme::stem("do");
		let _ = a.combine(&b);
		assert_eq!(a, Morpheme::prefix("un"));
		assert_eq!(b, Morpheme::stem("do"));
	}

	#[test]
	fn test_empty_text() {
		assert_eq!(Morpheme::prefix("").combine(&Morpheme::stem("do")), Morpheme::stem("do"));
		assert_eq!(Morpheme::suffix("").combine(&Morpheme::suffix("")), Morpheme::suffix(""));
	}

	#[test]
	fn test_chain_is_left_to_right() {
		let parts = [Morpheme::prefix("un"), Morpheme::prefix("re"), Morpheme::stem("do")];
		assert_eq!(Morpheme::chain(&parts), Some(Morpheme::stem("unredo")));

		// (stem · prefix) collapses to free before the suffix arrives.
		let parts = [Morpheme::stem("do"), Morpheme::prefix("un"), Morpheme::suffix("ing")];
		assert_eq!(Morpheme::chain(&parts), Some(Morpheme::stem("undoing")));

		assert_eq!(Morpheme::chain(&[Morpheme::suffix("ly")]), Some(Morpheme::suffix("ly")));
		assert_eq!(Morpheme::chain(&Vec::<Morpheme>::new()), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(Morpheme::prefix("un").to_string(), "un");
		assert_eq!(format!("{:#}", Morpheme::prefix("un")), "un-");
		assert_eq!(format!("{:#}", Morpheme::suffix("ly")), "-ly");
		assert_eq!(format!("{:#}", Morpheme::stem("do")), "do");
	}

	#[test]
	fn test_serde_keeps_kind_and_affix() {
		for morpheme in [Morpheme::stem("do"), Morpheme::prefix("un"), Morpheme::suffix("ly")] {
			let bytes = postcard::to_stdvec(&morpheme).unwrap();
			let decoded: Morpheme = postcard::from_bytes(&bytes).unwrap();
			assert_eq!(decoded, morpheme);
			assert_eq!(decoded.affix(), morpheme.affix());
		}
	}
}
