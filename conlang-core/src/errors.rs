//! Definition of errors.

/// A specialized Result type for this crate.
pub type Result<T, E = ConlangError> = std::result::Result<T, E>;

/// The error type for the conlang toolkit.
///
/// Morpheme combination and the collection helpers never fail; errors only
/// come from building letters out of text and from invalid configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConlangError {
	/// A letter definition (`"Upper,lower,CLASSES"`) could not be read.
	#[error("invalid letter definition {definition:?}: {msg}")]
	InvalidLetter {
		definition: String,
		msg: String,
	},

	/// A configuration value was rejected.
	#[error("invalid argument {arg}: {msg}")]
	InvalidArgument {
		arg: &'static str,
		msg: String,
	},
}

impl ConlangError {
	pub(crate) fn invalid_letter<S, M>(definition: S, msg: M) -> Self
	where
		S: Into<String>,
		M: Into<String>,
	{
		Self::InvalidLetter {
			definition: definition.into(),
			msg: msg.into(),
		}
	}

	pub(crate) fn invalid_argument<M>(arg: &'static str, msg: M) -> Self
	where
		M: Into<String>,
	{
		Self::InvalidArgument {
			arg,
			msg: msg.into(),
		}
	}
}
