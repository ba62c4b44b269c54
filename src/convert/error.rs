use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors produced while converting a source value to a target kind.
///
/// Parse variants display the host parser's message unmodified, which does not
/// name the offending text (`invalid digit found in string`). The literal is
/// carried in the variant instead; read it with [`ConvertError::literal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
	/// Source has no representation in the requested target family.
	#[error("unsupported type")]
	UnsupportedType,
	/// Text did not parse as a boolean literal.
	#[error("{source}")]
	ParseBool {
		/// Text handed to the parser.
		literal: Box<str>,
		/// Native parser failure.
		source: ParseBoolError,
	},
	/// Text did not parse as a base-10 integer.
	#[error("{source}")]
	ParseInt {
		/// Text handed to the parser, before decimal normalization.
		literal: Box<str>,
		/// Native parser failure.
		source: ParseIntError,
	},
	/// Text did not parse as a floating-point literal.
	#[error("{source}")]
	ParseFloat {
		/// Text handed to the parser.
		literal: Box<str>,
		/// Native parser failure.
		source: ParseFloatError,
	},
}

impl ConvertError {
	/// Return whether this is the unsupported-type sentinel.
	pub fn is_unsupported(&self) -> bool {
		matches!(self, Self::UnsupportedType)
	}

	/// Return whether this is a text parse failure.
	pub fn is_parse(&self) -> bool {
		!self.is_unsupported()
	}

	/// Return the literal that failed to parse, if any.
	pub fn literal(&self) -> Option<&str> {
		match self {
			Self::UnsupportedType => None,
			Self::ParseBool { literal, .. } | Self::ParseInt { literal, .. } | Self::ParseFloat { literal, .. } => Some(literal),
		}
	}
}
