use coerce::convert::ConvertError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors produced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input literal does not match the requested `--from` kind.
	#[error("invalid {kind} input: {value}")]
	InvalidInput {
		/// Requested input kind.
		kind: &'static str,
		/// Offending literal.
		value: String,
	},
	/// Input literal is required for every kind except `nil`.
	#[error("missing input value for --from {kind}")]
	MissingInput {
		/// Requested input kind.
		kind: &'static str,
	},
	/// Conversion failed.
	#[error(transparent)]
	Convert(#[from] ConvertError),
	/// JSON report serialization failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
