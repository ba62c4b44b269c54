use crate::convert::indirect::deref_plain;
use crate::convert::{ConvertError, Result, Shape, Source};

/// Convert any source to `bool`.
///
/// Numbers are true when non-zero; text must be exactly `true` or `false`.
pub(crate) fn to_bool<S: Source + ?Sized>(value: &S) -> Result<bool> {
	match deref_plain(value) {
		Shape::Nil | Shape::Ptr(None) => Ok(false),
		Shape::Bool(value) => Ok(value),
		Shape::Num(num) => Ok(!num.is_zero()),
		Shape::Complex64(re, im) => Ok(re != 0.0 || im != 0.0),
		Shape::Complex128(re, im) => Ok(re != 0.0 || im != 0.0),
		Shape::Str(text) => parse_bool(text),
		Shape::Bytes(bytes) => parse_bool(&String::from_utf8_lossy(bytes)),
		Shape::Ptr(Some(_)) | Shape::Opaque(_) => Err(ConvertError::UnsupportedType),
	}
}

fn parse_bool(text: &str) -> Result<bool> {
	text.parse::<bool>().map_err(|source| ConvertError::ParseBool {
		literal: text.into(),
		source,
	})
}
