use std::any::type_name;

use crate::convert::dispatch::dispatch;
use crate::convert::{ConvertError, Result, Source, Target};

/// Converted value paired with the failure that produced it, if any.
///
/// On failure `value` is the target's zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
	value: T,
	error: Option<ConvertError>,
}

impl<T> Outcome<T> {
	/// Return the converted value, or the zero value after a failure.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Return the failure, if any.
	pub fn error(&self) -> Option<&ConvertError> {
		self.error.as_ref()
	}

	/// Return whether the conversion succeeded.
	pub fn is_ok(&self) -> bool {
		self.error.is_none()
	}

	/// Split into the value and the optional failure.
	pub fn into_parts(self) -> (T, Option<ConvertError>) {
		(self.value, self.error)
	}

	/// Convert into a `Result`, dropping the zero value on failure.
	pub fn into_result(self) -> Result<T> {
		match self.error {
			Some(error) => Err(error),
			None => Ok(self.value),
		}
	}
}

impl<T: Default> From<Result<T>> for Outcome<T> {
	fn from(result: Result<T>) -> Self {
		match result {
			Ok(value) => Self { value, error: None },
			Err(error) => Self {
				value: T::default(),
				error: Some(error),
			},
		}
	}
}

/// Convert `value` into `T`, reporting why it failed.
///
/// Every other entry point is built on this one.
///
/// ```
/// use coerce::convert::{ConvertError, try_convert};
///
/// assert_eq!(try_convert::<i32, _>("12.0"), Ok(12));
/// assert_eq!(try_convert::<bool, _>(&Some(Box::new(3_u8))), Ok(true));
/// assert_eq!(try_convert::<u8, _>(&vec![1_i32]), Err(ConvertError::UnsupportedType));
/// ```
pub fn try_convert<T: Target, S: Source + ?Sized>(value: &S) -> Result<T> {
	dispatch(value).inspect_err(|error| {
		tracing::debug!(
			target_type = type_name::<T>(),
			source_kind = %value.shape().kind(),
			%error,
			"conversion failed"
		);
	})
}

/// Convert `value` into `T`, yielding the zero value on failure.
pub fn convert<T: Target, S: Source + ?Sized>(value: &S) -> T {
	try_convert(value).unwrap_or_default()
}

/// Convert `value` into a freshly boxed `T`, or `None` on failure.
pub fn convert_boxed<T: Target, S: Source + ?Sized>(value: &S) -> Option<Box<T>> {
	try_convert(value).ok().map(Box::new)
}

/// Convert `value` into `T`, keeping the zero value and the failure together.
pub fn convert_outcome<T: Target, S: Source + ?Sized>(value: &S) -> Outcome<T> {
	Outcome::from(try_convert(value))
}

#[cfg(test)]
mod tests {
	use super::{Outcome, convert, convert_boxed, convert_outcome, try_convert};
	use crate::convert::ConvertError;

	#[test]
	fn direct_value_is_silent_on_failure() {
		assert_eq!(convert::<i32, _>("17"), 17);
		assert_eq!(convert::<i32, _>("seventeen"), 0);
		assert_eq!(convert::<String, _>(&vec![1.0_f64]), "");
	}

	#[test]
	fn boxed_value_is_absent_on_failure() {
		assert_eq!(convert_boxed::<f64, _>("0.5"), Some(Box::new(0.5)));
		assert_eq!(convert_boxed::<bool, _>("yes"), None);
	}

	#[test]
	fn outcome_pairs_zero_with_error() {
		let ok = convert_outcome::<u16, _>(&true);
		assert!(ok.is_ok());
		assert_eq!(*ok.value(), 1);

		let failed = convert_outcome::<u16, _>("1.5");
		assert!(!failed.is_ok());
		assert_eq!(*failed.value(), 0);
		assert!(failed.error().is_some_and(ConvertError::is_parse));

		let (value, error) = failed.into_parts();
		assert_eq!(value, 0);
		assert!(error.is_some());
	}

	#[test]
	fn outcome_round_trips_through_result() {
		let outcome: Outcome<i8> = Outcome::from(try_convert::<i8, _>("-4"));
		assert_eq!(outcome.into_result(), Ok(-4));

		let outcome: Outcome<i8> = Outcome::from(try_convert::<i8, _>(&[0_u8; 2]));
		assert_eq!(outcome.into_result(), Err(ConvertError::UnsupportedType));
	}
}
