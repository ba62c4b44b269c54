use std::error::Error;
use std::fmt;

use crate::convert::{Shape, Source};

/// Text-producing capability exposed by a source value.
#[derive(Clone, Copy)]
pub enum Capability<'a> {
	/// Error message capability.
	Error(&'a dyn Error),
	/// Custom text capability.
	Display(&'a dyn fmt::Display),
}

impl<'a> Capability<'a> {
	/// Return the capability exposed by `value`. Error text wins over display text.
	pub fn of<S: Source + ?Sized>(value: &'a S) -> Option<Self> {
		if let Some(error) = value.as_error() {
			return Some(Self::Error(error));
		}
		value.as_display().map(Self::Display)
	}

	/// Render the capability output.
	pub fn render(self) -> String {
		match self {
			Self::Error(error) => error.to_string(),
			Self::Display(item) => item.to_string(),
		}
	}
}

impl fmt::Debug for Capability<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Error(error) => f.debug_tuple("Error").field(&error.to_string()).finish(),
			Self::Display(item) => f.debug_tuple("Display").field(&item.to_string()).finish(),
		}
	}
}

/// Outcome of capability-aware unwrapping.
#[derive(Debug)]
pub(crate) enum Resolved<'a> {
	/// A pointee exposed a capability; its output is the text.
	Capability(Capability<'a>),
	/// Base value reached without meeting a capability.
	Shape(Shape<'a>),
}

/// Dereference pointer layers until a non-pointer or a nil pointer.
pub(crate) fn deref_plain<S: Source + ?Sized>(value: &S) -> Shape<'_> {
	let mut shape = value.shape();
	let mut depth = 0_usize;
	while let Shape::Ptr(Some(next)) = shape {
		shape = next.shape();
		depth += 1;
	}
	if depth > 0 {
		tracing::trace!(depth, kind = %shape.kind(), "unwrapped pointer chain");
	}
	shape
}

/// Dereference pointer layers, stopping at the first pointer whose pointee
/// exposes a text or error-text capability.
pub(crate) fn deref_text<S: Source + ?Sized>(value: &S) -> Resolved<'_> {
	let mut shape = value.shape();
	let mut depth = 0_usize;
	while let Shape::Ptr(Some(next)) = shape {
		depth += 1;
		if let Some(capability) = Capability::of(next) {
			tracing::trace!(depth, "pointee exposes text capability");
			return Resolved::Capability(capability);
		}
		shape = next.shape();
	}
	Resolved::Shape(shape)
}
