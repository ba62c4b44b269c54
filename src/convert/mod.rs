mod api;
mod boolean;
mod decimal;
mod dispatch;
mod error;
mod indirect;
mod number;
mod source;
mod target;
mod text;

/// Public conversion entry points and the outcome pair.
pub use api::{Outcome, convert, convert_boxed, convert_outcome, try_convert};
/// Error and result aliases.
pub use error::{ConvertError, Result};
/// Capability reported by a source value.
pub use indirect::Capability;
/// Source introspection types.
pub use source::{Kind, Num, OpaqueKind, Shape, Source};
/// Target representation types.
pub use target::{Family, Target, Wide};
