//! Public library API for coercing arbitrary values to booleans, numbers and text.

/// Source introspection, pointer unwrapping, per-kind converters and entry points.
pub mod convert;
