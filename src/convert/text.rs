use crate::convert::indirect::{Resolved, deref_text};
use crate::convert::{Capability, ConvertError, Num, Result, Shape, Source};

/// Convert any source to `String`.
///
/// Capabilities win over structure: the value's own error or display text is
/// used first, then the first pointee in a pointer chain that exposes one.
/// Floats use the shortest representation that parses back exactly.
pub(crate) fn to_text<S: Source + ?Sized>(value: &S) -> Result<String> {
	if !matches!(value.shape(), Shape::Nil | Shape::Ptr(None))
		&& let Some(capability) = Capability::of(value)
	{
		return Ok(capability.render());
	}

	match deref_text(value) {
		Resolved::Capability(capability) => Ok(capability.render()),
		Resolved::Shape(shape) => text_from_shape(shape),
	}
}

fn text_from_shape(shape: Shape<'_>) -> Result<String> {
	match shape {
		Shape::Nil | Shape::Ptr(None) => Ok(String::new()),
		Shape::Bool(value) => Ok(value.to_string()),
		Shape::Num(num) => Ok(format_num(num)),
		Shape::Complex64(re, im) => Ok(format!("({re}{im:+}i)")),
		Shape::Complex128(re, im) => Ok(format!("({re}{im:+}i)")),
		Shape::Str(text) => Ok(text.to_owned()),
		Shape::Bytes(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
		Shape::Ptr(Some(_)) | Shape::Opaque(_) => Err(ConvertError::UnsupportedType),
	}
}

fn format_num(num: Num) -> String {
	match num {
		Num::I8(v) => v.to_string(),
		Num::I16(v) => v.to_string(),
		Num::I32(v) => v.to_string(),
		Num::I64(v) => v.to_string(),
		Num::Isize(v) => v.to_string(),
		Num::U8(v) => v.to_string(),
		Num::U16(v) => v.to_string(),
		Num::U32(v) => v.to_string(),
		Num::U64(v) => v.to_string(),
		Num::Usize(v) => v.to_string(),
		Num::F32(v) => v.to_string(),
		Num::F64(v) => v.to_string(),
	}
}
