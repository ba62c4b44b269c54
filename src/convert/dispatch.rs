use std::any::{Any, TypeId, type_name};

use crate::convert::boolean::to_bool;
use crate::convert::number::to_number;
use crate::convert::text::to_text;
use crate::convert::{ConvertError, Family, Result, Source, Target, Wide};

/// Built-in target matched by exact type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
	Bool,
	I8,
	I16,
	I32,
	I64,
	Isize,
	U8,
	U16,
	U32,
	U64,
	Usize,
	F32,
	F64,
	String,
}

impl Builtin {
	fn of<T: 'static>() -> Option<Self> {
		let id = TypeId::of::<T>();
		[
			(TypeId::of::<bool>(), Self::Bool),
			(TypeId::of::<i8>(), Self::I8),
			(TypeId::of::<i16>(), Self::I16),
			(TypeId::of::<i32>(), Self::I32),
			(TypeId::of::<i64>(), Self::I64),
			(TypeId::of::<isize>(), Self::Isize),
			(TypeId::of::<u8>(), Self::U8),
			(TypeId::of::<u16>(), Self::U16),
			(TypeId::of::<u32>(), Self::U32),
			(TypeId::of::<u64>(), Self::U64),
			(TypeId::of::<usize>(), Self::Usize),
			(TypeId::of::<f32>(), Self::F32),
			(TypeId::of::<f64>(), Self::F64),
			(TypeId::of::<String>(), Self::String),
		]
		.into_iter()
		.find_map(|(candidate, builtin)| (candidate == id).then_some(builtin))
	}
}

/// Route a conversion to the exact-type fast path, the approximated path, or
/// reject it.
pub(crate) fn dispatch<T: Target, S: Source + ?Sized>(value: &S) -> Result<T> {
	if let Some(builtin) = Builtin::of::<T>() {
		tracing::trace!(target_type = type_name::<T>(), ?builtin, "exact conversion");
		return convert_exact(builtin, value);
	}

	let Some(family) = T::FAMILY else {
		return Err(ConvertError::UnsupportedType);
	};

	tracing::trace!(target_type = type_name::<T>(), family = family.name(), "approximated conversion");
	let wide = match family {
		Family::Bool => Wide::Bool(to_bool(value)?),
		Family::Int => Wide::Int(to_number::<i64, S>(value)?),
		Family::Uint => Wide::Uint(to_number::<u64, S>(value)?),
		Family::Float => Wide::Float(to_number::<f64, S>(value)?),
		Family::Text => Wide::Text(to_text(value)?),
	};
	T::from_wide(wide).ok_or(ConvertError::UnsupportedType)
}

fn convert_exact<T: 'static, S: Source + ?Sized>(builtin: Builtin, value: &S) -> Result<T> {
	match builtin {
		Builtin::Bool => reassert(to_bool(value)?),
		Builtin::I8 => reassert(to_number::<i8, S>(value)?),
		Builtin::I16 => reassert(to_number::<i16, S>(value)?),
		Builtin::I32 => reassert(to_number::<i32, S>(value)?),
		Builtin::I64 => reassert(to_number::<i64, S>(value)?),
		Builtin::Isize => reassert(to_number::<isize, S>(value)?),
		Builtin::U8 => reassert(to_number::<u8, S>(value)?),
		Builtin::U16 => reassert(to_number::<u16, S>(value)?),
		Builtin::U32 => reassert(to_number::<u32, S>(value)?),
		Builtin::U64 => reassert(to_number::<u64, S>(value)?),
		Builtin::Usize => reassert(to_number::<usize, S>(value)?),
		Builtin::F32 => reassert(to_number::<f32, S>(value)?),
		Builtin::F64 => reassert(to_number::<f64, S>(value)?),
		Builtin::String => reassert(to_text(value)?),
	}
}

/// Hand a value of the matched built-in type back as `T` without conversion.
fn reassert<T: 'static, U: 'static>(value: U) -> Result<T> {
	let mut slot = Some(value);
	(&mut slot as &mut dyn Any)
		.downcast_mut::<Option<T>>()
		.and_then(Option::take)
		.ok_or(ConvertError::UnsupportedType)
}
