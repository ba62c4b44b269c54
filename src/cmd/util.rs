use coerce::convert::{ConvertError, Family, Source, Target, convert_outcome};
use serde::Serialize;

use crate::cmd::Result;

/// Target kind selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetName {
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

impl TargetName {
	/// Every target in listing order.
	pub const ALL: [Self; 14] = [
		Self::Bool,
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::Isize,
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U64,
		Self::Usize,
		Self::F32,
		Self::F64,
		Self::String,
	];

	/// Return the CLI spelling of this target.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::Isize => "isize",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::Usize => "usize",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::String => "string",
		}
	}

	/// Return the target's family and numeric width in bits.
	pub fn describe(self) -> (Option<Family>, Option<usize>) {
		match self {
			Self::Bool => (bool::FAMILY, None),
			Self::I8 => numeric::<i8>(),
			Self::I16 => numeric::<i16>(),
			Self::I32 => numeric::<i32>(),
			Self::I64 => numeric::<i64>(),
			Self::Isize => numeric::<isize>(),
			Self::U8 => numeric::<u8>(),
			Self::U16 => numeric::<u16>(),
			Self::U32 => numeric::<u32>(),
			Self::U64 => numeric::<u64>(),
			Self::Usize => numeric::<usize>(),
			Self::F32 => numeric::<f32>(),
			Self::F64 => numeric::<f64>(),
			Self::String => (String::FAMILY, None),
		}
	}

	/// Convert `value` and render the result as text.
	///
	/// On failure the rendered value is the target's zero value.
	pub fn render(self, value: &dyn Source) -> (String, Option<ConvertError>) {
		match self {
			Self::Bool => rendered::<bool>(value),
			Self::I8 => rendered::<i8>(value),
			Self::I16 => rendered::<i16>(value),
			Self::I32 => rendered::<i32>(value),
			Self::I64 => rendered::<i64>(value),
			Self::Isize => rendered::<isize>(value),
			Self::U8 => rendered::<u8>(value),
			Self::U16 => rendered::<u16>(value),
			Self::U32 => rendered::<u32>(value),
			Self::U64 => rendered::<u64>(value),
			Self::Usize => rendered::<usize>(value),
			Self::F32 => rendered::<f32>(value),
			Self::F64 => rendered::<f64>(value),
			Self::String => rendered::<String>(value),
		}
	}
}

fn numeric<T: Target>() -> (Option<Family>, Option<usize>) {
	(T::FAMILY, Some(std::mem::size_of::<T>() * 8))
}

fn rendered<T: Target + ToString>(value: &dyn Source) -> (String, Option<ConvertError>) {
	let (value, error) = convert_outcome::<T, dyn Source>(value).into_parts();
	(value.to_string(), error)
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
