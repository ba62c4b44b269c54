use crate::convert::decimal::normalize_integer_text;
use crate::convert::indirect::deref_plain;
use crate::convert::{ConvertError, Num, Result, Shape, Source};

/// Built-in numeric type produced by [`to_number`].
pub(crate) trait Number: Copy + Default + 'static {
	/// `1` for true, `0` for false.
	fn from_bool(value: bool) -> Self;
	/// Cast any built-in scalar with `as` semantics.
	fn from_num(num: Num) -> Self;
	/// Parse base-10 text for this type's family.
	fn parse_text(text: &str) -> Result<Self>;
}

/// Convert any source to the numeric type `N`.
pub(crate) fn to_number<N: Number, S: Source + ?Sized>(value: &S) -> Result<N> {
	match deref_plain(value) {
		Shape::Nil | Shape::Ptr(None) => Ok(N::default()),
		Shape::Bool(value) => Ok(N::from_bool(value)),
		Shape::Num(num) => Ok(N::from_num(num)),
		Shape::Str(text) => N::parse_text(text),
		Shape::Bytes(bytes) => N::parse_text(&String::from_utf8_lossy(bytes)),
		Shape::Complex64(..) | Shape::Complex128(..) | Shape::Ptr(Some(_)) | Shape::Opaque(_) => Err(ConvertError::UnsupportedType),
	}
}

fn parse_signed(text: &str) -> Result<i64> {
	normalize_integer_text(text).parse::<i64>().map_err(|source| ConvertError::ParseInt {
		literal: text.into(),
		source,
	})
}

fn parse_unsigned(text: &str) -> Result<u64> {
	normalize_integer_text(text).parse::<u64>().map_err(|source| ConvertError::ParseInt {
		literal: text.into(),
		source,
	})
}

fn parse_f32(text: &str) -> Result<f32> {
	text.parse::<f32>().map_err(|source| ConvertError::ParseFloat {
		literal: text.into(),
		source,
	})
}

fn parse_f64(text: &str) -> Result<f64> {
	text.parse::<f64>().map_err(|source| ConvertError::ParseFloat {
		literal: text.into(),
		source,
	})
}

macro_rules! impl_number {
	($parse:ident: $($ty:ty),* $(,)?) => {
		$(
			#[allow(
				clippy::cast_possible_truncation,
				clippy::cast_sign_loss,
				clippy::cast_possible_wrap,
				clippy::cast_precision_loss,
				clippy::cast_lossless,
				clippy::unnecessary_cast
			)]
			impl Number for $ty {
				fn from_bool(value: bool) -> Self {
					if value { 1 as $ty } else { 0 as $ty }
				}

				fn from_num(num: Num) -> Self {
					match num {
						Num::I8(v) => v as $ty,
						Num::I16(v) => v as $ty,
						Num::I32(v) => v as $ty,
						Num::I64(v) => v as $ty,
						Num::Isize(v) => v as $ty,
						Num::U8(v) => v as $ty,
						Num::U16(v) => v as $ty,
						Num::U32(v) => v as $ty,
						Num::U64(v) => v as $ty,
						Num::Usize(v) => v as $ty,
						Num::F32(v) => v as $ty,
						Num::F64(v) => v as $ty,
					}
				}

				fn parse_text(text: &str) -> Result<Self> {
					$parse(text).map(|value| value as $ty)
				}
			}
		)*
	};
}

impl_number!(parse_signed: i8, i16, i32, i64, isize);
impl_number!(parse_unsigned: u8, u16, u32, u64, usize);
impl_number!(parse_f32: f32);
impl_number!(parse_f64: f64);
