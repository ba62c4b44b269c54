use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

/// Value that can be inspected by the conversion engine.
///
/// `shape` reports the value's kind together with its raw representation.
/// User types whose representation is a built-in scalar report that scalar;
/// wrappers report [`Shape::Ptr`]. The two capability hooks are consulted only
/// by text conversion and take precedence over the shape.
pub trait Source {
	/// Report kind and raw representation.
	fn shape(&self) -> Shape<'_>;

	/// "Produces text" capability.
	fn as_display(&self) -> Option<&dyn fmt::Display> {
		None
	}

	/// "Produces error text" capability.
	fn as_error(&self) -> Option<&dyn Error> {
		None
	}
}

/// Kind-tagged view of a source value.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
	/// Missing value.
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// Built-in integer or float scalar.
	Num(Num),
	/// Complex number with 32-bit components.
	Complex64(f32, f32),
	/// Complex number with 64-bit components.
	Complex128(f64, f64),
	/// Text.
	Str(&'a str),
	/// Byte sequence.
	Bytes(&'a [u8]),
	/// Pointer layer; `None` is a nil pointer.
	Ptr(Option<&'a dyn Source>),
	/// Value with no scalar representation.
	Opaque(OpaqueKind),
}

/// Built-in numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
	/// `i8` scalar.
	I8(i8),
	/// `i16` scalar.
	I16(i16),
	/// `i32` scalar.
	I32(i32),
	/// `i64` scalar.
	I64(i64),
	/// `isize` scalar.
	Isize(isize),
	/// `u8` scalar.
	U8(u8),
	/// `u16` scalar.
	U16(u16),
	/// `u32` scalar.
	U32(u32),
	/// `u64` scalar.
	U64(u64),
	/// `usize` scalar.
	Usize(usize),
	/// `f32` scalar.
	F32(f32),
	/// `f64` scalar.
	F64(f64),
}

/// Structural kinds that have no boolean, numeric or text representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpaqueKind {
	/// Fixed-size array.
	Array,
	/// Channel endpoint.
	Chan,
	/// Function value.
	Func,
	/// Key/value map.
	Map,
	/// Sequence of non-byte elements.
	Slice,
	/// Record without a text or error capability.
	Struct,
	/// Raw pointer.
	UnsafePtr,
}

/// Printable descriptor of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// Missing value.
	Nil,
	/// Boolean.
	Bool,
	/// Signed integer.
	Int,
	/// Unsigned integer.
	Uint,
	/// Floating point.
	Float,
	/// Complex number.
	Complex,
	/// Text.
	String,
	/// Byte sequence.
	Bytes,
	/// Pointer layer.
	Ptr,
	/// Opaque structural kind.
	Opaque(OpaqueKind),
}

impl Shape<'_> {
	/// Return the printable kind of this shape.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Nil | Self::Ptr(None) => Kind::Nil,
			Self::Bool(_) => Kind::Bool,
			Self::Num(num) => num.kind(),
			Self::Complex64(..) | Self::Complex128(..) => Kind::Complex,
			Self::Str(_) => Kind::String,
			Self::Bytes(_) => Kind::Bytes,
			Self::Ptr(Some(_)) => Kind::Ptr,
			Self::Opaque(kind) => Kind::Opaque(*kind),
		}
	}
}

impl fmt::Debug for Shape<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nil => f.write_str("Nil"),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Num(v) => f.debug_tuple("Num").field(v).finish(),
			Self::Complex64(re, im) => f.debug_tuple("Complex64").field(re).field(im).finish(),
			Self::Complex128(re, im) => f.debug_tuple("Complex128").field(re).field(im).finish(),
			Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
			Self::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
			Self::Ptr(None) => f.write_str("Ptr(nil)"),
			Self::Ptr(Some(_)) => f.write_str("Ptr(..)"),
			Self::Opaque(kind) => f.debug_tuple("Opaque").field(kind).finish(),
		}
	}
}

impl Num {
	/// Return whether the scalar equals zero. NaN is non-zero.
	pub fn is_zero(self) -> bool {
		match self {
			Self::I8(v) => v == 0,
			Self::I16(v) => v == 0,
			Self::I32(v) => v == 0,
			Self::I64(v) => v == 0,
			Self::Isize(v) => v == 0,
			Self::U8(v) => v == 0,
			Self::U16(v) => v == 0,
			Self::U32(v) => v == 0,
			Self::U64(v) => v == 0,
			Self::Usize(v) => v == 0,
			Self::F32(v) => v == 0.0,
			Self::F64(v) => v == 0.0,
		}
	}

	/// Return the numeric family of the scalar.
	pub fn kind(self) -> Kind {
		match self {
			Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) | Self::Isize(_) => Kind::Int,
			Self::U8(_) | Self::U16(_) | Self::U32(_) | Self::U64(_) | Self::Usize(_) => Kind::Uint,
			Self::F32(_) | Self::F64(_) => Kind::Float,
		}
	}
}

impl fmt::Display for OpaqueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Array => "array",
			Self::Chan => "chan",
			Self::Func => "func",
			Self::Map => "map",
			Self::Slice => "slice",
			Self::Struct => "struct",
			Self::UnsafePtr => "unsafe-ptr",
		})
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nil => f.write_str("nil"),
			Self::Bool => f.write_str("bool"),
			Self::Int => f.write_str("int"),
			Self::Uint => f.write_str("uint"),
			Self::Float => f.write_str("float"),
			Self::Complex => f.write_str("complex"),
			Self::String => f.write_str("string"),
			Self::Bytes => f.write_str("bytes"),
			Self::Ptr => f.write_str("ptr"),
			Self::Opaque(kind) => kind.fmt(f),
		}
	}
}

macro_rules! impl_num_source {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Source for $ty {
				fn shape(&self) -> Shape<'_> {
					Shape::Num(Num::$variant(*self))
				}
			}
		)*
	};
}

impl_num_source!(
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
);

macro_rules! impl_slice_source {
	($($ty:ty),* $(,)?) => {
		$(
			impl Source for [$ty] {
				fn shape(&self) -> Shape<'_> {
					Shape::Opaque(OpaqueKind::Slice)
				}
			}

			impl Source for Vec<$ty> {
				fn shape(&self) -> Shape<'_> {
					Shape::Opaque(OpaqueKind::Slice)
				}
			}
		)*
	};
}

impl_slice_source!(bool, i8, i16, i32, i64, isize, u16, u32, u64, usize, f32, f64, String, &str);

impl Source for () {
	fn shape(&self) -> Shape<'_> {
		Shape::Nil
	}
}

impl Source for bool {
	fn shape(&self) -> Shape<'_> {
		Shape::Bool(*self)
	}
}

impl Source for str {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self)
	}
}

impl Source for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self)
	}
}

impl Source for Cow<'_, str> {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self)
	}
}

impl Source for [u8] {
	fn shape(&self) -> Shape<'_> {
		Shape::Bytes(self)
	}
}

impl Source for Vec<u8> {
	fn shape(&self) -> Shape<'_> {
		Shape::Bytes(self)
	}
}

impl<T: Source> Source for &T {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(Some(*self))
	}
}

impl<T: Source> Source for Box<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(Some(&**self))
	}
}

impl<T: Source> Source for Rc<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(Some(&**self))
	}
}

impl<T: Source> Source for Arc<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(Some(&**self))
	}
}

impl<T: Source> Source for Option<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(self.as_ref().map(|item| item as &dyn Source))
	}
}

impl<T, const N: usize> Source for [T; N] {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Array)
	}
}

impl<K, V, S> Source for HashMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Map)
	}
}

impl<K, V> Source for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Map)
	}
}

impl<R> Source for fn() -> R {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Func)
	}
}

impl<A, R> Source for fn(A) -> R {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Func)
	}
}

impl<A, B, R> Source for fn(A, B) -> R {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Func)
	}
}

impl<T> Source for Sender<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Chan)
	}
}

impl<T> Source for SyncSender<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Chan)
	}
}

impl<T> Source for Receiver<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Chan)
	}
}

impl<T: ?Sized> Source for *const T {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::UnsafePtr)
	}
}

impl<T: ?Sized> Source for *mut T {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::UnsafePtr)
	}
}
