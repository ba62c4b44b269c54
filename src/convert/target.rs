/// Representation family of a target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
	/// Boolean-like.
	Bool,
	/// Signed-integer-like.
	Int,
	/// Unsigned-integer-like.
	Uint,
	/// Floating-point-like.
	Float,
	/// Text-like.
	Text,
}

/// Widest representation of each [`Family`], used as the conversion intermediate
/// for approximated targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Wide {
	/// Boolean intermediate.
	Bool(bool),
	/// Signed intermediate.
	Int(i64),
	/// Unsigned intermediate.
	Uint(u64),
	/// Floating intermediate.
	Float(f64),
	/// Text intermediate.
	Text(String),
}

/// Type a source value can be converted into.
///
/// Built-in scalars take the exact-type fast path. Any other implementor is an
/// approximated type: the value is converted through [`Wide`] and narrowed with
/// [`Target::from_wide`]. A `FAMILY` of `None` marks a type with no convertible
/// representation; conversions into it always fail with the unsupported-type
/// error. `Default` supplies the zero value returned on failure.
pub trait Target: Default + Sized + 'static {
	/// Underlying representation family, if any.
	const FAMILY: Option<Family>;

	/// Narrow a wide intermediate into `Self`, truncating like an `as` cast.
	///
	/// Returns `None` when `wide` belongs to another family.
	fn from_wide(wide: Wide) -> Option<Self>;
}

impl Family {
	/// Return the family name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
			Self::Text => "text",
		}
	}
}

impl Target for bool {
	const FAMILY: Option<Family> = Some(Family::Bool);

	fn from_wide(wide: Wide) -> Option<Self> {
		match wide {
			Wide::Bool(value) => Some(value),
			_ => None,
		}
	}
}

impl Target for String {
	const FAMILY: Option<Family> = Some(Family::Text);

	fn from_wide(wide: Wide) -> Option<Self> {
		match wide {
			Wide::Text(value) => Some(value),
			_ => None,
		}
	}
}

macro_rules! impl_numeric_target {
	($family:ident, $wide:ident: $($ty:ty),* $(,)?) => {
		$(
			impl Target for $ty {
				const FAMILY: Option<Family> = Some(Family::$family);

				#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
				fn from_wide(wide: Wide) -> Option<Self> {
					match wide {
						Wide::$wide(value) => Some(value as $ty),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_numeric_target!(Int, Int: i8, i16, i32, i64, isize);
impl_numeric_target!(Uint, Uint: u8, u16, u32, u64, usize);
impl_numeric_target!(Float, Float: f32, f64);

/// Register tuple newtypes over a built-in scalar as approximated types.
///
/// As a target the newtype converts through its representation's family and
/// is narrowed with the representation's truncation rules. As a source it
/// reports the shape of its inner value. It must implement `Default`.
///
/// ```
/// use coerce::convert::try_convert;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Level(u8);
/// coerce::approximated!(Level(u8));
///
/// assert_eq!(try_convert::<Level, _>("7"), Ok(Level(7)));
/// assert_eq!(try_convert::<Level, _>(&300_i32), Ok(Level(44)));
/// assert_eq!(try_convert::<String, _>(&Level(9)), Ok("9".to_owned()));
/// ```
#[macro_export]
macro_rules! approximated {
	($($name:ident($repr:ty)),+ $(,)?) => {
		$(
			impl $crate::convert::Target for $name {
				const FAMILY: Option<$crate::convert::Family> = <$repr as $crate::convert::Target>::FAMILY;

				fn from_wide(wide: $crate::convert::Wide) -> Option<Self> {
					<$repr as $crate::convert::Target>::from_wide(wide).map($name)
				}
			}

			impl $crate::convert::Source for $name {
				fn shape(&self) -> $crate::convert::Shape<'_> {
					<$repr as $crate::convert::Source>::shape(&self.0)
				}
			}
		)+
	};
}
