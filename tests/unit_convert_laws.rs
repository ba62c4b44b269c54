#![allow(missing_docs)]

use std::fmt;
use std::sync::mpsc;

use coerce::convert::{ConvertError, OpaqueKind, Shape, Source, Target, convert, try_convert};

struct Point {
	x: i32,
	y: i32,
}

impl Source for Point {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(OpaqueKind::Struct)
	}
}

struct Named(&'static str);

impl fmt::Display for Named {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "named:{}", self.0)
	}
}

impl Source for Named {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self.0)
	}

	fn as_display(&self) -> Option<&dyn fmt::Display> {
		Some(self)
	}
}

/// Pointer-shaped value that also exposes custom text.
struct Handle(Box<i32>);

impl fmt::Display for Handle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "handle#{}", self.0)
	}
}

impl Source for Handle {
	fn shape(&self) -> Shape<'_> {
		Shape::Ptr(Some(&*self.0))
	}

	fn as_display(&self) -> Option<&dyn fmt::Display> {
		Some(self)
	}
}

fn text_of<S: Source + ?Sized>(value: &S) -> String {
	try_convert::<String, S>(value).expect("value converts to text")
}

fn assert_round_trip<T>(value: T)
where
	T: Target + Source + PartialEq + fmt::Debug + Copy,
{
	let text = text_of(&value);
	let back = try_convert::<T, str>(&text).expect("text parses back");
	assert_eq!(back, value, "round trip through {text:?}");
}

fn assert_unsupported_everywhere<S: Source + ?Sized>(value: &S) {
	assert_eq!(try_convert::<bool, S>(value), Err(ConvertError::UnsupportedType));
	assert_eq!(try_convert::<i32, S>(value), Err(ConvertError::UnsupportedType));
	assert_eq!(try_convert::<u64, S>(value), Err(ConvertError::UnsupportedType));
	assert_eq!(try_convert::<f64, S>(value), Err(ConvertError::UnsupportedType));
	assert_eq!(try_convert::<String, S>(value), Err(ConvertError::UnsupportedType));

	assert!(!convert::<bool, S>(value));
	assert_eq!(convert::<i32, S>(value), 0);
	assert_eq!(convert::<String, S>(value), "");
}

#[test]
fn integers_round_trip_through_text() {
	assert_round_trip(i8::MIN);
	assert_round_trip(i8::MAX);
	assert_round_trip(-12_345_i16);
	assert_round_trip(i32::MIN);
	assert_round_trip(i64::MIN);
	assert_round_trip(i64::MAX);
	assert_round_trip(isize::MAX);
	assert_round_trip(u8::MAX);
	assert_round_trip(u32::MAX);
	assert_round_trip(u64::MAX);
	assert_round_trip(usize::MAX);
}

#[test]
fn floats_round_trip_through_text() {
	assert_round_trip(0.1_f64);
	assert_round_trip(-2.5e-10_f64);
	assert_round_trip(1e300_f64);
	assert_round_trip(f64::MAX);
	assert_round_trip(f64::MIN_POSITIVE);
	assert_round_trip(0.1_f32);
	assert_round_trip(3.402_823_5e38_f32);
	assert_round_trip(f32::MIN_POSITIVE);
}

#[test]
fn nil_converts_to_zero_for_every_target() {
	assert_eq!(try_convert::<bool, _>(&()), Ok(false));
	assert_eq!(try_convert::<i8, _>(&()), Ok(0));
	assert_eq!(try_convert::<u64, _>(&()), Ok(0));
	assert_eq!(try_convert::<f32, _>(&()), Ok(0.0));
	assert_eq!(try_convert::<String, _>(&()), Ok(String::new()));

	let missing: Option<Box<i32>> = None;
	assert_eq!(try_convert::<bool, _>(&missing), Ok(false));
	assert_eq!(try_convert::<isize, _>(&missing), Ok(0));
	assert_eq!(try_convert::<String, _>(&missing), Ok(String::new()));
}

#[test]
fn text_conversion_is_idempotent() {
	let plain = String::from("plain");
	let inputs: [&dyn Source; 5] = [&42_u16, &-0.75_f64, &true, &plain, &Named("n")];
	for input in inputs {
		let once = text_of(input);
		let twice = text_of(&once);
		assert_eq!(once, twice);
	}
}

#[test]
fn pointer_chains_do_not_change_numbers_or_booleans() {
	let base = 9_i64;
	let depth_one = &base;
	let depth_two = Box::new(depth_one);
	let depth_three = Some(depth_two);

	assert_eq!(try_convert::<i64, _>(&depth_three), try_convert::<i64, _>(&base));
	assert_eq!(try_convert::<u8, _>(&depth_three), Ok(9));
	assert_eq!(try_convert::<bool, _>(&depth_three), try_convert::<bool, _>(&base));
	assert_eq!(text_of(&depth_three), "9");
}

#[test]
fn pointer_to_pointer_to_string_unwraps_fully() {
	let text = String::from("deep");
	let chain = Box::new(Box::new(&text));
	assert_eq!(text_of(&chain), "deep");
}

#[test]
fn decimal_trim_law() {
	assert_eq!(try_convert::<i32, _>("1.0"), Ok(1));
	assert_eq!(try_convert::<i32, _>("0.0"), Ok(0));
	assert_eq!(try_convert::<i32, _>(".0"), Ok(0));
	assert_eq!(try_convert::<u64, _>("250.000"), Ok(250));

	for literal in ["1.5", ".5", "2.01"] {
		let err = try_convert::<i32, _>(literal).expect_err("significant fraction rejected");
		assert!(matches!(err, ConvertError::ParseInt { .. }), "{literal}: {err:?}");
		assert_eq!(err.literal(), Some(literal));
	}
}

#[test]
fn boolean_literal_set_is_strict() {
	assert_eq!(try_convert::<bool, _>("true"), Ok(true));
	assert_eq!(try_convert::<bool, _>("false"), Ok(false));
	assert_eq!(try_convert::<bool, _>(b"true".as_slice()), Ok(true));
	assert_eq!(try_convert::<bool, _>(&1_u8), Ok(true));
	assert_eq!(try_convert::<bool, _>(&0_i64), Ok(false));

	let native = "1".parse::<bool>().expect_err("native parser rejects 1");
	for literal in ["1", "0", "TRUE", "t", "yes", ""] {
		let err = try_convert::<bool, _>(literal).expect_err("non-canonical literal rejected");
		assert!(matches!(err, ConvertError::ParseBool { .. }));
		assert_eq!(err.to_string(), native.to_string());
	}
}

#[test]
fn unsupported_kinds_fail_for_every_target() {
	let (tx, rx) = mpsc::channel::<u8>();
	assert_unsupported_everywhere(&tx);
	assert_unsupported_everywhere(&rx);
	assert_unsupported_everywhere(&(i32::abs as fn(i32) -> i32));
	assert_unsupported_everywhere(&vec![1_i32, 2, 3]);
	assert_unsupported_everywhere(&[1.0_f64, 2.0][..]);
	assert_unsupported_everywhere(&Point { x: 1, y: 2 });
	assert_unsupported_everywhere(&std::ptr::null::<u8>());

	let point = Point { x: 3, y: 4 };
	assert_eq!(point.x + point.y, 7);
}

#[test]
fn unsupported_error_is_distinct_from_parse_errors() {
	let unsupported = try_convert::<i32, _>(&vec![true]).expect_err("unsupported");
	let parse = try_convert::<i32, _>("x").expect_err("parse");

	assert!(unsupported.is_unsupported());
	assert!(!unsupported.is_parse());
	assert_eq!(unsupported.literal(), None);
	assert!(parse.is_parse());
	assert_ne!(unsupported.to_string(), parse.to_string());
}

#[test]
fn capability_applies_at_first_exposing_pointer_level() {
	let named = Named("inner");
	let chain = Some(Box::new(&named));
	assert_eq!(text_of(&chain), "named:inner");

	let handle = Handle(Box::new(5));
	assert_eq!(text_of(&handle), "handle#5");
	assert_eq!(text_of(&&handle), "handle#5");
	assert_eq!(try_convert::<i32, _>(&&handle), Ok(5));
}

#[test]
fn error_values_convert_to_their_message() {
	struct Failed(std::io::Error);

	impl Source for Failed {
		fn shape(&self) -> Shape<'_> {
			Shape::Opaque(OpaqueKind::Struct)
		}

		fn as_error(&self) -> Option<&dyn std::error::Error> {
			Some(&self.0)
		}
	}

	let failed = Failed(std::io::Error::other("disk on fire"));
	assert_eq!(text_of(&Box::new(&failed)), "disk on fire");
	assert_eq!(try_convert::<i32, _>(&failed), Err(ConvertError::UnsupportedType));
}

#[test]
fn complex_values_are_truthy_when_any_part_is_non_zero() {
	struct Complex(f32, f32);

	impl Source for Complex {
		fn shape(&self) -> Shape<'_> {
			Shape::Complex64(self.0, self.1)
		}
	}

	assert_eq!(try_convert::<bool, _>(&Complex(0.0, 0.0)), Ok(false));
	assert_eq!(try_convert::<bool, _>(&Complex(0.0, -1.0)), Ok(true));
	assert_eq!(text_of(&Complex(0.5, 2.0)), "(0.5+2i)");
	assert_eq!(try_convert::<f64, _>(&Complex(1.0, 0.0)), Err(ConvertError::UnsupportedType));
}

#[derive(Debug, Default, PartialEq)]
struct Celsius(i16);

#[derive(Debug, Default, PartialEq)]
struct Name(String);

coerce::approximated!(Celsius(i16), Name(String));

#[test]
fn approximated_types_follow_their_representation() {
	assert_eq!(try_convert::<Celsius, _>("-40"), Ok(Celsius(-40)));
	assert_eq!(try_convert::<Celsius, _>("12.00"), Ok(Celsius(12)));
	assert_eq!(try_convert::<Celsius, _>(&70_000_i32), Ok(Celsius(4_464)));
	assert_eq!(try_convert::<Celsius, _>(&Some(Box::new(true))), Ok(Celsius(1)));
	assert_eq!(convert::<Celsius, _>("warm"), Celsius(0));

	assert_eq!(try_convert::<Name, _>(&true), Ok(Name("true".to_owned())));
	assert_eq!(try_convert::<Name, _>(&Named("x")), Ok(Name("named:x".to_owned())));
	assert_eq!(try_convert::<Name, _>(&vec![1_u64]), Err(ConvertError::UnsupportedType));
}

#[test]
fn approximated_types_convert_as_sources() {
	assert_eq!(try_convert::<i64, _>(&Celsius(-40)), Ok(-40));
	assert_eq!(try_convert::<u8, _>(&Celsius(300)), Ok(44));
	assert_eq!(try_convert::<String, _>(&Some(&Celsius(3))), Ok("3".to_owned()));
	assert_eq!(try_convert::<bool, _>(&Celsius(0)), Ok(false));
	assert_eq!(try_convert::<bool, _>(&Box::new(Celsius(-1))), Ok(true));

	assert_eq!(try_convert::<Celsius, _>(&Name("12.0".to_owned())), Ok(Celsius(12)));
	assert_eq!(try_convert::<Name, _>(&Celsius(21)), Ok(Name("21".to_owned())));
	assert!(matches!(try_convert::<f64, _>(&Name("warm".to_owned())), Err(ConvertError::ParseFloat { .. })));
}
