use coerce::convert::{Num, Shape, Source};

use crate::cmd::{CliError, Result};

/// How the raw `INPUT` argument is interpreted before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputKind {
	/// Keep the argument as text.
	#[default]
	Text,
	/// Parse as a boolean literal.
	Bool,
	/// Parse as a signed 64-bit integer.
	Int,
	/// Parse as an unsigned 64-bit integer.
	Uint,
	/// Parse as a 64-bit float.
	Float,
	/// Use the argument's UTF-8 bytes.
	Bytes,
	/// Ignore the argument and pass a missing value.
	Nil,
}

impl InputKind {
	/// Return the CLI spelling of this kind.
	pub fn name(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
			Self::Bytes => "bytes",
			Self::Nil => "nil",
		}
	}
}

/// Base value built from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliInput {
	Nil,
	Text(String),
	Bool(bool),
	Int(i64),
	Uint(u64),
	Float(f64),
	Bytes(Vec<u8>),
}

impl Source for CliInput {
	fn shape(&self) -> Shape<'_> {
		match self {
			Self::Nil => Shape::Nil,
			Self::Text(text) => Shape::Str(text),
			Self::Bool(value) => Shape::Bool(*value),
			Self::Int(value) => Shape::Num(Num::I64(*value)),
			Self::Uint(value) => Shape::Num(Num::U64(*value)),
			Self::Float(value) => Shape::Num(Num::F64(*value)),
			Self::Bytes(bytes) => Shape::Bytes(bytes),
		}
	}
}

/// Input wrapped in zero or more pointer layers.
#[derive(Debug)]
pub enum Layer {
	Base(CliInput),
	Ptr(Box<Layer>),
}

impl Layer {
	/// Wrap `base` in `depth` pointer layers.
	pub fn wrap(base: CliInput, depth: usize) -> Self {
		(0..depth).fold(Self::Base(base), |inner, _| Self::Ptr(Box::new(inner)))
	}
}

impl Drop for Layer {
	fn drop(&mut self) {
		let Self::Ptr(inner) = self else {
			return;
		};
		let mut next = std::mem::replace(&mut **inner, Self::Base(CliInput::Nil));
		while let Self::Ptr(inner) = &mut next {
			let deeper = std::mem::replace(&mut **inner, Self::Base(CliInput::Nil));
			next = deeper;
		}
	}
}

impl Source for Layer {
	fn shape(&self) -> Shape<'_> {
		match self {
			Self::Base(base) => base.shape(),
			Self::Ptr(inner) => Shape::Ptr(Some(&**inner)),
		}
	}
}

/// Interpret a raw argument according to `kind`.
pub fn parse_input(kind: InputKind, raw: Option<&str>) -> Result<CliInput> {
	if kind == InputKind::Nil {
		return Ok(CliInput::Nil);
	}

	let raw = raw.ok_or(CliError::MissingInput { kind: kind.name() })?;
	let invalid = || CliError::InvalidInput {
		kind: kind.name(),
		value: raw.to_owned(),
	};

	Ok(match kind {
		InputKind::Text => CliInput::Text(raw.to_owned()),
		InputKind::Bool => CliInput::Bool(raw.parse().map_err(|_| invalid())?),
		InputKind::Int => CliInput::Int(raw.parse().map_err(|_| invalid())?),
		InputKind::Uint => CliInput::Uint(raw.parse().map_err(|_| invalid())?),
		InputKind::Float => CliInput::Float(raw.parse().map_err(|_| invalid())?),
		InputKind::Bytes => CliInput::Bytes(raw.as_bytes().to_vec()),
		InputKind::Nil => CliInput::Nil,
	})
}
