use coerce::convert::{ConvertError, Source};

use crate::cmd::input::{InputKind, Layer, parse_input};
use crate::cmd::util::{TargetName, emit_json};
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Target kind.
	#[arg(value_enum)]
	pub target: TargetName,
	/// Raw input value; omitted for `--from nil`.
	#[arg(allow_hyphen_values = true)]
	pub input: Option<String>,
	/// How to interpret the input before converting it.
	#[arg(long, value_enum, default_value_t = InputKind::Text)]
	pub from: InputKind,
	/// Number of pointer layers wrapped around the input.
	#[arg(long, default_value_t = 0)]
	pub depth: usize,
	#[arg(long)]
	pub json: bool,
}

/// Convert one command-line value and print the result.
///
/// With `--json` a report is printed even when conversion fails; otherwise a
/// failure is returned as an error.
pub fn run(args: Args) -> Result<()> {
	let Args {
		target,
		input,
		from,
		depth,
		json,
	} = args;

	let base = parse_input(from, input.as_deref())?;
	let value = Layer::wrap(base, depth);
	tracing::debug!(target_kind = target.name(), from = from.name(), depth, "converting input");

	let (rendered, error) = target.render(&value as &dyn Source);

	if json {
		return emit_json(&ConvertJson {
			target: target.name(),
			from: from.name(),
			depth,
			value: rendered,
			error: error.as_ref().map(ToString::to_string),
			error_kind: error.as_ref().map(error_kind),
		});
	}

	if let Some(error) = error {
		return Err(CliError::Convert(error));
	}
	println!("{rendered}");
	Ok(())
}

fn error_kind(error: &ConvertError) -> &'static str {
	if error.is_unsupported() { "unsupported_type" } else { "parse" }
}

#[derive(serde::Serialize)]
struct ConvertJson {
	target: &'static str,
	from: &'static str,
	depth: usize,
	value: String,
	error: Option<String>,
	error_kind: Option<&'static str>,
}
