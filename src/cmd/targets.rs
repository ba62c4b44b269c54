use crate::cmd::Result;
use crate::cmd::util::{TargetName, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print every supported target with its family and width.
pub fn run(args: Args) -> Result<()> {
	let rows: Vec<TargetJson> = TargetName::ALL
		.into_iter()
		.map(|target| {
			let (family, bits) = target.describe();
			TargetJson {
				name: target.name(),
				family: family.map_or("none", |item| item.name()),
				bits,
			}
		})
		.collect();

	if args.json {
		return emit_json(&rows);
	}

	for row in &rows {
		let bits = row.bits.map_or_else(|| "-".to_owned(), |bits| bits.to_string());
		println!("{:<8} {:<6} {bits}", row.name, row.family);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct TargetJson {
	name: &'static str,
	family: &'static str,
	bits: Option<usize>,
}
