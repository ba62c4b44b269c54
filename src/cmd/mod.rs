/// Single-value conversion command.
pub mod convert;
/// CLI error type.
pub mod error;
/// Input interpretation and pointer layering.
pub mod input;
/// Target listing command.
pub mod targets;
/// Shared target table and output helpers.
pub mod util;

pub use error::{CliError, Result};
