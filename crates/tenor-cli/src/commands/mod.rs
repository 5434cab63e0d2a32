//! CLI command implementations.

pub mod bootstrap;
pub mod oas;
pub mod price;
pub mod yields;

pub use bootstrap::BootstrapArgs;
pub use oas::OasArgs;
pub use price::PriceArgs;
pub use yields::YieldArgs;

use std::path::PathBuf;

use clap::Args;

use crate::error::CliResult;
use crate::input::InputFile;

/// Input file shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to a .json or .toml file with config, optional curve and instruments
    #[arg(short, long, env = "TENOR_INPUT")]
    pub input: PathBuf,
}

impl InputArgs {
    /// Loads and validates the input file.
    pub fn load(&self) -> CliResult<InputFile> {
        InputFile::load(&self.input)
    }
}
