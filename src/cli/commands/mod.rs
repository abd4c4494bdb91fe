//! Command implementations for the tracetime CLI
//!
//! Each command is implemented in its own module. Stream lifecycle lives
//! here: commands open input and output handles, hand them to the transform
//! pipeline, and flush and close them on every exit path.

pub mod locate;
pub mod shared;
pub mod transform;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for tracetime
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `transform`: the streaming trace transformation workflow
/// - `locate`: one-off coordinate to time zone resolution
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Transform(transform_args) => transform::run_transform(transform_args),
        Commands::Locate(locate_args) => locate::run_locate(locate_args),
    }
}
