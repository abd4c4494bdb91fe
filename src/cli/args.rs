//! Command-line argument definitions for tracetime
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::TransformOptions;
use crate::constants::{DEFAULT_DELIMITER, UTC_TIMESTAMP_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tracetime transformer
///
/// Augments GPS trace CSV data with IANA time zone identifiers and localised
/// timestamps, streaming the result to standard output or a file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tracetime",
    version,
    about = "Augment GPS trace CSV data with time zones and local timestamps",
    long_about = "Streams delimiter-separated trace data whose first three fields are a UTC \
                  timestamp, a latitude and a longitude, resolves each coordinate to its IANA \
                  time zone, and appends the zone identifier and the local wall-clock time to \
                  every row. Rows that cannot be resolved are passed through with two empty \
                  trailing fields so no input data is ever lost."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for tracetime
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Transform trace files, appending time zone and local time (main command)
    Transform(TransformArgs),
    /// Resolve a single coordinate pair to its time zone
    Locate(LocateArgs),
}

/// Arguments for the transform command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct TransformArgs {
    /// Input files or directories
    ///
    /// Directories are searched recursively for .csv files. When no input is
    /// given, lines are read from standard input.
    #[arg(value_name = "PATH", help = "Trace files or directories (stdin when omitted)")]
    pub inputs: Vec<PathBuf>,

    /// Output file for transformed rows
    ///
    /// If not specified, rows are written to standard output. Diagnostics and
    /// the run summary always go to standard error.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for transformed rows (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Field delimiter for input and output rows
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Field delimiter character"
    )]
    pub delimiter: char,

    /// Abort on the first row that cannot be transformed
    ///
    /// By default such rows are emitted with two empty trailing fields and
    /// processing continues.
    #[arg(long = "fail-fast", help = "Abort on the first row that cannot be transformed")]
    pub fail_fast: bool,

    /// Output format for the end-of-run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Format for the run summary on stderr"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only errors are logged and no summary is printed. Transformed rows are
    /// still written.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress diagnostics and summary",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the locate command (single coordinate resolution)
#[derive(Debug, Clone, Parser)]
pub struct LocateArgs {
    /// Latitude in decimal degrees (positive north)
    #[arg(value_name = "LAT", allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees (positive east)
    #[arg(value_name = "LON", allow_hyphen_values = true)]
    pub longitude: f64,

    /// UTC timestamp to convert to the resolved zone's local time
    #[arg(
        short = 't',
        long = "timestamp",
        value_name = "DATETIME",
        help = "UTC timestamp (YYYY-MM-DD HH:MM:SS) to localise"
    )]
    pub timestamp: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the run summary
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON summary for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl TransformArgs {
    /// Validate the transform command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::file_not_found(input.display().to_string()));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        // Delimiter rules live with the pipeline options
        self.to_options().validate()
    }

    /// Build pipeline options from these arguments
    pub fn to_options(&self) -> TransformOptions {
        TransformOptions {
            delimiter: self.delimiter,
            fail_fast: self.fail_fast,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the run summary should be printed (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

impl LocateArgs {
    /// Validate the locate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::configuration(format!(
                "Latitude must be within [-90, 90], got {}",
                self.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::configuration(format!(
                "Longitude must be within [-180, 180], got {}",
                self.longitude
            )));
        }

        if let Some(timestamp) = &self.timestamp {
            NaiveDateTime::parse_from_str(timestamp.trim(), UTC_TIMESTAMP_FORMAT).map_err(
                |_| {
                    Error::configuration(format!(
                        "Timestamp '{}' does not match YYYY-MM-DD HH:MM:SS",
                        timestamp
                    ))
                },
            )?;
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
