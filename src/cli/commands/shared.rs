//! Shared components for CLI commands
//!
//! Logging setup, input discovery and run reporting used across the command
//! implementations.

use crate::app::services::transformer::TransformStats;
use crate::cli::args::OutputFormat;
use crate::constants::TRACE_FILE_EXTENSION;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Run-level report combining stream statistics with file and timing data
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of input files processed (0 when reading stdin)
    pub files_processed: usize,
    /// Wall-clock processing time in seconds
    pub elapsed_seconds: f64,
    /// Merged stream statistics
    #[serde(flatten)]
    pub stats: TransformStats,
}

/// Set up structured logging to stderr
///
/// Stdout is the data sink, so all diagnostics go to stderr. The filter
/// honours `RUST_LOG` when set and falls back to the level derived from the
/// verbosity flags.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tracetime={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Expand input arguments to the list of trace files to process
///
/// Plain files are taken as given, in argument order. Directories are walked
/// recursively for `.csv` files, each directory's findings sorted for a
/// deterministic processing order.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(discover_trace_files(input)?);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(Error::file_not_found(input.display().to_string()));
        }
    }

    Ok(files)
}

/// Discover trace files under a directory
fn discover_trace_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut trace_files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(
                format!("Failed to walk directory '{}'", dir.display()),
                e,
            )
        })?;

        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(TRACE_FILE_EXTENSION)
        {
            trace_files.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    trace_files.sort();

    debug!(
        "Discovered {} trace files in {}",
        trace_files.len(),
        dir.display()
    );

    Ok(trace_files)
}

/// Create a progress bar over the input file list
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the end-of-run summary to stderr
pub fn print_summary(report: &RunReport, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(report)
                    .expect("report serialization cannot fail")
            );
        }
        OutputFormat::Human => {
            let stats = &report.stats;
            eprintln!();
            eprintln!("{}", "Transform complete".green().bold());
            eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            if report.files_processed > 0 {
                eprintln!("   Files processed: {}", report.files_processed);
            }
            eprintln!("   Lines read: {}", stats.lines_read);
            eprintln!("   Rows transformed: {}", stats.rows_transformed);
            if stats.blank_lines > 0 {
                eprintln!("   Blank lines skipped: {}", stats.blank_lines);
            }
            if stats.rows_degraded > 0 {
                eprintln!(
                    "   {}",
                    format!("Rows degraded: {}", stats.rows_degraded).yellow()
                );
                if stats.short_rows > 0 {
                    eprintln!("     - short rows: {}", stats.short_rows);
                }
                if stats.timestamp_failures > 0 {
                    eprintln!("     - bad timestamps: {}", stats.timestamp_failures);
                }
                if stats.coordinate_failures > 0 {
                    eprintln!("     - bad coordinates: {}", stats.coordinate_failures);
                }
                if stats.zones_not_found > 0 {
                    eprintln!("     - no zone match: {}", stats.zones_not_found);
                }
                if stats.unknown_zones > 0 {
                    eprintln!("     - unknown zone ids: {}", stats.unknown_zones);
                }
            }
            eprintln!("   Processing time: {:.2}s", report.elapsed_seconds);
            eprintln!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_inputs_plain_files_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.csv");
        let a = temp_dir.path().join("a.csv");
        std::fs::write(&b, "").unwrap();
        std::fs::write(&a, "").unwrap();

        let files = expand_inputs(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_expand_inputs_directory_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(temp_dir.path().join("b.csv"), "").unwrap();
        std::fs::write(nested.join("a.csv"), "").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let files = expand_inputs(&[temp_dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "csv"));
        // Sorted within the directory
        assert!(files[0] < files[1]);
    }

    #[test]
    fn test_expand_inputs_missing_path() {
        let result = expand_inputs(&[PathBuf::from("/nonexistent/trace.csv")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_report_serializes_flat() {
        let report = RunReport {
            files_processed: 2,
            elapsed_seconds: 0.5,
            stats: TransformStats::new(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files_processed"], 2);
        // Stats fields are flattened to the top level
        assert_eq!(json["rows_transformed"], 0);
    }
}
