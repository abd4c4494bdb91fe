//! Transform command implementation
//!
//! Owns stream lifecycle for the transform pipeline: opens the output sink
//! and each input source, runs the transformer over them in order, and
//! flushes the sink on completion. Input files are processed sequentially;
//! row order within each stream is preserved.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::shared::{RunReport, create_progress_bar, expand_inputs, print_summary, setup_logging};
use crate::app::services::timezone_lookup::TzfTimezoneLookup;
use crate::app::services::transformer::{RowTransformer, TransformStats};
use crate::cli::args::TransformArgs;
use crate::{Error, Result};

/// Transform command runner
///
/// 1. Validate arguments and set up logging
/// 2. Build the timezone lookup (decodes the embedded boundary index)
/// 3. Stream every input through the transformer into the sink
/// 4. Report merged statistics
pub fn run_transform(args: TransformArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let options = args.to_options();

    info!("Loading timezone boundary index");
    let lookup = TzfTimezoneLookup::new();
    let transformer = RowTransformer::with_options(&lookup, options);

    let mut writer = open_output(args.output.as_deref())?;

    let (stats, files_processed) = if args.inputs.is_empty() {
        debug!("No inputs given, reading from stdin");
        let stdin = io::stdin();
        let stats = transformer.transform(stdin.lock(), &mut writer)?;
        (stats, 0)
    } else {
        let files = expand_inputs(&args.inputs)?;
        if files.is_empty() {
            return Err(Error::configuration(
                "No trace files found in the given inputs".to_string(),
            ));
        }
        let stats = transform_files(&transformer, &files, &mut writer, args.show_summary())?;
        (stats, files.len())
    };

    // The sink is closed here, on every exit path; flush surfaces any
    // buffered write failure instead of losing rows silently.
    writer.flush().map_err(Error::output_write)?;

    if args.show_summary() {
        let report = RunReport {
            files_processed,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            stats,
        };
        print_summary(&report, &args.output_format);
    }

    Ok(())
}

/// Run the transformer over each file in order, merging statistics
fn transform_files<W: Write>(
    transformer: &RowTransformer<&TzfTimezoneLookup>,
    files: &[std::path::PathBuf],
    writer: &mut W,
    show_progress: bool,
) -> Result<TransformStats> {
    let progress = if show_progress && files.len() > 1 {
        Some(create_progress_bar(
            files.len() as u64,
            "transforming trace files",
        ))
    } else {
        None
    };

    let mut total = TransformStats::new();
    for file in files {
        info!("Transforming {}", file.display());
        let reader = open_input(file)?;
        let stats = transformer.transform(reader, writer)?;
        debug!("{}: {}", file.display(), stats.summary());
        total.merge(&stats);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(total)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open '{}'", path.display()), e))?;
    Ok(BufReader::new(file))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("failed to create '{}'", path.display()), e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
