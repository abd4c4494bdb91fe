use clap::Parser;
use std::process;
use tracetime::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(tracetime::Error::ZoneNotFound {
            latitude,
            longitude,
        }) => {
            // Expected outcome for uncovered coordinates, distinct exit code
            eprintln!("No time zone found for ({}, {})", latitude, longitude);
            process::exit(2);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Tracetime - GPS Trace Time Zone Augmenter");
    println!("=========================================");
    println!();
    println!("Augment GPS trace CSV data with IANA time zone identifiers and");
    println!("localised timestamps, streaming the result to stdout or a file.");
    println!();
    println!("USAGE:");
    println!("    tracetime <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    transform   Transform trace files, appending zone and local time (main command)");
    println!("    locate      Resolve a single coordinate pair to its time zone");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Transform a trace file to stdout:");
    println!("    tracetime transform trace.csv");
    println!();
    println!("    # Transform every .csv under a directory into one output file:");
    println!("    tracetime transform traces/ --output localised.csv");
    println!();
    println!("    # Stream from stdin, semicolon-delimited:");
    println!("    cat trace.csv | tracetime transform --delimiter ';'");
    println!();
    println!("    # Spot-check a coordinate:");
    println!("    tracetime locate -- -44.490947 171.220966 --timestamp \"2013-07-10 02:52:49\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tracetime <COMMAND> --help");
}
