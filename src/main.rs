use clap::Parser;
use std::process;
use stepfile_indexer::cli::{args::Args, commands};

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
            // Success - results have already been reported by the command
            process::exit(0);
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
    println!("Stepfile Indexer - StepMania Song Pack Cataloger");
    println!("================================================");
    println!();
    println!("Parse StepMania .sm chart files from song pack directories and write");
    println!("per-pack JSON catalog documents for a downstream song browser.");
    println!();
    println!("USAGE:");
    println!("    stepfile-indexer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    index       Index a whole Songs directory into per-pack JSON documents");
    println!("    pack        Parse and report a single pack directory");
    println!("    combine     Merge per-pack JSON documents into the combined catalog");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Index a Songs directory, writing jsons/ inside it:");
    println!("    stepfile-indexer index /path/to/Songs");
    println!();
    println!("    # Index with the combined catalog document:");
    println!("    stepfile-indexer index /path/to/Songs --combined");
    println!();
    println!("    # Report a single pack:");
    println!("    stepfile-indexer pack \"/path/to/Songs/My Pack\" --format json");
    println!();
    println!("    # Merge existing per-pack documents:");
    println!("    stepfile-indexer combine /path/to/Songs/jsons");
    println!();
    println!("For detailed help on any command, use:");
    println!("    stepfile-indexer <COMMAND> --help");
}
