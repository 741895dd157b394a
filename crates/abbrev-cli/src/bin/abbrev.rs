// abbrev: Generate unique three-letter abbreviations for a file of names.
//
// Reads one name per line, scores every candidate abbreviation against the
// letter value table, drops abbreviations shared between names, and writes
// each name followed by its best abbreviation(s).
//
// Usage:
//   abbrev [OPTIONS] [NAMES_FILE]
//
// If NAMES_FILE is omitted the tool asks for it on stdin (".txt" is added).

use std::path::PathBuf;

use abbrev_cli::OutputFormat;
use abbrev_names::{Abbreviator, AbbreviatorOptions, FailurePolicy};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "abbrev", version, about = "Unique three-letter abbreviations for names")]
struct Args {
    /// Names file, one name per line. Prompted for when omitted.
    names: Option<PathBuf>,

    /// Letter value file (default: search ABBREV_VALUES_PATH, the names
    /// file's directory, then the current directory for values.txt)
    #[arg(short = 't', long = "values", value_name = "PATH")]
    values: Option<PathBuf>,

    /// Output file (default: <PREFIX>_<names stem>_abbrevs.<ext> next to the names file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Prefix for the default output file name
    #[arg(long, default_value = "abbrev")]
    prefix: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Process names on all CPU cores
    #[arg(long)]
    parallel: bool,

    /// Give names with unscorable letters no abbreviation instead of aborting
    #[arg(long)]
    skip_unscorable: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    abbrev_cli::init_logging(args.verbose);

    let names_path = match args.names {
        Some(path) => path,
        None => abbrev_cli::prompt_for_names_path()
            .unwrap_or_else(|e| abbrev_cli::fatal(&format!("error reading stdin: {e}"))),
    };

    let table = abbrev_cli::locate_table(args.values.as_deref(), Some(&names_path))
        .unwrap_or_else(|e| abbrev_cli::fatal(&e.to_string()));

    let options = AbbreviatorOptions {
        failure_policy: if args.skip_unscorable {
            FailurePolicy::SkipName
        } else {
            FailurePolicy::Abort
        },
        parallel: args.parallel,
    };
    let abbreviator = Abbreviator::with_options(table, options);
    let results = abbrev_cli::abbreviate_file(&abbreviator, &names_path)
        .unwrap_or_else(|e| abbrev_cli::fatal(&e.to_string()));

    let output = args.output.unwrap_or_else(|| {
        abbrev_cli::default_output_path(&names_path, &args.prefix, args.format)
    });
    abbrev_cli::write_results_file(&output, &results, args.format)
        .unwrap_or_else(|e| abbrev_cli::fatal(&e.to_string()));

    tracing::info!(
        names = results.len(),
        without_abbreviation = results.iter().filter(|r| r.abbreviations.is_empty()).count(),
        output = %output.display(),
        "wrote abbreviations"
    );
}
