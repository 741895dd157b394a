// abbrev-explain: Show how names are normalized and scored.
//
// For each name prints the normalized form, the score of every letter, and
// the name's own cheapest candidates before any cross-name deduplication.
//
// Usage:
//   abbrev-explain [OPTIONS] [NAME...]
//
// If no NAME arguments are given, reads names from stdin (one per line).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use abbrev_core::{Abbreviation, Score};
use abbrev_names::{Abbreviator, Explanation};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "abbrev-explain",
    version,
    about = "Explain the scoring of name abbreviations"
)]
struct Args {
    /// Names to explain. Reads stdin when none are given.
    names: Vec<String>,

    /// Letter value file
    #[arg(short = 't', long = "values", value_name = "PATH")]
    values: Option<PathBuf>,

    /// Number of candidates to show per name
    #[arg(short = 'n', long, default_value_t = 5)]
    top: usize,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn print_explanation<W: Write>(
    out: &mut W,
    raw: &str,
    explanation: &Explanation,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "{raw}")?;
    writeln!(out, "  normalized: {}", explanation.normalized)?;

    let letters = explanation
        .normalized
        .as_chars()
        .iter()
        .zip(explanation.scores.as_slice())
        .map(|(c, s)| format!("{c}={s}"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "  scores:     {letters}")?;

    let mut ranked: Vec<(Abbreviation, Score)> = explanation.candidates.iter().collect();
    ranked.sort_by_key(|&(abbreviation, score)| (score, abbreviation));
    let shown = ranked
        .iter()
        .take(top)
        .map(|(abbreviation, score)| format!("{abbreviation}({score})"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "  candidates: {} total; best: {}",
        ranked.len(),
        if shown.is_empty() { "-" } else { shown.as_str() }
    )
}

/// Explain each name in turn. Unscorable names are reported on stderr and
/// skipped; the first read or write error stops the run.
fn explain_names<W, I>(
    abbreviator: &Abbreviator,
    names: I,
    out: &mut W,
    top: usize,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    for name in names {
        let name = match name {
            Ok(name) => name,
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        };
        match abbreviator.explain(&name) {
            Ok(explanation) => print_explanation(out, &name, &explanation, top)?,
            Err(e) => eprintln!("error: {e}"),
        }
    }
    out.flush()
}

fn main() {
    let args = Args::parse();
    abbrev_cli::init_logging(args.verbose);

    let table = abbrev_cli::locate_table(args.values.as_deref(), None)
        .unwrap_or_else(|e| abbrev_cli::fatal(&e.to_string()));
    let abbreviator = Abbreviator::new(table);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let outcome = if args.names.is_empty() {
        explain_names(&abbreviator, io::stdin().lock().lines(), &mut out, args.top)
    } else {
        let names = args.names.iter().cloned().map(Ok::<_, io::Error>);
        explain_names(&abbreviator, names, &mut out, args.top)
    };
    if let Err(e) = outcome {
        abbrev_cli::fatal(&e.to_string());
    }
}
