// abbrev-cli: shared utilities for CLI tools.
//
// Everything that touches the filesystem or the terminal lives here; the
// abbreviation pipeline itself never does I/O.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use abbrev_core::{AbbrevError, LetterValueTable, TableError};
use abbrev_names::{Abbreviator, NameResult};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Default letter value file name.
pub const VALUES_FILE: &str = "values.txt";

/// Environment variable pointing at the letter value file or its directory.
pub const VALUES_ENV: &str = "ABBREV_VALUES_PATH";

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid letter value file {}: {source}", .path.display())]
    Table { path: PathBuf, source: TableError },

    #[error("could not find {} in any of the search paths:\n{searched}", VALUES_FILE)]
    ValuesNotFound { searched: String },

    #[error(transparent)]
    Abbrev(#[from] AbbrevError),

    #[error("failed to encode results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Letter value table
// ---------------------------------------------------------------------------

/// Build the list of candidate letter value files, in search order.
///
/// 1. `explicit` argument (if provided)
/// 2. `ABBREV_VALUES_PATH` (a file, or a directory containing `values.txt`)
/// 3. `values.txt` next to the names file (if provided)
/// 4. `values.txt` in the current working directory
pub fn build_search_paths(explicit: Option<&Path>, names_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(VALUES_ENV) {
        let env_path = PathBuf::from(env_path);
        paths.push(env_path.join(VALUES_FILE));
        paths.push(env_path);
    }

    if let Some(dir) = names_path.and_then(Path::parent) {
        paths.push(dir.join(VALUES_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(VALUES_FILE));
    }

    paths
}

/// Find the first existing letter value file among the search paths.
pub fn find_values_file(
    explicit: Option<&Path>,
    names_path: Option<&Path>,
) -> Result<PathBuf, CliError> {
    let search_paths = build_search_paths(explicit, names_path);
    if let Some(found) = search_paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    Err(CliError::ValuesNotFound {
        searched: search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Read and parse a letter value file.
pub fn load_table(path: &Path) -> Result<LetterValueTable, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    LetterValueTable::parse(&text).map_err(|source| CliError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate and load the letter value table, warning about uncovered letters.
pub fn locate_table(
    explicit: Option<&Path>,
    names_path: Option<&Path>,
) -> Result<LetterValueTable, CliError> {
    let path = find_values_file(explicit, names_path)?;
    let table = load_table(&path)?;
    tracing::info!(path = %path.display(), letters = table.len(), "loaded letter values");

    let missing = table.missing_letters();
    if !missing.is_empty() {
        let missing: String = missing.into_iter().collect();
        tracing::warn!(path = %path.display(), "no values for letters {missing}");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Split names text into one raw name per line.
///
/// Line terminators are stripped and nothing else; blank lines are kept as
/// (empty) names.
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read a names file.
pub fn read_names(path: &Path) -> Result<Vec<String>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_names(&text))
}

/// Read a names file and run the whole pipeline over it.
pub fn abbreviate_file(
    abbreviator: &Abbreviator,
    names_path: &Path,
) -> Result<Vec<NameResult>, CliError> {
    let names = read_names(names_path)?;
    tracing::info!(path = %names_path.display(), names = names.len(), "read names");
    Ok(abbreviator.abbreviate_all(&names)?)
}

/// Ask for the names file on stdin. `.txt` is appended to the answer.
pub fn prompt_for_names_path() -> io::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Please enter the name of your file: ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(PathBuf::from(format!("{}.txt", answer.trim())))
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Output encoding for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Name line followed by a line of space-separated abbreviations.
    #[default]
    Text,
    /// JSON array of `{ "name", "abbreviations" }` records.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    abbreviations: Vec<String>,
}

/// Write results in the two-lines-per-name text format.
pub fn write_text<W: Write>(out: &mut W, results: &[NameResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", result.name)?;
        let line = result
            .abbreviations
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write results as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, results: &[NameResult]) -> Result<(), serde_json::Error> {
    let records: Vec<JsonRecord<'_>> = results
        .iter()
        .map(|r| JsonRecord {
            name: &r.name,
            abbreviations: r.abbreviations.iter().map(|a| a.to_string()).collect(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Write results to `out` in the given format. `path` names the destination
/// in errors.
///
/// I/O failures become [`CliError::Write`] in both formats; only a JSON
/// encoding failure is reported as [`CliError::Json`].
pub fn write_results<W: Write>(
    out: &mut W,
    path: &Path,
    results: &[NameResult],
    format: OutputFormat,
) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    match format {
        OutputFormat::Text => write_text(out, results).map_err(write_err),
        OutputFormat::Json => write_json(out, results).map_err(|e| {
            if e.is_io() {
                write_err(io::Error::from(e))
            } else {
                CliError::Json(e)
            }
        }),
    }
}

/// Write results to the file at `path` in the given format.
pub fn write_results_file(
    path: &Path,
    results: &[NameResult],
    format: OutputFormat,
) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(write_err)?;
    let mut out = io::BufWriter::new(file);
    write_results(&mut out, path, results, format)?;
    out.flush().map_err(write_err)
}

/// Default output path: `<prefix>_<stem>_abbrevs.<ext>` next to the names file.
pub fn default_output_path(names_path: &Path, prefix: &str, format: OutputFormat) -> PathBuf {
    let stem = names_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "names".to_string());
    let file_name = format!("{prefix}_{stem}_abbrevs.{}", format.extension());
    match names_path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

// ---------------------------------------------------------------------------
// Process helpers
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the number of `-v`
/// flags, starting at `warn`.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
