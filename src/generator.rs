//! Generating a batch script from a variant table.

use std::io;
use std::io::BufRead;
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::matcher;
use crate::matcher::Matcher;
use crate::script::Script;
use crate::table;
use crate::window;
use crate::window::Window;

/// An error related to generating a batch script.
#[derive(Debug)]
pub enum Error {
    /// The input table could not be opened.
    OpenTable(io::Error, PathBuf),

    /// An error reading the input table.
    Table(table::Error),

    /// An error listing the alignment files.
    Matcher(matcher::Error),

    /// An error computing the window around a variant.
    Window(window::Error),

    /// The batch script could not be written.
    WriteScript(io::Error, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OpenTable(err, path) => {
                write!(f, "unable to open table `{}`: {err}", path.display())
            }
            Error::Table(err) => write!(f, "table error: {err}"),
            Error::Matcher(err) => write!(f, "matcher error: {err}"),
            Error::Window(err) => write!(f, "window error: {err}"),
            Error::WriteScript(err, path) => {
                write!(f, "unable to write script `{}`: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Counts describing a generation run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// The number of records read from the table.
    records: usize,

    /// The number of records a snapshot block was emitted for.
    snapshots: usize,

    /// The number of alignment file loads emitted.
    loads: usize,
}

impl Summary {
    /// Gets the number of records read.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Gets the number of snapshot blocks emitted.
    pub fn snapshots(&self) -> usize {
        self.snapshots
    }

    /// Gets the number of records skipped for lack of matching files.
    pub fn skipped(&self) -> usize {
        self.records - self.snapshots
    }

    /// Gets the number of alignment file loads emitted.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

/// Generates the batch script described by a [`Config`] and writes it to the
/// configured output path.
///
/// The output is only written once every record has been processed, so a
/// failure leaves any existing file at the output path untouched.
pub fn run(config: &Config) -> Result<Summary> {
    let (script, summary) = generate(config)?;

    script
        .write_to(config.output())
        .map_err(|err| Error::WriteScript(err, config.output().to_path_buf()))?;

    Ok(summary)
}

/// Generates the batch script described by a [`Config`] without writing it.
pub fn generate(config: &Config) -> Result<(Script, Summary)> {
    let reader = table::Reader::open(config.input())
        .map_err(|err| Error::OpenTable(err, config.input().to_path_buf()))?;

    generate_from(config, reader, || {
        Matcher::from_directory(config.alignment_directory())
    })
}

/// Generates a batch script from an already-opened table.
///
/// The header is validated against the configured columns before the
/// matcher is created, so a missing column is reported before the alignment
/// directory is ever touched.
pub fn generate_from<T, F>(
    config: &Config,
    mut reader: table::Reader<T>,
    build_matcher: F,
) -> Result<(Script, Summary)>
where
    T: BufRead,
    F: FnOnce() -> std::result::Result<Matcher, matcher::Error>,
{
    let indices = reader
        .read_header()
        .map_err(Error::Table)?
        .resolve(config.columns())
        .map_err(|err| Error::Table(table::Error::Header(err)))?;

    let matcher = build_matcher().map_err(Error::Matcher)?;

    let mut script = Script::default();
    let mut summary = Summary::default();

    for result in reader.records(indices) {
        let record = result.map_err(Error::Table)?;
        summary.records += 1;

        let paths = match matcher.matches(record.identifiers()) {
            Some(paths) => paths,
            None => {
                debug!(
                    "no alignment files matched for {}:{} ({}); skipping",
                    record.chromosome(),
                    record.position(),
                    record
                        .identifiers()
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(",")
                );
                continue;
            }
        };

        let window =
            Window::try_around(record.position(), config.window_width()).map_err(Error::Window)?;

        summary.snapshots += 1;
        summary.loads += paths.len();
        script.push_snapshot(config, &record, &paths, window);
    }

    Ok((script, summary))
}
