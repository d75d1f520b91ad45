//! Configuration for a batch script generation run.

pub mod columns;

use std::io;
use std::path::Path;
use std::path::PathBuf;

pub use columns::Columns;

/// The default directory containing the alignment files.
pub const DEFAULT_ALIGNMENT_DIRECTORY: &str = "bams/";

/// The default path of the output batch script.
pub const DEFAULT_OUTPUT: &str = "igvbatchscript.txt";

/// The default width of the snapshot window (in bases).
pub const DEFAULT_WINDOW_WIDTH: f64 = 150.0;

/// The default maximum panel height.
pub const DEFAULT_PANEL_HEIGHT: u64 = 10000;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No input table was provided to the [`Builder`].
    Input,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Input => write!(f, "input table"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// A required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// A directory could not be resolved to an absolute path.
    UnresolvablePath(io::Error, PathBuf),

    /// The window width is NaN or an infinity.
    NonFiniteWindowWidth(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::UnresolvablePath(err, path) => {
                write!(f, "unable to resolve `{}`: {err}", path.display())
            }
            Error::NonFiniteWindowWidth(width) => {
                write!(f, "invalid window width `{width}`: not a finite number")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Configuration
////////////////////////////////////////////////////////////////////////////////////////

/// A resolved, read-only configuration.
///
/// A [`Config`] cannot be instantiated directly. Use a [`Builder`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The input variant table.
    input: PathBuf,

    /// The absolute path to the directory containing the alignment files.
    alignment_directory: PathBuf,

    /// The absolute path to the directory IGV saves snapshots to.
    snapshot_directory: PathBuf,

    /// The path the batch script is written to.
    output: PathBuf,

    /// The width of the snapshot window (in bases).
    window_width: f64,

    /// The maximum panel height.
    panel_height: u64,

    /// The table columns to read.
    columns: Columns,
}

impl Config {
    /// Gets the input table path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Gets the absolute alignment directory.
    pub fn alignment_directory(&self) -> &Path {
        &self.alignment_directory
    }

    /// Gets the absolute snapshot directory.
    pub fn snapshot_directory(&self) -> &Path {
        &self.snapshot_directory
    }

    /// Gets the output script path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Gets the window width.
    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    /// Gets the maximum panel height.
    pub fn panel_height(&self) -> u64 {
        self.panel_height
    }

    /// Gets the table columns.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Builder
////////////////////////////////////////////////////////////////////////////////////////

/// A builder for a [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The input variant table.
    input: Option<PathBuf>,

    /// The alignment directory.
    alignment_directory: Option<PathBuf>,

    /// The snapshot directory.
    snapshot_directory: Option<PathBuf>,

    /// The output script path.
    output: Option<PathBuf>,

    /// The window width.
    window_width: Option<f64>,

    /// The maximum panel height.
    panel_height: Option<u64>,

    /// The table columns.
    columns: Option<Columns>,
}

impl Builder {
    /// Sets the input table.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the directory containing the alignment files.
    pub fn alignment_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.alignment_directory = Some(path.into());
        self
    }

    /// Sets the directory IGV saves snapshots to.
    pub fn snapshot_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_directory = Some(path.into());
        self
    }

    /// Sets the output script path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the window width (in bases).
    pub fn window_width(mut self, width: f64) -> Self {
        self.window_width = Some(width);
        self
    }

    /// Sets the maximum panel height.
    pub fn panel_height(mut self, height: u64) -> Self {
        self.panel_height = Some(height);
        self
    }

    /// Sets the table columns.
    pub fn columns(mut self, columns: Columns) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Consumes `self` to attempt to build a [`Config`].
    ///
    /// Unset fields take their defaults. The alignment and snapshot
    /// directories are made absolute against the current working directory.
    /// A window width that is NaN or an infinity is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::config::Builder;
    ///
    /// let config = Builder::default().input("variants.tsv").try_build()?;
    ///
    /// assert!(config.alignment_directory().is_absolute());
    /// assert!(config.alignment_directory().ends_with("bams"));
    /// assert_eq!(config.window_width(), 150.0);
    /// assert_eq!(config.panel_height(), 10000);
    /// assert_eq!(config.columns().to_string(), "chrom,start,ID");
    ///
    /// assert!(Builder::default().try_build().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Config> {
        let input = self.input.ok_or(Error::Missing(MissingError::Input))?;

        let window_width = self.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        if !window_width.is_finite() {
            return Err(Error::NonFiniteWindowWidth(window_width));
        }

        let alignment_directory = absolute(
            self.alignment_directory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ALIGNMENT_DIRECTORY)),
        )?;

        let snapshot_directory = match self.snapshot_directory {
            Some(path) => absolute(path)?,
            None => std::env::current_dir()
                .map_err(|err| Error::UnresolvablePath(err, PathBuf::from(".")))?,
        };

        Ok(Config {
            input,
            alignment_directory,
            snapshot_directory,
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            window_width,
            panel_height: self.panel_height.unwrap_or(DEFAULT_PANEL_HEIGHT),
            columns: self.columns.unwrap_or_default(),
        })
    }
}

/// Resolves a path against the current working directory.
fn absolute(path: PathBuf) -> Result<PathBuf> {
    std::path::absolute(&path).map_err(|err| Error::UnresolvablePath(err, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let err = Builder::default().try_build().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: input table");
    }

    #[test]
    fn test_non_finite_window_width() {
        for width in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Builder::default()
                .input("variants.tsv")
                .window_width(width)
                .try_build()
                .unwrap_err();

            assert!(matches!(err, Error::NonFiniteWindowWidth(_)));
        }

        let err = Builder::default()
            .input("variants.tsv")
            .window_width(f64::NAN)
            .try_build()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid window width `NaN`: not a finite number");
    }

    #[test]
    fn test_overrides() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = Builder::default()
            .input("variants.tsv")
            .alignment_directory("/data/bams")
            .snapshot_directory("/data/snapshots")
            .output("out.txt")
            .window_width(500.0)
            .panel_height(2000)
            .columns("CHROM,POS,SAMPLE".parse()?)
            .try_build()?;

        assert_eq!(config.input(), Path::new("variants.tsv"));
        assert_eq!(config.alignment_directory(), Path::new("/data/bams"));
        assert_eq!(config.snapshot_directory(), Path::new("/data/snapshots"));
        assert_eq!(config.output(), Path::new("out.txt"));
        assert_eq!(config.window_width(), 500.0);
        assert_eq!(config.panel_height(), 2000);
        assert_eq!(config.columns(), &Columns::new("CHROM", "POS", "SAMPLE"));
        Ok(())
    }

    #[test]
    fn test_relative_directories_are_resolved() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let cwd = std::env::current_dir()?;
        let config = Builder::default()
            .input("variants.tsv")
            .alignment_directory("alignments")
            .snapshot_directory("shots")
            .try_build()?;

        assert_eq!(config.alignment_directory(), cwd.join("alignments"));
        assert_eq!(config.snapshot_directory(), cwd.join("shots"));
        Ok(())
    }

    #[test]
    fn test_default_snapshot_directory_is_cwd() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let config = Builder::default().input("variants.tsv").try_build()?;
        assert_eq!(config.snapshot_directory(), std::env::current_dir()?);
        assert_eq!(config.output(), Path::new(DEFAULT_OUTPUT));
        Ok(())
    }
}
