//! Matching identifiers to alignment files by name.

use std::io;
use std::path::PathBuf;

use nonempty::NonEmpty;
use tracing::debug;
use tracing::warn;

/// The extension an alignment file must end with.
pub const EXTENSION: &str = ".bam";

/// An error related to a [`Matcher`].
#[derive(Debug)]
pub enum Error {
    /// The alignment directory could not be listed.
    ListDirectory(io::Error, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ListDirectory(err, path) => {
                write!(f, "unable to list `{}`: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Finds the alignment files belonging to a set of identifiers.
///
/// The alignment directory is listed once when the matcher is created. Each
/// lookup then scans the cached filenames, so matching behaves exactly as if
/// the directory were listed again for every identifier.
#[derive(Clone, Debug)]
pub struct Matcher {
    /// The directory the filenames were listed from.
    directory: PathBuf,

    /// The sorted alignment filenames within the directory.
    filenames: Vec<String>,
}

impl Matcher {
    /// Lists the alignment files within a directory.
    ///
    /// Only files (following symlinks) with UTF-8 names ending in
    /// [`EXTENSION`] are kept.
    pub fn from_directory(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        let list_error = |err| Error::ListDirectory(err, directory.clone());

        let mut filenames = Vec::new();

        for entry in std::fs::read_dir(&directory).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;

            let filename = match entry.file_name().into_string() {
                Ok(filename) => filename,
                Err(filename) => {
                    warn!("skipping non-UTF-8 filename: {}", filename.to_string_lossy());
                    continue;
                }
            };

            if filename.ends_with(EXTENSION) && entry.path().is_file() {
                filenames.push(filename);
            }
        }

        debug!(
            "found {} alignment file(s) in `{}`",
            filenames.len(),
            directory.display()
        );

        Ok(Self::from_filenames(directory, filenames))
    }

    /// Creates a matcher from an already-known set of filenames.
    ///
    /// Filenames without the [`EXTENSION`] suffix are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::matcher::Matcher;
    ///
    /// let matcher = Matcher::from_filenames("/data", ["b.bam", "a.bam", "a.bam.bai"]);
    /// assert_eq!(matcher.filenames(), ["a.bam", "b.bam"]);
    /// ```
    pub fn from_filenames<I, S>(directory: impl Into<PathBuf>, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filenames = filenames
            .into_iter()
            .map(Into::into)
            .filter(|filename: &String| filename.ends_with(EXTENSION))
            .collect::<Vec<_>>();

        filenames.sort();

        Self {
            directory: directory.into(),
            filenames,
        }
    }

    /// Gets the alignment filenames.
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Finds the alignment files for a set of identifiers.
    ///
    /// For each identifier (in order), every filename containing that
    /// identifier anywhere in its name is returned. The match is
    /// case-sensitive and unanchored. Results are concatenated across
    /// identifiers without de-duplication. An empty identifier is contained in
    /// every filename and so matches every alignment file. [`None`] is
    /// returned when nothing matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use igvbatch::matcher::Matcher;
    /// use nonempty::nonempty;
    ///
    /// let matcher = Matcher::from_filenames("/data", ["sampleA_BS001.bam", "sampleB_BS002.bam"]);
    ///
    /// let paths = matcher.matches(&nonempty![String::from("BS002")]).unwrap();
    /// assert_eq!(paths.head, PathBuf::from("/data/sampleB_BS002.bam"));
    /// assert_eq!(paths.len(), 1);
    ///
    /// assert!(matcher.matches(&nonempty![String::from("BS003")]).is_none());
    /// ```
    pub fn matches(&self, identifiers: &NonEmpty<String>) -> Option<NonEmpty<PathBuf>> {
        let filenames = &self.filenames;

        let paths = identifiers
            .iter()
            .flat_map(move |identifier| {
                filenames
                    .iter()
                    .filter(move |filename| filename.contains(identifier.as_str()))
            })
            .map(|filename| self.directory.join(filename))
            .collect::<Vec<_>>();

        NonEmpty::from_vec(paths)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use nonempty::nonempty;
    use tempdir::TempDir;

    use super::*;

    fn tokens(values: &[&str]) -> NonEmpty<String> {
        let mut values = values.iter().map(|value| value.to_string());
        let head = values.next().expect("at least one token");
        NonEmpty {
            head,
            tail: values.collect(),
        }
    }

    #[test]
    fn test_unanchored_substring() {
        let matcher = Matcher::from_filenames("/data", ["sample_BS12345.bam"]);

        assert!(matcher.matches(&tokens(&["BS12345"])).is_some());
        assert!(matcher.matches(&tokens(&["BS1234"])).is_some());
        assert!(matcher.matches(&tokens(&["12345.b"])).is_some());
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = Matcher::from_filenames("/data", ["sample_BS001.bam"]);
        assert!(matcher.matches(&tokens(&["bs001"])).is_none());
    }

    #[test]
    fn test_extension_required() {
        let matcher = Matcher::from_filenames("/data", ["BS001.bam.bai", "BS001.cram", "BS001.BAM"]);
        assert!(matcher.filenames().is_empty());
        assert!(matcher.matches(&tokens(&["BS001"])).is_none());
    }

    #[test]
    fn test_duplicates_are_kept_in_token_order() {
        let matcher = Matcher::from_filenames("/data", ["BS001_BS002.bam", "BS002.bam"]);
        let paths = matcher.matches(&tokens(&["BS002", "BS001"])).unwrap();

        assert_eq!(
            paths.into_iter().collect::<Vec<_>>(),
            vec![
                PathBuf::from("/data/BS001_BS002.bam"),
                PathBuf::from("/data/BS002.bam"),
                PathBuf::from("/data/BS001_BS002.bam"),
            ]
        );
    }

    #[test]
    fn test_empty_token_matches_everything() {
        let matcher = Matcher::from_filenames("/data", ["BS001.bam", "BS002.bam"]);
        assert_eq!(
            matcher.matches(&nonempty![String::new()]).map(|paths| paths.len()),
            Some(2)
        );

        // A trailing comma yields an empty token after the real one.
        let paths = matcher.matches(&tokens(&["BS001", ""])).unwrap();
        assert_eq!(
            paths.into_iter().collect::<Vec<_>>(),
            vec![
                PathBuf::from("/data/BS001.bam"),
                PathBuf::from("/data/BS001.bam"),
                PathBuf::from("/data/BS002.bam"),
            ]
        );
    }

    #[test]
    fn test_from_directory() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("bams")?;
        File::create(dir.path().join("sampleA_BS001.bam"))?;
        File::create(dir.path().join("sampleA_BS001.bam.bai"))?;
        File::create(dir.path().join("notes.txt"))?;
        std::fs::create_dir(dir.path().join("nested_BS001.bam"))?;

        let matcher = Matcher::from_directory(dir.path())?;
        assert_eq!(matcher.filenames(), ["sampleA_BS001.bam"]);
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let err = Matcher::from_directory("/this/does/not/exist").unwrap_err();
        assert!(err.to_string().starts_with("unable to list `/this/does/not/exist`"));
    }
}
