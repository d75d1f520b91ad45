//! The header line of a variant table.

use std::collections::HashMap;

use crate::config::Columns;
use crate::table::DELIMITER;
use crate::table::record::Indices;

/// An error related to a [`Header`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A configured column is not present in the header.
    MissingColumn(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingColumn(name) => write!(f, "column `{name}` not found in header"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A mapping from column name to zero-based column index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header(HashMap<String, usize>);

impl Header {
    /// Parses a header from a line that has already had its line terminator
    /// stripped.
    ///
    /// When a column name appears more than once, the last occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::table::Header;
    ///
    /// let header = Header::parse("chrom\tstart\tID");
    /// assert_eq!(header.get("chrom"), Some(0));
    /// assert_eq!(header.get("ID"), Some(2));
    /// assert_eq!(header.get("end"), None);
    /// ```
    pub fn parse(line: &str) -> Self {
        Self(
            line.split(DELIMITER)
                .enumerate()
                .map(|(i, name)| (name.to_string(), i))
                .collect(),
        )
    }

    /// Gets the index of a column by name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    /// Looks up the indices of the configured columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::config::Columns;
    /// use igvbatch::table::Header;
    ///
    /// let header = Header::parse("ID\tchrom\tstart");
    /// let indices = header.resolve(&Columns::default())?;
    ///
    /// assert_eq!(indices.chromosome(), 1);
    /// assert_eq!(indices.position(), 2);
    /// assert_eq!(indices.identifiers(), 0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve(&self, columns: &Columns) -> Result<Indices> {
        let lookup = |name: &str| {
            self.get(name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        Ok(Indices::new(
            lookup(columns.chromosome())?,
            lookup(columns.position())?,
            lookup(columns.identifiers())?,
        ))
    }
}
