//! The names of the table columns holding each part of a variant.

use std::str::FromStr;

/// The delimiter between column names.
pub const DELIMITER: char = ',';

/// The number of column names expected.
pub const NUM_COLUMNS: usize = 3;

/// The default chromosome column name.
pub const DEFAULT_CHROMOSOME: &str = "chrom";

/// The default position column name.
pub const DEFAULT_POSITION: &str = "start";

/// The default identifier column name.
pub const DEFAULT_IDENTIFIERS: &str = "ID";

/// An error associated with parsing a list of column names.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An incorrect number of column names.
    IncorrectNumberOfColumns(usize),

    /// One of the column names was empty.
    EmptyColumnName(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfColumns(n) => write!(
                f,
                "expected {NUM_COLUMNS} column names (chromosome, position, identifiers), found \
                 {n}"
            ),
            ParseError::EmptyColumnName(i) => {
                write!(f, "column name at position {} is empty", i + 1)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The column names for the chromosome, position, and identifier group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Columns {
    /// The chromosome column.
    chromosome: String,

    /// The position column.
    position: String,

    /// The column holding the comma-joined identifiers.
    identifiers: String,
}

impl Columns {
    /// Creates a new set of column names.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::config::Columns;
    ///
    /// let columns = Columns::new("CHROM", "POS", "SAMPLES");
    /// assert_eq!(columns.chromosome(), "CHROM");
    /// ```
    pub fn new(
        chromosome: impl Into<String>,
        position: impl Into<String>,
        identifiers: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            position: position.into(),
            identifiers: identifiers.into(),
        }
    }

    /// Gets the chromosome column name.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the position column name.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Gets the identifier group column name.
    pub fn identifiers(&self) -> &str {
        &self.identifiers
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::new(DEFAULT_CHROMOSOME, DEFAULT_POSITION, DEFAULT_IDENTIFIERS)
    }
}

impl std::fmt::Display for Columns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.chromosome, self.position, self.identifiers
        )
    }
}

impl FromStr for Columns {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names = s.split(DELIMITER).collect::<Vec<_>>();

        if names.len() != NUM_COLUMNS {
            return Err(ParseError::IncorrectNumberOfColumns(names.len()));
        }

        if let Some(i) = names.iter().position(|name| name.is_empty()) {
            return Err(ParseError::EmptyColumnName(i));
        }

        Ok(Self::new(names[0], names[1], names[2]))
    }
}
