//! A variant record read from a table row.

use nonempty::NonEmpty;

use crate::table::DELIMITER;

/// The delimiter between identifiers within the identifier column.
pub const IDENTIFIER_DELIMITER: char = ',';

/// An error associated with parsing a record.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The row has too few fields to reach a configured column.
    MissingField {
        /// The index of the column that was requested.
        index: usize,

        /// The number of fields in the row.
        found: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingField { index, found } => write!(
                f,
                "missing field: expected at least {} fields, found {found} fields",
                index + 1
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// The column indices of each part of a variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Indices {
    /// The chromosome column index.
    chromosome: usize,

    /// The position column index.
    position: usize,

    /// The identifier group column index.
    identifiers: usize,
}

impl Indices {
    /// Creates a new set of column indices.
    pub fn new(chromosome: usize, position: usize, identifiers: usize) -> Self {
        Self {
            chromosome,
            position,
            identifiers,
        }
    }

    /// Gets the chromosome column index.
    pub fn chromosome(&self) -> usize {
        self.chromosome
    }

    /// Gets the position column index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Gets the identifier group column index.
    pub fn identifiers(&self) -> usize {
        self.identifiers
    }
}

/// A single variant along with the identifiers of the samples it should be
/// viewed in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The chromosome label.
    chromosome: String,

    /// The position, kept as written in the table.
    position: String,

    /// The identifier tokens.
    identifiers: NonEmpty<String>,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        chromosome: impl Into<String>,
        position: impl Into<String>,
        identifiers: NonEmpty<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            position: position.into(),
            identifiers,
        }
    }

    /// Parses a record from a row that has already had its line terminator
    /// stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::table::record::Indices;
    /// use igvbatch::table::Record;
    ///
    /// let indices = Indices::new(0, 1, 2);
    /// let record = Record::parse("1\t12345\tBS001, BS002", &indices)?;
    ///
    /// assert_eq!(record.chromosome(), "1");
    /// assert_eq!(record.position(), "12345");
    /// assert_eq!(
    ///     record.identifiers().iter().collect::<Vec<_>>(),
    ///     ["BS001", "BS002"]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(line: &str, indices: &Indices) -> Result<Self, ParseError> {
        let fields = line.split(DELIMITER).collect::<Vec<_>>();

        let field = |index: usize| {
            fields
                .get(index)
                .copied()
                .ok_or(ParseError::MissingField {
                    index,
                    found: fields.len(),
                })
        };

        let chromosome = field(indices.chromosome())?;
        let position = field(indices.position())?;
        let identifiers = split_identifiers(field(indices.identifiers())?);

        Ok(Self::new(chromosome, position, identifiers))
    }

    /// Gets the chromosome label.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the position as written in the table.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Gets the identifier tokens.
    pub fn identifiers(&self) -> &NonEmpty<String> {
        &self.identifiers
    }
}

/// Splits a comma-joined identifier group into trimmed tokens.
///
/// Splitting always yields at least one token, though that token may be
/// empty.
fn split_identifiers(raw: &str) -> NonEmpty<String> {
    let mut tokens = raw
        .split(IDENTIFIER_DELIMITER)
        .map(|token| token.trim().to_string());

    NonEmpty {
        head: tokens.next().unwrap_or_default(),
        tail: tokens.collect(),
    }
}
