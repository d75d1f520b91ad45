//! A reader for tab-separated variant tables.

pub mod header;
pub mod record;

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::iter;
use std::path::Path;

use flate2::read::GzDecoder;

pub use header::Header;
pub use record::Record;

use record::Indices;

/// The delimiter between fields.
pub const DELIMITER: char = '\t';

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// The extension marking a gzip-compressed table.
const GZIP_EXTENSION: &str = "gz";

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// The table did not contain a header line.
    MissingHeader,

    /// A header error.
    Header(header::Error),

    /// A record error, along with the (1-based) line number.
    Record(record::ParseError, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::MissingHeader => write!(f, "the table is empty (no header line)"),
            Error::Header(err) => write!(f, "header error: {err}"),
            Error::Record(err, line_no) => write!(f, "record error at line {line_no}: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A variant table reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl Reader<Box<dyn BufRead>> {
    /// Opens a table from a path, decompressing it if the path ends in `.gz`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let inner: Box<dyn BufRead> =
            match path.extension().and_then(|extension| extension.to_str()) {
                Some(GZIP_EXTENSION) => Box::new(BufReader::new(GzDecoder::new(file))),
                _ => Box::new(BufReader::new(file)),
            };

        Ok(Self::new(inner))
    }
}

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a variant table reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chrom\tstart\tID\n1\t12345\tBS001\n";
    /// let reader = igvbatch::table::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Reads a raw, textual line from the underlying reader with the line
    /// terminator removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"chrom\tstart\tID\r\n1\t12345\tBS001";
    /// let mut reader = igvbatch::table::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 16);
    /// assert_eq!(buffer, "chrom\tstart\tID");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 13);
    /// assert_eq!(buffer, "1\t12345\tBS001");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Reads the header line.
    ///
    /// This must be called before any records are read.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chrom\tstart\tID\n1\t12345\tBS001\n";
    /// let mut reader = igvbatch::table::Reader::new(&data[..]);
    ///
    /// let header = reader.read_header()?;
    /// assert_eq!(header.get("start"), Some(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_header(&mut self) -> Result<Header> {
        let mut buffer = String::new();

        match self.read_line_raw(&mut buffer).map_err(Error::Io)? {
            0 => Err(Error::MissingHeader),
            _ => Ok(Header::parse(&buffer)),
        }
    }

    /// Returns an iterator over the records in the underlying reader.
    ///
    /// Blank lines are skipped. Line numbers in errors assume the header has
    /// already been consumed with [`Reader::read_header()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::config::Columns;
    ///
    /// let data = b"chrom\tstart\tID\n1\t12345\tBS001\n\nX\t99\tBS002,BS003\n";
    /// let mut reader = igvbatch::table::Reader::new(&data[..]);
    ///
    /// let indices = reader.read_header()?.resolve(&Columns::default())?;
    /// let records = reader.records(indices).collect::<Result<Vec<_>, _>>()?;
    ///
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[1].chromosome(), "X");
    /// assert_eq!(records[1].identifiers().len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self, indices: Indices) -> impl Iterator<Item = Result<Record>> + '_ {
        let mut buffer = String::new();
        // The header occupies line one.
        let mut line_no = 1;

        iter::from_fn(move || loop {
            line_no += 1;

            match self.read_line_raw(&mut buffer) {
                Ok(0) => return None,
                Ok(_) if buffer.is_empty() => continue,
                Ok(_) => {
                    return Some(
                        Record::parse(&buffer, &indices)
                            .map_err(|err| Error::Record(err, line_no)),
                    )
                }
                Err(err) => return Some(Err(Error::Io(err))),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader, removing the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempdir::TempDir;

    use super::*;
    use crate::config::Columns;

    #[test]
    fn test_read_line() {
        let data = b"hello\r\nworld!";
        let mut cursor = io::Cursor::new(data);

        let mut buffer = String::new();
        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "hello");
        assert_eq!(len, 7);

        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "world!");
        assert_eq!(len, 6);
    }

    #[test]
    fn test_empty_table() {
        let mut reader = Reader::new(&b""[..]);
        assert!(matches!(reader.read_header(), Err(Error::MissingHeader)));
    }

    #[test]
    fn test_trailing_blank_lines() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"chrom\tstart\tID\n1\t10\tA\n\n\n";
        let mut reader = Reader::new(&data[..]);

        let indices = reader.read_header()?.resolve(&Columns::default())?;
        let records = reader.records(indices).collect::<Result<Vec<_>>>()?;

        assert_eq!(records.len(), 1);
        Ok(())
    }

    #[test]
    fn test_short_row_reports_line_number() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let data = b"chrom\tstart\tID\n1\t10\tA\n\n2\t20\n";
        let mut reader = Reader::new(&data[..]);

        let indices = reader.read_header()?.resolve(&Columns::default())?;
        let err = reader
            .records(indices)
            .collect::<Result<Vec<_>>>()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "record error at line 4: missing field: expected at least 3 fields, found 2 fields"
        );
        Ok(())
    }

    #[test]
    fn test_open_gzipped_table() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("table")?;
        let path = dir.path().join("variants.tsv.gz");

        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(b"chrom\tstart\tID\n7\t140453136\tBS042\n")?;
        encoder.finish()?;

        let mut reader = Reader::open(&path)?;
        let indices = reader.read_header()?.resolve(&Columns::default())?;
        let records = reader.records(indices).collect::<Result<Vec<_>>>()?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position(), "140453136");
        Ok(())
    }
}
