//! A coordinate window centered upon a variant position.

use std::num::ParseFloatError;

/// An error related to computing a [`Window`].
#[derive(Debug)]
pub enum Error {
    /// The position could not be parsed as a number.
    InvalidPosition(ParseFloatError, String),

    /// The position parsed as NaN or an infinity.
    NonFinitePosition(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPosition(err, value) => {
                write!(f, "invalid position `{value}`: {err}")
            }
            Error::NonFinitePosition(value) => {
                write!(f, "invalid position `{value}`: not a finite number")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A symmetric window of bases around a position.
///
/// The bounds are signed: a window wider than twice the position it is
/// centered on produces a negative start, which is passed through as-is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    /// The start of the window.
    start: i64,

    /// The end of the window.
    end: i64,
}

impl Window {
    /// Computes the window of `width` bases centered on `position`.
    ///
    /// Both bounds are computed in floating point and then truncated toward
    /// zero (not rounded).
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::window::Window;
    ///
    /// let window = Window::around(12345.0, 150.0);
    /// assert_eq!(window.start(), 12270);
    /// assert_eq!(window.end(), 12420);
    ///
    /// let window = Window::around(10.0, 150.0);
    /// assert_eq!(window.start(), -65);
    /// assert_eq!(window.end(), 85);
    /// ```
    pub fn around(position: f64, width: f64) -> Self {
        let half = width / 2.0;

        Self {
            start: (position - half) as i64,
            end: (position + half) as i64,
        }
    }

    /// Parses `position` as a number and computes the window around it.
    ///
    /// Positions that parse to NaN or an infinity are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvbatch::window::Window;
    ///
    /// let window = Window::try_around("100", 51.0)?;
    /// assert_eq!(window.start(), 74);
    /// assert_eq!(window.end(), 125);
    ///
    /// assert!(Window::try_around("one hundred", 51.0).is_err());
    /// assert!(Window::try_around("nan", 51.0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_around(position: &str, width: f64) -> Result<Self> {
        let parsed = position
            .trim()
            .parse::<f64>()
            .map_err(|err| Error::InvalidPosition(err, position.into()))?;

        if !parsed.is_finite() {
            return Err(Error::NonFinitePosition(position.into()));
        }

        Ok(Self::around(parsed, width))
    }

    /// Gets the start of the window.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Gets the end of the window.
    pub fn end(&self) -> i64 {
        self.end
    }
}
