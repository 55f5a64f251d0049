//! Errors reported while decoding an input.
//!
//! The lower layers of the decoder raise bare kinds ([`FormatError`],
//! [`ParseError`], [`ValidationError`], or an [`std::io::Error`]) without
//! knowing which line they were working on. The decode loop is the only place
//! line identity is known, so it wraps the kind into an [`Error`] carrying the
//! 1-based line number and the verbatim line text.

use std::{fmt, io};

use thiserror::Error;

/// An error raised when a line has an unexpected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A header was requested but the input held no line to consume.
    #[error("header is expected but not seen")]
    MissingHeader,
    /// A line ran out of fields before the record was complete.
    #[error("insufficient number of fields")]
    MissingField,
    /// A line held more fields than the record declares.
    #[error("excess fields")]
    ExcessField,
}

/// An error raised when a field's text is not parseable as its value type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not match the type's grammar at all.
    #[error("parse error")]
    Unknown,
    /// The text encodes a value outside the type's range.
    #[error("value out of range")]
    OutOfRange,
    /// A valid value was read but characters remained unconsumed.
    #[error("excess character(s) at the end of a field")]
    Leftover,
}

/// An error raised when a freshly decoded record fails its own validation.
///
/// Produced by [`check`], or constructed directly with a message describing
/// the violated invariant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Any failure the decoder can encounter, without line context.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The line did not split into the expected fields.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A field did not convert to its value type.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Reading from the input failed before reaching its end.
    #[error("input error")]
    Io(#[from] io::Error),
    /// The record's validation rejected the converted values.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A decode failure, annotated with the offending line where one is known.
///
/// Errors raised while a line is in hand carry its 1-based number and its
/// verbatim text; failures before any line exists (a missing header, an I/O
/// fault) carry neither.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    line_number: Option<usize>,
    line: Option<String>,
}

impl Error {
    pub(crate) fn new(kind: impl Into<ErrorKind>) -> Self {
        Self {
            kind: kind.into(),
            line_number: None,
            line: None,
        }
    }

    pub(crate) fn on_line(kind: impl Into<ErrorKind>, number: usize, line: String) -> Self {
        Self {
            kind: kind.into(),
            line_number: Some(number),
            line: Some(line),
        }
    }

    /// The underlying failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 1-based number of the line that produced the error, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// Verbatim text of the line that produced the error, if known.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(number) = self.line_number {
            write!(f, " (at line {number})")?;
        }

        if let Some(line) = &self.line {
            write!(f, ": \"{line}\"")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Fail validation with `message` unless `pred` holds.
///
/// A convenience for validation functions:
///
/// ```
/// fn validate(cell: &Cell) -> Result<(), ValidationError> {
///     check(cell.row < cell.column, "row index must be smaller than column index")?;
///     check(cell.value >= 0.0, "value must be non-negative")
/// }
/// ```
pub fn check(pred: bool, message: impl Into<String>) -> Result<(), ValidationError> {
    if pred {
        Ok(())
    } else {
        Err(ValidationError(message.into()))
    }
}
