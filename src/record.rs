//! The shape of a decodable record.

use crate::error::{ErrorKind, ValidationError};

/// Largest number of fields a record type may declare.
///
/// Exceeding it is rejected when the type is defined (the derive macro
/// refuses to expand), never while decoding.
pub const MAX_FIELDS: usize = 32;

/// A type decodable from one line of delimited text.
///
/// A record is a fixed, ordered set of typed fields. [`from_line`] splits a
/// line into exactly [`FIELDS`] tokens and converts each to the field
/// declared at its position, in declaration order; too few tokens is
/// [`FormatError::MissingField`] and too many is
/// [`FormatError::ExcessField`].
///
/// Implementations are ordinarily generated by the
/// [`Record`](macro@crate::Record) derive macro rather than written by hand.
///
/// [`from_line`]: Self::from_line
/// [`FIELDS`]: Self::FIELDS
/// [`FormatError::MissingField`]: crate::FormatError::MissingField
/// [`FormatError::ExcessField`]: crate::FormatError::ExcessField
pub trait Record: Sized {
    /// Number of fields the record declares.
    const FIELDS: usize;

    /// Decode a record from one line of input.
    ///
    /// The line carries no terminator and no identity; errors are raised
    /// without line context, which the decode loop attaches where the line
    /// number is known.
    fn from_line(line: &str, delimiter: char) -> Result<Self, ErrorKind>;

    /// Validate a freshly decoded record.
    ///
    /// Runs after every field has converted, before the record is appended
    /// to the output. The default accepts everything; see the
    /// `#[record(validate = ...)]` derive attribute and [`check`](crate::check)
    /// for supplying a real check.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
