//! A strict decoder for line-oriented, delimiter-separated text records.
//!
//! Tablature reads inputs holding one record per line, fields separated by a
//! single configurable character (a tab by default), and decodes them into a
//! sequence of strongly-typed structs. There is no quoting or escaping
//! dialect and no multi-line fields; in exchange, decoding is strict. A line
//! must split into exactly as many fields as the record declares, every
//! field must convert to its declared type with nothing left over, and the
//! first failure aborts the decode with the offending line's number and
//! text.
//!
//! Most users should derive [`Record`] on a struct and hand an input to
//! [`load`] or [`load_str`]:
//!
//! ```
//! use tablature::{Options, Record};
//!
//! #[derive(Debug, Record)]
//! struct Cell {
//!     row: u32,
//!     column: u32,
//!     value: f64,
//! }
//!
//! let input = "row\tcolumn\tvalue\n1\t2\t1.23\n3\t4\t4.56\n";
//! let cells: Vec<Cell> = tablature::load_str(input, Options::default())?;
//! ```
//!
//! The underlying machinery is public for applications needing finer
//! control: [`source`] reads lines with one line of lookahead, [`split`]
//! pops fields off a line, and [`convert`] turns field text into values.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the [`Record`] derive macro (default).

pub mod convert;
pub mod decode;
pub mod error;
pub mod record;
pub mod source;
pub mod split;

pub use convert::FromField;
pub use decode::{Options, load, load_str};
pub use error::{Error, ErrorKind, FormatError, ParseError, ValidationError, check};
pub use record::{MAX_FIELDS, Record};

/// Derive [`Record`] for a struct decodable from one line of input.
///
/// _Requires Cargo feature `derive`._
///
/// # Examples
///
/// Every named field must implement [`FromField`]. Fields convert in
/// declaration order, one delimited token each, and a line with too few or
/// too many tokens is rejected. Up to [`MAX_FIELDS`] fields are supported.
///
/// ```
/// #[derive(Debug, Record)]
/// struct Observation {
///     station: String,
///     hour: u8,
///     temperature: f64,
/// }
/// ```
///
/// A field whose text needs a shape of its own takes a custom conversion:
/// implement [`FromField`] for its type. The conversion sees exactly one
/// delimited token.
///
/// ```
/// struct Rational {
///     numerator: i32,
///     denominator: i32,
/// }
///
/// impl FromField for Rational {
///     fn from_field(text: &str) -> Result<Self, ParseError> {
///         let Some((numerator, denominator)) = text.split_once('/') else {
///             return Err(ParseError::Unknown);
///         };
///
///         Ok(Self {
///             numerator: convert::from_str(numerator)?,
///             denominator: convert::from_str(denominator)?,
///         })
///     }
/// }
/// ```
///
/// To check invariants spanning a whole record after its fields convert,
/// name a validation function in the container attribute. The function runs
/// once per decoded record; [`check`] builds the error from a predicate and
/// a message.
///
/// ```
/// #[derive(Debug, Record)]
/// #[record(validate = validate_cell)]
/// struct Cell {
///     row: u32,
///     column: u32,
///     value: f64,
/// }
///
/// fn validate_cell(cell: &Cell) -> Result<(), ValidationError> {
///     check(cell.row < cell.column, "row index must be smaller than column index")?;
///     check(cell.value >= 0.0, "value must be non-negative")
/// }
/// ```
#[cfg(feature = "derive")]
pub use tablature_derive::Record;
