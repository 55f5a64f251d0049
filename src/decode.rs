//! Decoding a whole input into a sequence of records.

use std::io::BufRead;

use crate::{
    error::{Error, FormatError},
    record::Record,
    source::LineSource,
};

/// Options controlling how an input is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Character used to split a line into fields.
    pub delimiter: char,
    /// True to consume and discard the first line after the leading
    /// preamble.
    pub header: bool,
    /// Skip lines whose first character matches this one, when set.
    pub comment: Option<char>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            header: true,
            comment: None,
        }
    }
}

/// Decode every record from a line-oriented input.
///
/// The input is consumed strictly forward, one pass, blocking on reads.
/// Blank lines, and comment lines when [`Options::comment`] is set, are
/// skipped before the header and before every record. Decoding stops at the
/// first error; nothing partial is returned. An input left empty by the
/// skipping rules decodes to an empty sequence.
///
/// This function is also re-exported as `tablature::load`.
pub fn load<R, I>(input: I, options: Options) -> Result<Vec<R>, Error>
where
    R: Record,
    I: BufRead,
{
    let mut rows = Rows {
        source: LineSource::new(input),
        options,
    };

    rows.skip_preamble()?;

    if options.header && !rows.skip_row()? {
        return Err(Error::new(FormatError::MissingHeader));
    }

    let mut records = Vec::new();

    loop {
        rows.skip_preamble()?;

        let Some(record) = rows.next_record()? else {
            break;
        };
        records.push(record);
    }

    Ok(records)
}

/// Decode every record from a string.
///
/// This function is also re-exported as `tablature::load_str`.
pub fn load_str<R: Record>(input: &str, options: Options) -> Result<Vec<R>, Error> {
    load(input.as_bytes(), options)
}

/// Cursor stepping a [`LineSource`] through the skip/read/decode cycle.
struct Rows<I> {
    source: LineSource<I>,
    options: Options,
}

impl<I: BufRead> Rows<I> {
    /// Skip blank lines and, when a comment character is configured, lines
    /// opening with it.
    fn skip_preamble(&mut self) -> Result<(), Error> {
        loop {
            let Some(line) = self.source.peek()? else {
                break;
            };

            let skip = line.is_empty()
                || self.options.comment.is_some_and(|c| line.starts_with(c));
            if !skip {
                break;
            }

            self.source.consume()?;
        }

        Ok(())
    }

    /// Consume one line without converting its fields. Returns false at end
    /// of input.
    fn skip_row(&mut self) -> Result<bool, Error> {
        Ok(self.source.consume()?.is_some())
    }

    /// Decode the next line into a record, or `None` at end of input.
    ///
    /// Shape, conversion, and validation errors are wrapped with the line's
    /// 1-based number and verbatim text here, the one place both are known.
    fn next_record<R: Record>(&mut self) -> Result<Option<R>, Error> {
        let Some(line) = self.source.consume()? else {
            return Ok(None);
        };

        let result = R::from_line(line, self.options.delimiter).and_then(|record| {
            match record.validate() {
                Ok(()) => Ok(record),
                Err(err) => Err(err.into()),
            }
        });

        match result {
            Ok(record) => Ok(Some(record)),
            Err(kind) => {
                let line = line.to_owned();
                let number = self.source.line_number();
                Err(Error::on_line(kind, number, line))
            }
        }
    }
}
