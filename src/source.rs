//! Buffered line reading with single-line lookahead.

use std::io::{self, BufRead};

/// A reader yielding an input's lines one at a time, with one line of
/// lookahead.
///
/// Lookahead lets the decode loop inspect a line (is it blank? a comment?)
/// without committing to it, so skipping never re-reads or double-counts.
/// Lines are terminated by `\n`; a preceding `\r` is stripped with it. A read
/// failure that is not a clean end of input surfaces as [`io::Error`].
#[derive(Debug)]
pub struct LineSource<R> {
    input: R,
    line: String,
    line_number: usize,
    available: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_number: 0,
            available: false,
        }
    }

    /// Look at the next line without consuming it, or `None` at end of input.
    ///
    /// Repeated peeks return identical content and do not advance the line
    /// counter.
    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(Some(&self.line))
    }

    /// Return the next line and advance past it, or `None` at end of input.
    ///
    /// Reuses a line buffered by a preceding [`peek`](Self::peek).
    pub fn consume(&mut self) -> io::Result<Option<&str>> {
        if !self.fill()? {
            return Ok(None);
        }
        self.available = false;
        self.line_number += 1;
        Ok(Some(&self.line))
    }

    /// 1-based number of lines consumed so far; zero before the first
    /// consume.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Ensure the buffer holds the next line, reading one unless a lookahead
    /// already did. Returns false at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        if self.available {
            return Ok(true);
        }

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }

        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }

        self.available = true;
        Ok(true)
    }
}
