//! Byte filter placed in front of the `csv` parser
//!
//! Drops the spaces that follow a delimiter (or start a record) before a
//! field's first character or opening quote. Quoted content is passed through
//! untouched. While filtering, it also records whether the first physical line
//! is blank, which the parser cannot report because it skips blank records.

use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Start,
    Unquoted,
    Quoted,
    /// A quote inside a quoted field: either the closing quote or the first
    /// half of an escaped `""`.
    QuoteInQuoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FirstLine {
    Pending,
    Blank,
    Content,
}

pub(crate) struct SkipInitialSpace<R> {
    inner: R,
    delimiter: u8,
    field: Field,
    first_line: FirstLine,
    buffer: Vec<u8>,
}

impl<R: Read> SkipInitialSpace<R> {
    pub(crate) fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            field: Field::Start,
            first_line: FirstLine::Pending,
            buffer: Vec::new(),
        }
    }

    /// Whether the first physical line held nothing but whitespace. An input
    /// that ends before any newline counts as blank when it had no content.
    pub(crate) fn first_line_blank(&self) -> bool {
        self.first_line != FirstLine::Content
    }

    fn track_first_line(&mut self, byte: u8) {
        if self.first_line == FirstLine::Pending {
            match byte {
                b'\n' => self.first_line = FirstLine::Blank,
                b' ' | b'\t' | b'\r' => {}
                _ => self.first_line = FirstLine::Content,
            }
        }
    }

    fn ends_field(&self, byte: u8) -> bool {
        byte == self.delimiter || byte == b'\n' || byte == b'\r'
    }

    /// Advance the field state; `false` means the byte is dropped.
    fn keep(&mut self, byte: u8) -> bool {
        self.track_first_line(byte);
        match self.field {
            Field::Start => {
                if byte == b' ' && self.delimiter != b' ' {
                    return false;
                }
                self.field = match byte {
                    b'"' => Field::Quoted,
                    b if self.ends_field(b) => Field::Start,
                    _ => Field::Unquoted,
                };
            }
            Field::Unquoted => {
                if self.ends_field(byte) {
                    self.field = Field::Start;
                }
            }
            Field::Quoted => {
                if byte == b'"' {
                    self.field = Field::QuoteInQuoted;
                }
            }
            Field::QuoteInQuoted => {
                self.field = match byte {
                    b'"' => Field::Quoted,
                    b if self.ends_field(b) => Field::Start,
                    _ => Field::Unquoted,
                };
            }
        }
        true
    }
}

impl<R: Read> Read for SkipInitialSpace<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        loop {
            self.buffer.resize(out.len(), 0);
            let read = self.inner.read(&mut self.buffer)?;
            if read == 0 {
                return Ok(0);
            }

            let mut written = 0;
            for idx in 0..read {
                let byte = self.buffer[idx];
                if self.keep(byte) {
                    out[written] = byte;
                    written += 1;
                }
            }
            // A chunk made only of dropped spaces must not look like end of input.
            if written > 0 {
                return Ok(written);
            }
        }
    }
}
