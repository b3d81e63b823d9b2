//! Input sources shared by the readers
//!
//! A [`Source`] is whatever the caller hands a reader: borrowed text, raw
//! bytes, a one-shot stream or a stream that can be rewound. Readers ask the
//! source up front whether it can be rewound ([`Source::is_rewindable`]) instead
//! of probing for it while reading.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A readable stream that can also seek back to its start.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Raw input handed to a reader.
pub enum Source<'a> {
    /// Already decoded text
    Text(&'a str),
    /// Bytes expected to hold UTF-8 text
    Bytes(&'a [u8]),
    /// Forward-only stream, read once
    Stream(Box<dyn Read + 'a>),
    /// Stream that supports seeking back to its start
    Seekable(Box<dyn ReadSeek + 'a>),
}

/// Failures while acquiring text from a [`Source`] or a file path.
///
/// Every reader converts these into its own error type, keeping the
/// distinction between "could not get the input" and "the input is invalid".
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("IO error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    #[error("input is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("input could not be read: {0}")]
    Unreadable(String),
}

impl<'a> Source<'a> {
    /// Wrap a forward-only reader (sockets, pipes, stdin).
    pub fn stream(reader: impl Read + 'a) -> Self {
        Source::Stream(Box::new(reader))
    }

    /// Wrap a reader that can seek back to its start (files, cursors).
    pub fn seekable(reader: impl Read + Seek + 'a) -> Self {
        Source::Seekable(Box::new(reader))
    }

    /// Whether the whole input can be inspected and then read again from the start.
    pub fn is_rewindable(&self) -> bool {
        !matches!(self, Source::Stream(_))
    }

    /// Short name of the source variant, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Text(_) => "text",
            Source::Bytes(_) => "bytes",
            Source::Stream(_) => "stream",
            Source::Seekable(_) => "seekable",
        }
    }

    /// Consume the source and return its full content as UTF-8 text.
    pub fn into_text(self) -> Result<Cow<'a, str>, SourceError> {
        match self {
            Source::Text(text) => Ok(Cow::Borrowed(text)),
            Source::Bytes(bytes) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| SourceError::Encoding(e.to_string())),
            Source::Stream(mut reader) => read_to_text(&mut reader).map(Cow::Owned),
            Source::Seekable(mut reader) => read_to_text(&mut reader).map(Cow::Owned),
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Source::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Source::Stream(_) => f.write_str("Stream(..)"),
            Source::Seekable(_) => f.write_str("Seekable(..)"),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<File> for Source<'static> {
    fn from(file: File) -> Self {
        Source::Seekable(Box::new(file))
    }
}

/// Read a stream to the end and decode it as UTF-8.
pub(crate) fn read_to_text<R: Read + ?Sized>(reader: &mut R) -> Result<String, SourceError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(map_read_error)?;
    String::from_utf8(buffer).map_err(|e| SourceError::Encoding(e.utf8_error().to_string()))
}

/// Seek a stream back to its first byte.
pub(crate) fn rewind<R: Seek + ?Sized>(reader: &mut R) -> Result<(), SourceError> {
    reader
        .seek(SeekFrom::Start(0))
        .map(|_| ())
        .map_err(|e| SourceError::Unreadable(format!("failed to rewind: {}", e)))
}

/// Classify an I/O error raised while reading a stream.
pub(crate) fn map_read_error(err: io::Error) -> SourceError {
    match err.kind() {
        io::ErrorKind::InvalidData => SourceError::Encoding(err.to_string()),
        _ => SourceError::Unreadable(err.to_string()),
    }
}

/// Open a file for reading.
///
/// A missing file is reported as [`SourceError::FileNotFound`] so callers can
/// tell it apart from content errors. The returned handle is owned by the
/// caller and closed when dropped.
pub fn open_file(path: impl AsRef<Path>) -> Result<File, SourceError> {
    let path = path.as_ref();
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::FileNotFound(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "write-only handle"))
        }
    }

    #[test]
    fn test_rewind_capability() {
        assert!(Source::Text("a").is_rewindable());
        assert!(Source::Bytes(b"a").is_rewindable());
        assert!(Source::seekable(Cursor::new("a")).is_rewindable());
        assert!(!Source::stream(Cursor::new("a")).is_rewindable());
    }

    #[test]
    fn test_into_text_decodes_streams() {
        let text = Source::stream(Cursor::new("zażółć".as_bytes()))
            .into_text()
            .unwrap();
        assert_eq!(text, "zażółć");
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let bytes: &[u8] = &[0x66, 0xff, 0x66];
        assert!(matches!(
            Source::Bytes(bytes).into_text(),
            Err(SourceError::Encoding(_))
        ));
        assert!(matches!(
            Source::stream(Cursor::new(bytes.to_vec())).into_text(),
            Err(SourceError::Encoding(_))
        ));
    }

    #[test]
    fn test_unreadable_stream() {
        assert!(matches!(
            Source::stream(Broken).into_text(),
            Err(SourceError::Unreadable(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_file("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, SourceError::FileNotFound(_)));
        assert!(err.to_string().contains("not/here.csv"));
    }
}
