//! Acquisition of raw document bytes

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use xml_query_traits::error::{Error, Result};

/// Argument and label that stand for standard input
pub const STDIN_LABEL: &str = "-";

/// Growth step when reading a stream of unknown length
const READ_SIZE: usize = 16 * 1024;

/// Where one document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, read to end of stream
    Stdin,
    /// A named file
    Path(PathBuf),
}

impl Input {
    /// Interpret a command-line argument; `-` means standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_LABEL {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    /// Like [`Input::from_arg`] for a path that need not be UTF-8
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_LABEL {
            Input::Stdin
        } else {
            Input::Path(path)
        }
    }

    /// Label used to prefix output and diagnostics
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Input::Stdin => Cow::Borrowed(STDIN_LABEL),
            Input::Path(path) => path.to_string_lossy(),
        }
    }
}

/// Owned bytes of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBuffer {
    bytes: Vec<u8>,
}

impl DocumentBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the bytes. Its length is fixed, so edits happen in
    /// place.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

/// Trait for anything that can hand over document bytes
pub trait ByteSource {
    /// Read the whole document behind `input`
    fn read(&mut self, input: &Input) -> Result<DocumentBuffer>;
}

/// Reads from the process's standard input and the filesystem
#[derive(Debug, Default)]
pub struct StdSource;

impl ByteSource for StdSource {
    fn read(&mut self, input: &Input) -> Result<DocumentBuffer> {
        match input {
            Input::Stdin => read_stream(io::stdin().lock(), STDIN_LABEL),
            Input::Path(path) => read_file(path, &input.label()),
        }
    }
}

/// Read `reader` until end of stream
pub fn read_stream<R: Read>(mut reader: R, label: &str) -> Result<DocumentBuffer> {
    let mut bytes = Vec::with_capacity(READ_SIZE);
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(label, e))?;
    debug!("{}: read {} bytes from stream", label, bytes.len());
    Ok(DocumentBuffer::new(bytes))
}

/// Read a named file, sized by a metadata probe
pub fn read_file(path: &Path, label: &str) -> Result<DocumentBuffer> {
    let file = File::open(path).map_err(|e| Error::io(label, e))?;
    let expected = file.metadata().map_err(|e| Error::io(label, e))?.len();
    read_sized(file, expected, label)
}

/// Read at most `expected` bytes. Coming up short is logged, not fatal.
fn read_sized<R: Read>(reader: R, expected: u64, label: &str) -> Result<DocumentBuffer> {
    let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    reader
        .take(expected)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(label, e))?;

    let actual = bytes.len() as u64;
    if actual < expected {
        let truncated = Error::TruncatedRead {
            label: label.to_string(),
            expected,
            actual,
        };
        warn!("{}", truncated);
    }
    debug!("{}: read {} bytes", label, actual);

    Ok(DocumentBuffer::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use xml_query_traits::ErrorKind;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(Input::from_arg("-"), Input::Stdin);
        assert_eq!(Input::Stdin.label(), "-");
        let input = Input::from_arg("data/doc.xml");
        assert_eq!(input, Input::Path(PathBuf::from("data/doc.xml")));
        assert_eq!(input.label(), "data/doc.xml");
    }

    #[test]
    fn paths_map_like_arguments() {
        assert_eq!(Input::from_path(PathBuf::from("-")), Input::Stdin);
        assert_eq!(Input::from_path(PathBuf::from("a.xml")), Input::from_arg("a.xml"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_labelled_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Input::from_path(PathBuf::from(OsStr::from_bytes(b"caf\xe9.xml")));
        assert!(matches!(input, Input::Path(_)));
        assert_eq!(input.label(), "caf\u{fffd}.xml");
    }

    #[test]
    fn stream_reads_past_one_chunk() {
        let data = vec![b'a'; READ_SIZE * 2 + 17];
        let buffer = read_stream(Cursor::new(data.clone()), "-").unwrap();
        assert_eq!(buffer.len(), data.len());
        assert_eq!(buffer.as_slice(), &data[..]);
    }

    #[test]
    fn empty_stream_gives_empty_buffer() {
        let buffer = read_stream(Cursor::new(Vec::new()), "-").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn short_read_keeps_what_arrived() {
        let buffer = read_sized(Cursor::new(b"<a/>".to_vec()), 10, "f").unwrap();
        assert_eq!(buffer.as_slice(), b"<a/>");
    }

    #[test]
    fn sized_read_stops_at_probe() {
        let buffer = read_sized(Cursor::new(b"<a/>trailing".to_vec()), 4, "f").unwrap();
        assert_eq!(buffer.as_slice(), b"<a/>");
    }

    #[test]
    fn file_is_read_exactly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<root><a>1</a></root>").unwrap();

        let buffer = read_file(file.path(), "doc").unwrap();
        assert_eq!(buffer.as_slice(), b"<root><a>1</a></root>");
    }

    #[test]
    fn missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = StdSource
            .read(&Input::Path(dir.path().join("nope.xml")))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.label().ends_with("nope.xml"));
    }
}
