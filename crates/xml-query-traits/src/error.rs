//! Error types for query pipeline operations

/// Result type for query pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a per-input failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Document bytes could not be acquired
    IoFailure,
    /// Fewer bytes were read than the size probe announced
    TruncatedRead,
    /// Bytes are not a well-formed document
    ParseFailure,
    /// The evaluation context could not be constructed
    ContextFailure,
    /// The expression is invalid or failed during evaluation
    EvalFailure,
}

/// Unified error type for everything that can go wrong while processing
/// one input.
///
/// Every variant carries the label of the input it belongs to, so a
/// diagnostic can be reported without extra bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document bytes could not be acquired
    #[error("couldn't open input file {label}: {source}")]
    Io {
        label: String,
        #[source]
        source: std::io::Error,
    },

    /// Short read against the size probe. Logged, never returned as a failure.
    #[error("reading from {label} was truncated (expected {expected}, got {actual})")]
    TruncatedRead {
        label: String,
        expected: u64,
        actual: u64,
    },

    /// Document bytes are not valid UTF-8 text
    #[error("document {label} is not valid UTF-8: {source}")]
    Utf8 {
        label: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// XML parsing failed
    #[error("document {label} not parsed successfully: {message}")]
    Parse { label: String, message: String },

    /// Evaluation context could not be built
    #[error("can't create XPath context for {label}: {message}")]
    Context { label: String, message: String },

    /// XPath compilation or evaluation failed
    #[error("XPath expression invalid for {label}: {message}")]
    Eval { label: String, message: String },
}

impl Error {
    /// Create a new I/O error
    pub fn io<S: Into<String>>(label: S, source: std::io::Error) -> Self {
        Error::Io {
            label: label.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>, M: ToString>(label: S, message: M) -> Self {
        Error::Parse {
            label: label.into(),
            message: message.to_string(),
        }
    }

    /// Create a new context error
    pub fn context<S: Into<String>, M: ToString>(label: S, message: M) -> Self {
        Error::Context {
            label: label.into(),
            message: message.to_string(),
        }
    }

    /// Create a new evaluation error
    pub fn eval<S: Into<String>, M: ToString>(label: S, message: M) -> Self {
        Error::Eval {
            label: label.into(),
            message: message.to_string(),
        }
    }

    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::IoFailure,
            Error::TruncatedRead { .. } => ErrorKind::TruncatedRead,
            Error::Utf8 { .. } | Error::Parse { .. } => ErrorKind::ParseFailure,
            Error::Context { .. } => ErrorKind::ContextFailure,
            Error::Eval { .. } => ErrorKind::EvalFailure,
        }
    }

    /// Label of the input this error belongs to
    pub fn label(&self) -> &str {
        match self {
            Error::Io { label, .. }
            | Error::TruncatedRead { label, .. }
            | Error::Utf8 { label, .. }
            | Error::Parse { label, .. }
            | Error::Context { label, .. }
            | Error::Eval { label, .. } => label,
        }
    }
}
