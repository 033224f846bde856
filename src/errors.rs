use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all fatal errors a cue parse can end with
#[derive(Debug)]
pub enum MediaParserError {
    TruncatedInput(TruncatedInputError),
    MalformedContainer(Mp4Error),
    PreconditionViolation(PreconditionError),
    UnsupportedFormat(String),
}

/// A read went past the limit of a byte cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedInputError {
    pub requested: usize,
    pub remaining: usize,
    pub position: usize,
}

impl TruncatedInputError {
    /// Create a new error for a read of `requested` bytes at `position`.
    pub fn new(requested: usize, remaining: usize, position: usize) -> Self {
        Self {
            requested,
            remaining,
            position,
        }
    }
}

/// Caller supplied an offset/length pair outside the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError {
    pub message: String,
}

impl PreconditionError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// MP4 box structure errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mp4Error {
    /// Fewer than 8 bytes left where a box header was expected
    IncompleteHeader { scope: &'static str, remaining: usize },
    /// Declared box size smaller than its own header
    InvalidBoxSize { box_type: String, size: u32 },
    /// Declared box size larger than what the enclosing scope holds
    BoxOverrun {
        box_type: String,
        size: u32,
        remaining: usize,
    },
}

/// A timecode line that does not match the accepted grammar.
///
/// Recoverable: the text decoders drop the offending block and never
/// surface this to their callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimecodeError {
    pub line: String,
}

impl TimecodeError {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

impl fmt::Display for MediaParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaParserError::TruncatedInput(err) => write!(f, "Truncated input: {}", err),
            MediaParserError::MalformedContainer(err) => write!(f, "Malformed container: {}", err),
            MediaParserError::PreconditionViolation(err) => {
                write!(f, "Precondition violation: {}", err)
            }
            MediaParserError::UnsupportedFormat(codec) => {
                write!(f, "Unsupported subtitle format: {}", codec)
            }
        }
    }
}

impl fmt::Display for TruncatedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "needed {} bytes at position {} but only {} remain",
            self.requested, self.position, self.remaining
        )
    }
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mp4Error::IncompleteHeader { scope, remaining } => write!(
                f,
                "Incomplete {} box header: {} bytes left, 8 required",
                scope, remaining
            ),
            Mp4Error::InvalidBoxSize { box_type, size } => {
                write!(f, "Box {} declares size {} (minimum is 8)", box_type, size)
            }
            Mp4Error::BoxOverrun {
                box_type,
                size,
                remaining,
            } => write!(
                f,
                "Box {} declares size {} but only {} bytes remain in scope",
                box_type, size, remaining
            ),
        }
    }
}

impl fmt::Display for TimecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unparsable timecode: {:?}", self.line)
    }
}

impl Error for MediaParserError {}
impl Error for TruncatedInputError {}
impl Error for PreconditionError {}
impl Error for Mp4Error {}
impl Error for TimecodeError {}

// Conversion implementations
impl From<TruncatedInputError> for MediaParserError {
    fn from(err: TruncatedInputError) -> Self {
        MediaParserError::TruncatedInput(err)
    }
}

impl From<Mp4Error> for MediaParserError {
    fn from(err: Mp4Error) -> Self {
        MediaParserError::MalformedContainer(err)
    }
}

impl From<PreconditionError> for MediaParserError {
    fn from(err: PreconditionError) -> Self {
        MediaParserError::PreconditionViolation(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<MediaParserError> for io::Error {
    fn from(err: MediaParserError) -> Self {
        let kind = match &err {
            MediaParserError::PreconditionViolation(_) | MediaParserError::UnsupportedFormat(_) => {
                io::ErrorKind::InvalidInput
            }
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

// Type alias for Result with MediaParserError
pub type MediaParserResult<T> = Result<T, MediaParserError>;
