use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for table of contents operations
pub type TocResult<T> = Result<T, TocError>;

/// Error types for table of contents generation
#[derive(Debug)]
pub enum TocError {
    /// The document has no element carrying the container identifier
    MissingContainer(String),
    /// A content region was configured but the document does not have it
    MissingRegion(String),
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Input could not be turned into a document
    Parse(String),
    /// One or more pages failed while processing a site
    Pages(Vec<(PathBuf, String)>),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::MissingContainer(id) => {
                write!(f, "No table of contents container with id \"{}\"", id)
            }
            TocError::MissingRegion(selector) => {
                write!(f, "Content region \"{}\" not found", selector)
            }
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Parse(msg) => write!(f, "Parse error: {}", msg),
            // Each page is logged where it fails; this is only the summary
            TocError::Pages(failures) => write!(f, "{} page(s) failed", failures.len()),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}
