use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Bookbind operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Bookbind operations
#[derive(Debug)]
pub enum BookbindError {
    /// IO error wrapper
    Io(io::Error),
    /// Document too malformed to locate an element subtree
    Parse(String),
    /// Requested book has no manifest entry
    UnknownBook { book: String },
    /// Chapter slug missing from its book's manifest
    UnknownChapter { book: String, slug: String },
    /// Two chapter items resolved to the same slug
    DuplicateChapter { book: String, slug: String },
    /// Configuration error
    Config(String),
    /// Filter or renderer error
    Render(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for BookbindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookbindError::Io(err) => write!(f, "IO error: {}", err),
            BookbindError::Parse(msg) => write!(f, "Parse error: {}", msg),
            BookbindError::UnknownBook { book } => {
                write!(f, "No chapter manifest for book '{}'", book)
            }
            BookbindError::UnknownChapter { book, slug } => {
                write!(
                    f,
                    "Chapter '{}' is not listed in the manifest for book '{}'",
                    slug, book
                )
            }
            BookbindError::DuplicateChapter { book, slug } => {
                write!(
                    f,
                    "Chapter slug '{}' appears more than once in book '{}'",
                    slug, book
                )
            }
            BookbindError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BookbindError::Render(msg) => write!(f, "Render error: {}", msg),
            BookbindError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for BookbindError {}

impl From<io::Error> for BookbindError {
    fn from(err: io::Error) -> Self {
        BookbindError::Io(err)
    }
}

impl From<String> for BookbindError {
    fn from(msg: String) -> Self {
        BookbindError::Generic(msg)
    }
}

impl From<&str> for BookbindError {
    fn from(msg: &str) -> Self {
        BookbindError::Generic(msg.to_string())
    }
}
