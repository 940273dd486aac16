use std::fmt;

/// Custom error types for Harbor log conversion
#[derive(Debug)]
pub enum ConvertError {
    /// I/O errors on the input or output stream
    Io(std::io::Error),
    /// CSV tokenizer errors
    Csv(csv::Error),
    /// Parse errors with context
    Parse(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::Csv(err) => write!(f, "CSV error: {}", err),
            ConvertError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
