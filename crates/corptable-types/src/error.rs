use std::fmt;

/// Result type for corptable-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Company id could not be parsed
    InvalidId(String),

    /// Column or form field name is not known
    UnknownField(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(raw) => write!(f, "Invalid company id: '{}'", raw),
            Error::UnknownField(raw) => write!(
                f,
                "Unknown field '{}' (expected one of: id, name, manager, phone, address)",
                raw
            ),
        }
    }
}

impl std::error::Error for Error {}
