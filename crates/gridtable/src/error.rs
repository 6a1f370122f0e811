//! Error types for the gridtable crate.

use thiserror::Error;

/// Errors surfaced by table configuration and interactive resizing.
///
/// Width allocation itself never fails: degenerate inputs degrade to
/// numeric results. Only integration mistakes and configuration loading
/// produce errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// A drag or lookup referenced a column name not present in the table.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The dragged column is the last one and has no right-hand neighbor.
    #[error("column '{0}' has no right-hand neighbor to resize against")]
    NoAdjacentColumn(String),

    /// A drag was delivered to a table that was not configured as resizable.
    #[error("column resizing is not enabled for this table")]
    ResizeDisabled,

    /// A column width string was neither a number nor a percentage.
    #[error("invalid column width '{0}': expected a pixel count or a percentage like '40%'")]
    InvalidWidth(String),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for gridtable operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::UnknownColumn("email".to_string());
        assert!(err.to_string().contains("unknown column"));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: TableError = yaml_err.into();
        assert!(matches!(err, TableError::Config(_)));
    }
}
