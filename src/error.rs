use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a single conversion.
///
/// Every failure path of [`crate::convert`] maps onto exactly one variant.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input path does not end in the literal extension `.csv`
    /// (case-sensitive). Raised before any file I/O is attempted.
    #[error("input file {} must have the .csv extension", .path.display())]
    InvalidExtension { path: PathBuf },

    /// The input could not be opened, read, or parsed as CSV. Carries the
    /// underlying failure message. No output file has been touched.
    #[error("CSV error: {0}")]
    ParseFailed(String),

    /// The output file could not be created or written. The already-parsed
    /// records are discarded; there is no retry.
    #[error("unable to write {}: {}", .path.display(), .message)]
    WriteFailed { path: PathBuf, message: String },
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_path() {
        let err = ConversionError::InvalidExtension {
            path: PathBuf::from("data.txt"),
        };
        assert!(err.to_string().contains("data.txt"));
        assert!(err.to_string().contains(".csv"));

        let err = ConversionError::WriteFailed {
            path: PathBuf::from("out.json"),
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("out.json"));
        assert!(err.to_string().contains("disk full"));
    }
}
