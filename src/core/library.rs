use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Storage { retryable, .. } => { *retryable }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        // only transient kinds are worth another attempt at the prompt
        let retryable = matches!(err.kind(),
            ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock);
        LibraryError::storage(
            format!("data file io {:?}", err).as_str(),
            Some(err.kind().to_string()), retryable)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("data file parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// The lifecycle state of a book copy. The wire values are the Russian
// vocabulary existing data files use.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    #[serde(rename = "в наличии")]
    Available,
    #[serde(rename = "выдана")]
    CheckedOut,
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "в наличии" => Ok(BookStatus::Available),
            "выдана" => Ok(BookStatus::CheckedOut),
            other => Err(LibraryError::validation(
                format!("Invalid status {:?}, expected 'в наличии' or 'выдана'", other).as_str(),
                Some("invalid_status".to_string()))),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "в наличии"),
            BookStatus::CheckedOut => write!(f, "выдана"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::str::FromStr;
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_create_storage_error() {
        assert!(matches!(LibraryError::storage("test", None, false), LibraryError::Storage{ message: _, reason_code: _, retryable: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::storage("test", None, false).retryable());
        assert_eq!(true, LibraryError::storage("test", None, true).retryable());
        assert_eq!(false, LibraryError::duplicate_key("test").retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
    }

    #[test]
    fn test_should_convert_io_error() {
        let denied = LibraryError::from(std::io::Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(denied, LibraryError::Storage{ message: _, reason_code: _, retryable: false }));
        let interrupted = LibraryError::from(std::io::Error::new(ErrorKind::Interrupted, "interrupted"));
        assert!(matches!(interrupted, LibraryError::Storage{ message: _, reason_code: _, retryable: true }));
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<String>>("not json").err().expect("should fail parsing");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::CheckedOut,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BookStatus::from_str(str.as_str()).expect("should parse status");
            assert_eq!(status, str_status);
        }
    }

    #[test]
    fn test_should_reject_unknown_book_status() {
        let res = BookStatus::from_str("списана");
        assert!(matches!(res, Err(LibraryError::Validation{ message: _, reason_code: _ })));
    }
}
