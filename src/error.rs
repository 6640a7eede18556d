//! Global error handling for dirprint
//!
//! Only fatal, run-aborting failures travel through this type. Per-file read
//! problems are rendered inline in the report instead.

use std::io;
use thiserror::Error;

/// Global error type for dirprint operations
#[derive(Error, Debug)]
pub enum DirPrintError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for dirprint operations
pub type Result<T> = std::result::Result<T, DirPrintError>;

/// Creates a DirPrintError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirPrintError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            DirPrintError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// `main` returns io::Result, so fatal errors surface with a non-zero exit
impl From<DirPrintError> for io::Error {
    fn from(err: DirPrintError) -> Self {
        match err {
            DirPrintError::Io(e) => e,
            other => {
                let kind = match other {
                    DirPrintError::PathNotFound(_) => io::ErrorKind::NotFound,
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}
