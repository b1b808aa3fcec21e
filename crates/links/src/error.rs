//! Link Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

use crate::models::{CudaVersion, InstallerKind};

/// A link lookup error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for link lookups.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No installer is known for the requested version. Pick another version.
    #[display("unknown CUDA version for {installer} installer: {version}")]
    UnknownVersion {
        /// The version that was asked for.
        version: CudaVersion,
        /// Which directory was searched.
        installer: InstallerKind,
    },
    /// A string could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending input.
        value: String,
    },
    /// A URL in the release table is not a valid absolute URL.
    #[display("invalid download URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The tables are compiled in, asking again gives the same answer.
        false
    }
}
