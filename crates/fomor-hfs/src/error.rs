//! Error types for the HFS crate.

use thiserror::Error;

/// Errors that can occur when working with HFS archives.
///
/// Every structural violation aborts the parse of the whole archive; there
/// is no partial-archive recovery, and none of these conditions is worth
/// retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] fomor_common::Error),

    /// Could not find the end of central directory record.
    #[error("EOCD record could not be found")]
    EocdNotFound,

    /// A record did not start with the signature the preset declares.
    #[error("incorrect {record} signature found: {actual:#010x} (expected {expected:#010x})")]
    InvalidSignature {
        record: &'static str,
        expected: u32,
        actual: u32,
    },

    /// A local file header field disagrees with its central directory copy.
    #[error("{field} mismatch: local file header has {local}, central directory has {central}")]
    FieldMismatch {
        field: &'static str,
        local: u64,
        central: u64,
    },

    /// The local file name bytes disagree with the central directory copy.
    #[error("file name mismatch between local file header and central directory")]
    NameMismatch,

    /// The local extra field bytes disagree with the central directory copy.
    #[error("extra field mismatch between local file header and central directory")]
    ExtraFieldMismatch,

    /// Unknown cipher method name requested.
    #[error("unsupported cipher method: {0}")]
    UnsupportedCipher(String),

    /// The XOR cipher requires a non-empty power-of-two key length.
    #[error("invalid cipher key length: {0} (must be a non-zero power of two)")]
    InvalidCipherKey(usize),

    /// Decompression error.
    #[error("decompression error: {0}")]
    Decompression(String),
}

/// Result type for HFS operations.
pub type Result<T> = std::result::Result<T, Error>;
