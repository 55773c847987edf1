//! Error types for wire-format decoding.

/// Errors that can occur when decoding hex-string fields of wire records.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A hex-string field failed to parse.
    ///
    /// This covers a missing `0x` prefix, a wrong length for fixed-width
    /// values (addresses, hashes), non-hex characters, and quantities that
    /// exceed their integer range.
    #[error("malformed hex string {input:?}: {details}")]
    MalformedHex {
        /// The input that failed to parse
        input: String,
        /// Why the input failed to parse
        details: String,
    },
}

impl WireError {
    /// Create a `MalformedHex` error.
    pub fn malformed_hex(input: impl Into<String>, details: impl Into<String>) -> Self {
        WireError::MalformedHex {
            input: input.into(),
            details: details.into(),
        }
    }
}
