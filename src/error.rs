use serde::Serialize;

use thiserror::Error;

/// Reasons a data block, record or item could not be decoded.
///
/// Every variant is terminal for the decode that raised it. Sibling records
/// in other data blocks are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum DecodeError {
    #[error("truncated buffer: {needed} octets needed, {available} available")]
    TruncatedBuffer { needed: usize, available: usize },

    #[error("FSPEC does not terminate within {max} octets")]
    MalformedFspec { max: usize },

    #[error("FRN {frn} is not defined for category {category:03}")]
    UndefinedItem { category: u8, frn: usize },

    #[error("malformed {item}: {reason}")]
    MalformedItem {
        item: &'static str,
        reason: &'static str,
    },

    #[error("invalid length {length} for category {category:03} data block")]
    InvalidBlockLength { category: u8, length: usize },
}

impl DecodeError {
    /// Short label used for the `error_type` metric label
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::TruncatedBuffer { .. } => "truncated_buffer",
            DecodeError::MalformedFspec { .. } => "malformed_fspec",
            DecodeError::UndefinedItem { .. } => "undefined_item",
            DecodeError::MalformedItem { .. } => "malformed_item",
            DecodeError::InvalidBlockLength { .. } => "invalid_block_length",
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
