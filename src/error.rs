//! Error types for rosalib

use thiserror::Error;

/// Result type alias for rosalib operations
pub type Result<T> = std::result::Result<T, RosalibError>;

/// Error types that can occur in rosalib
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosalibError {
    /// Character outside the declared alphabet
    #[error("Invalid symbol '{}' at position {position}", char::from(*.symbol))]
    InvalidSymbol {
        /// Byte offset of the offending character
        position: usize,
        /// The offending character
        symbol: u8,
    },

    /// FASTA structural violation
    #[error("Malformed FASTA record: {msg}")]
    MalformedRecord {
        /// Error message
        msg: String,
    },

    /// Ranking requested over zero records
    #[error("Empty input: no records to rank")]
    EmptyInput,

    /// Out-of-domain numeric argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Recurrence result exceeds the integer range
    #[error("Population count overflow at month {months}")]
    Overflow {
        /// Month index at which the count no longer fits in u64
        months: u32,
    },
}
