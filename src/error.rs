// Error type for delta parsing and application.
//
// Every failure is detected synchronously and surfaced to the caller;
// nothing is retried or silently recovered. Creating a delta has no error
// path at all — any pair of byte buffers is encodable.

use thiserror::Error;

/// A malformed, truncated, or mismatched delta.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeltaError {
    /// A read cursor advanced past the end of its buffer.
    #[error("read past end of delta")]
    OutOfBounds,

    /// The size record's integer was not followed by a newline.
    #[error("size integer not terminated by '\\n'")]
    MalformedSizeTerminator,

    /// A copy record's offset was not followed by ',' with input remaining.
    #[error("copy command not terminated by ','")]
    MalformedCopyTerminator,

    /// A copy record would push the output past the declared target size.
    #[error("copy exceeds output file size")]
    CopyExceedsOutput,

    /// A copy record's range runs past the end of the source buffer.
    #[error("copy extends past end of source")]
    CopyExceedsSource,

    /// An insert record would push the output past the declared target size.
    #[error("insert gives an output larger than predicted")]
    InsertExceedsOutput,

    /// An insert record claims more literal bytes than remain in the delta.
    #[error("insert count exceeds remaining delta bytes")]
    InsertExceedsDelta,

    /// The reconstructed output's checksum disagrees with the delta's.
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u64, actual: u64 },

    /// Total emitted bytes at the checksum record differ from the size record.
    #[error("generated size {actual} does not match predicted size {declared}")]
    SizeMismatch { declared: usize, actual: usize },

    /// A record terminator other than '@', ':', or ';'.
    #[error("unknown delta operator {0:#04x}")]
    UnknownOperator(u8),

    /// Input exhausted before a checksum record was reached.
    #[error("unterminated delta")]
    UnterminatedDelta,

    /// A base-64 integer overflows the accumulator or the host word size.
    #[error("integer overflow in delta")]
    IntegerOverflow,
}
