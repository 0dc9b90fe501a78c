/// Error type for the `append_*`, `read_*`, and slicing functions of this crate.
///
/// Every variant is raised before any bytes are written, so a builder that returns one of these
/// is left exactly as it was before the call.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum BufferError {
    /// An integer width outside of `1..=8` bytes was requested.
    #[error("integer width must be between 1 and 8 bytes, got {byte_count}")]
    InvalidWidth {
        /// The requested width, in bytes.
        byte_count: usize,
    },

    /// The value does not fit in the requested number of bytes.
    #[error("value {value:#x} does not fit in {byte_count} byte(s)")]
    ValueTooWide {
        /// The value that was rejected.
        value: u64,
        /// The requested width, in bytes.
        byte_count: usize,
    },

    /// A ranged append asked for bytes beyond the end of its source.
    #[error("range {start}+{count} is out of bounds for a source of {len} byte(s)")]
    OutOfBounds {
        /// First index of the requested range.
        start: usize,
        /// Number of bytes requested.
        count: usize,
        /// Length of the source.
        len: usize,
    },

    /// A slice was requested whose start is not before its (inclusive) end, or whose end lies
    /// outside the source.
    #[error("cannot slice {start}..={end} from a source of {len} byte(s)")]
    InvalidSlice {
        /// First index of the requested slice.
        start: usize,
        /// Last index (inclusive) of the requested slice.
        end: usize,
        /// Length of the source.
        len: usize,
    },

    /// A `read_*` method reached the end of the input data, but requires more data to finish
    /// reading the value.
    #[error("more data is needed to decode the value")]
    NeedsMoreData,
}

/// Result alias used throughout this crate.
pub type Result<T> = core::result::Result<T, BufferError>;
