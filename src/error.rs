//! Error types for Drishti

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti error types
///
/// Errors are only raised at the boundaries (construction, map ingestion,
/// buffer hand-off). The per-beam path never fails: a point outside the
/// map reads as distance 0 and terminates the ray like an obstacle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration value outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Occupancy sequence does not cover the grid
    #[error("Map size mismatch: expected {expected} cells, got {actual}")]
    MapSizeMismatch {
        /// width * height of the target grid
        expected: usize,
        /// Length of the supplied sequence
        actual: usize,
    },

    /// Caller-supplied output buffer has the wrong length
    #[error("Scan buffer length mismatch: expected {expected} beams, got {actual}")]
    BufferLength {
        /// Configured beam count
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
