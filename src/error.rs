//! Error handling for the bedrock library
//!
//! One error enum covers every fallible operation in the crate. Precondition
//! violations are debug-asserted and surface as `Err` values in release
//! builds with no side effects on the target.

use thiserror::Error;

/// Main error type for the bedrock library
#[derive(Error, Debug)]
pub enum BedrockError {
    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Growth would exceed the container's hard capacity bound
    #[error("Capacity exceeded: requested {requested} slots, limit {limit}")]
    CapacityExceeded {
        /// Number of slots the operation needed
        requested: usize,
        /// The hard upper bound
        limit: usize,
    },

    /// A cursor outlived a structural mutation of its container
    #[error("Stale cursor: stamped generation {stamped}, container generation {current}")]
    StaleCursor {
        /// Generation the cursor was created under
        stamped: u64,
        /// The container's current generation
        current: u64,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// Invalid data or arguments
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },
}

impl BedrockError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(requested: usize, limit: usize) -> Self {
        Self::CapacityExceeded { requested, limit }
    }

    /// Create a stale cursor error
    pub fn stale_cursor(stamped: u64, current: u64) -> Self {
        Self::StaleCursor { stamped, current }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData { message: message.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => true,
            Self::CapacityExceeded { .. } => false,
            Self::OutOfBounds { .. } => false,
            Self::StaleCursor { .. } => false,
            Self::Configuration { .. } => false,
            Self::InvalidData { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::OutOfMemory { .. } => "memory",
            Self::CapacityExceeded { .. } => "capacity",
            Self::StaleCursor { .. } => "cursor",
            Self::Configuration { .. } => "config",
            Self::InvalidData { .. } => "data",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BedrockError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(BedrockError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(BedrockError::invalid_data(format!(
            "Invalid range: start {} > end {}",
            start, end
        )));
    }
    if end > size {
        return Err(BedrockError::out_of_bounds(end, size));
    }
    Ok(())
}
