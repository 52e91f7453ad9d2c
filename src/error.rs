//! Error types for the password generation core

use thiserror::Error;

/// Errors from character pool construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// No character class and no url-safe mode chosen
    #[error("no character classes selected")]
    EmptySelection,

    /// Filters removed every candidate character
    #[error("character pool is empty after filters")]
    EmptyPool,
}

/// Errors from constraint validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Requested length is below 1
    #[error("length must be at least 1")]
    InvalidLength,

    /// No-repeat requested but the pool cannot supply enough distinct characters
    #[error("no-repeat requested but length ({length}) exceeds pool size ({pool_size})")]
    PoolTooSmall { length: usize, pool_size: usize },

    /// One or more required classes have no characters left in the pool
    #[error("required classes are empty after filters: {}", .0.join(", "))]
    UnsatisfiableClass(Vec<String>),

    /// Length smaller than the number of mandatory classes
    #[error("length ({length}) must be at least the number of required classes ({classes})")]
    LengthBelowClassCount { length: usize, classes: usize },
}

/// Errors from password generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No-repeat fill ran out of unused characters after class seeding
    #[error("not enough unique characters to satisfy no-repeat with the current pool")]
    InsufficientUniqueChars,
}
