//! # Secure Password Generation Core
//!
//! A generation-and-validation engine for passwords built from a constrained
//! character pool, backed by a cryptographically secure random source.
//!
//! ## Features
//!
//! - Character pools built from class selections (lower/upper/digits/symbols)
//!   or the fixed URL-safe unreserved set
//! - Symbol overrides, exclusion sets, and ambiguous-glyph removal
//! - Constraint validation: length, no-repeat, per-class presence
//! - Unbiased Fisher-Yates shuffling and bias-free uniform draws
//! - Entropy estimate for the random portion
//!
//! Presentation concerns (argument parsing, output formatting, clipboard,
//! exit codes) belong to the caller; every failure comes back as a typed
//! error.
//!
//! ## Example
//!
//! ```
//! use spgcore::{build_pool, generate, validate, GenerationConfig, PoolSelection};
//!
//! let selection = PoolSelection {
//!     lower: true,
//!     digits: true,
//!     ..Default::default()
//! };
//! let (pool, classes) = build_pool(&selection).unwrap();
//!
//! let config = GenerationConfig {
//!     length: 12,
//!     require_classes: true,
//!     ..Default::default()
//! };
//! validate(config.length, &classes, config.require_classes, config.no_repeat, &pool).unwrap();
//!
//! let passwords = generate(&pool, &classes, &config).unwrap();
//! assert_eq!(passwords[0].chars().count(), 12);
//! ```

pub mod entropy;
pub mod error;
pub mod generate;
pub mod pool;
pub mod validate;

// Re-export main types
pub use entropy::bits_of_entropy;
pub use error::{GenerationError, PoolError, ValidationError};
pub use generate::{generate, GenerationConfig};
pub use pool::{build_pool, class_membership, CharacterClass, CharacterPool, PoolSelection};
pub use validate::validate;

/// Default length of the random portion
pub const DEFAULT_LENGTH: usize = 16;

/// Default number of passwords per request
pub const DEFAULT_COUNT: usize = 1;
