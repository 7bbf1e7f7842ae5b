//! Shelfsort-Common: shared error types and path utilities.
//!
//! This crate provides common functionality used across shelfsort:
//!
//! - **Error Handling**: Common error type and result alias
//! - **Path Utilities**: Functions to detect file types by extension
//!
//! # Examples
//!
//! ```
//! use shelfsort_common::{Error, Result};
//! use shelfsort_common::paths::is_archive_file;
//! use std::path::Path;
//!
//! assert!(is_archive_file(Path::new("volume01.cbz")));
//!
//! fn example() -> Result<()> {
//!     Err(Error::source_not_found("/missing"))
//! }
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
