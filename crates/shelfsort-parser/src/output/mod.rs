//! Output formatting for parsed names.
//!
//! Formatters turn a [`crate::model::ParsedName`] back into text. Each
//! formatter owns one naming convention; the canonical one reproduces the
//! bracketed scan-release layout used for organized library folders.
//!
//! # Example
//!
//! ```
//! use shelfsort_parser::{parse, output::{NameFormat, CanonicalFormat}};
//!
//! let record = parse("[Group (Author)] Title [English]", false);
//! let rendered = CanonicalFormat::new().format(&record).unwrap();
//! assert_eq!(rendered, "[Group (Author)] Title [English]");
//! ```

mod canonical;

pub use canonical::CanonicalFormat;

/// Trait for rendering parsed names into consumer-specific output.
pub trait NameFormat {
    /// The output type produced by this formatter.
    type Output;

    /// Render a parsed name.
    fn format(&self, record: &crate::model::ParsedName) -> Self::Output;
}
