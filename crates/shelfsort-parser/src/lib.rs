//! # shelfsort-parser
//!
//! Parser and renderer for scan-release collection names.
//!
//! This crate turns bracketed folder and file names like
//! `[Group (Author)] Title [English] (Digital)` into a structured
//! [`ParsedName`] and renders records back into the canonical layout. It
//! also carries a small video-filename normalizer. Everything here is pure
//! string work with no filesystem access.
//!
//! ## Quick Start
//!
//! ```
//! use shelfsort_parser::parse;
//!
//! let record = parse("[Circle (Writer)] Some Story [English]", false);
//!
//! assert_eq!(record.author.as_deref(), Some("Writer"));
//! assert_eq!(record.group.as_deref(), Some("Circle"));
//! assert_eq!(record.name.as_deref(), Some("Some Story"));
//! assert_eq!(record.tags, vec!["English"]);
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use shelfsort_parser::Parser;
//! use shelfsort_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .replace_underscores(false)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let record = parser.parse("Raw_Name", false);
//! assert_eq!(record.name.as_deref(), Some("Raw_Name"));
//! ```

pub mod config;
pub mod lexer;
pub mod model;
pub mod output;

mod parser;
mod video;

pub use model::{InvalidRecordError, ParsedName, KNOWN_LANGUAGES};
pub use video::normalize_video_name;

use config::ParserConfig;
use output::{CanonicalFormat, NameFormat};

/// Parse a collection name into a [`ParsedName`] using default settings.
///
/// `has_subfolders` says whether the named item contains further
/// directories; it only matters for input no pattern recognizes, which
/// falls back to an author for containers and to a title otherwise.
///
/// # Examples
///
/// ```
/// use shelfsort_parser::parse;
///
/// let record = parse("[Author] Title", false);
/// assert_eq!(record.author.as_deref(), Some("Author"));
/// assert_eq!(record.name.as_deref(), Some("Title"));
/// ```
pub fn parse(input: &str, has_subfolders: bool) -> ParsedName {
    Parser::default().parse(input, has_subfolders)
}

/// Render a [`ParsedName`] back into the canonical bracketed layout with the
/// built-in language table and no sanitizer.
///
/// # Examples
///
/// ```
/// use shelfsort_parser::{parse, render};
///
/// let record = parse("[Group (Author)] Title", false);
/// assert_eq!(render(&record).unwrap(), "[Group (Author)] Title");
/// ```
pub fn render(record: &ParsedName) -> Result<String, InvalidRecordError> {
    CanonicalFormat::new().format(record)
}

/// A configurable collection-name parser.
///
/// ```
/// use shelfsort_parser::Parser;
/// use shelfsort_parser::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::default());
/// let record = parser.parse("[Author] Title", false);
/// assert_eq!(record.author.as_deref(), Some("Author"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a collection name into a [`ParsedName`].
    pub fn parse(&self, input: &str, has_subfolders: bool) -> ParsedName {
        parser::parse_with_config(input, has_subfolders, &self.config)
    }
}
