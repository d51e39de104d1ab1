//! MOCOM optimization-log conversion.
//!
//! Component layout, leaves first:
//!
//! - [`cursor`]     single-pass forward iterator over the log lines
//! - [`sanitize`]   noise stripping and tokenization of data lines
//! - [`catalog`]    ordered objective-function descriptors from configuration
//! - [`generation`] the running generation counter
//! - [`header`]     one-shot synthesis of the output column header
//! - [`scanner`]    the marker-driven section state machine
//! - [`writer`]     row sinks: streaming CSV writer and in-memory buffer
//! - [`convert`]    entry points and the fatal error taxonomy

pub mod catalog;
pub mod convert;
pub mod cursor;
pub mod generation;
pub mod header;
pub mod sanitize;
pub mod scanner;
pub mod writer;

pub use catalog::ObjectiveFunctionCatalog;
pub use convert::{convert, convert_to_writer, Conversion, ConvertError, ConvertSummary};
pub use header::Header;
pub use scanner::SectionKind;

/// One accepted data row: the sanitized tokens of a log line plus the
/// trailing generation tag appended by the scanner.
pub type Row = Vec<String>;
