//! Conversion entry points and the fatal error taxonomy.
//!
//! All fatal errors abort the run immediately; there is no partial-success
//! mode. Output already flushed by the streaming variant must be treated as
//! discardable by the caller. The tool is deterministic over a fixed input,
//! so nothing is retried.

use crate::mocom::catalog::ObjectiveFunctionCatalog;
use crate::mocom::header::Header;
use crate::mocom::scanner::{ScanOutcome, SectionKind, SectionScanner};
use crate::mocom::writer::{TableBuffer, TableWriter};
use crate::mocom::Row;
use std::fmt;
use std::io::{self, Write};

/// Fatal conversion failures. Line offsets are 0-based into the input log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input exhausted before a block's preamble or blank terminator.
    MalformedSection { section: SectionKind, line: usize },
    /// A generation marker's numeric token failed to parse.
    InvalidGenerationToken {
        section: SectionKind,
        token: String,
        line: usize,
    },
    /// Fewer catalog names than the header's objective slots require.
    CatalogMismatch { required: usize, available: usize },
    /// The output stream failed.
    Io(String),
}

impl ConvertError {
    pub(crate) fn io(err: io::Error) -> Self {
        ConvertError::Io(err.to_string())
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MalformedSection { section, line } => write!(
                f,
                "log ended inside a {} section (last line read: {})",
                section, line
            ),
            ConvertError::InvalidGenerationToken {
                section,
                token,
                line,
            } => write!(
                f,
                "generation token '{}' in a {} section is not an integer (line {})",
                token, section, line
            ),
            ConvertError::CatalogMismatch {
                required,
                available,
            } => write!(
                f,
                "header needs {} objective-function names but the basin configuration declares {}",
                required, available
            ),
            ConvertError::Io(msg) => write!(f, "writing output failed: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

/// The buffered result of one conversion run.
#[derive(Debug)]
pub struct Conversion {
    /// Resolved column header. `None` when the log contained no
    /// starting-population section; any rows were emitted header-less,
    /// matching the writer contract.
    pub header: Option<Header>,
    /// Accepted rows in encounter order.
    pub rows: Vec<Row>,
    /// Generation total diagnostic (`tracker - 1` after the scan).
    pub total_generations: i64,
    /// Rows dropped because of the `Bad` marker.
    pub excluded_rows: usize,
}

/// Counters from a streaming conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub rows_written: usize,
    pub total_generations: i64,
    pub excluded_rows: usize,
}

impl From<ScanOutcome> for ConvertSummary {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            rows_written: outcome.rows_accepted,
            total_generations: outcome.total_generations,
            excluded_rows: outcome.rows_excluded,
        }
    }
}

/// Convert a log, buffering the table in memory.
pub fn convert(
    lines: &[&str],
    catalog: &ObjectiveFunctionCatalog,
) -> Result<Conversion, ConvertError> {
    let mut buffer = TableBuffer::new();
    let outcome = SectionScanner::new(lines, catalog, &mut buffer).scan()?;
    Ok(Conversion {
        header: buffer.header,
        rows: buffer.rows,
        total_generations: outcome.total_generations,
        excluded_rows: outcome.rows_excluded,
    })
}

/// Convert a log, streaming rows to `out` as they are accepted.
///
/// The stream is flushed before returning on success. On failure the
/// partial output is discardable; the stream is still released.
pub fn convert_to_writer<W: Write>(
    lines: &[&str],
    catalog: &ObjectiveFunctionCatalog,
    out: W,
) -> Result<ConvertSummary, ConvertError> {
    let mut writer = TableWriter::new(out);
    let outcome = SectionScanner::new(lines, catalog, &mut writer).scan()?;
    writer.finish().map_err(ConvertError::io)?;
    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_section_and_line() {
        let err = ConvertError::MalformedSection {
            section: SectionKind::GenerationBlock,
            line: 41,
        };
        let msg = err.to_string();
        assert!(msg.contains("generation block"));
        assert!(msg.contains("41"));
    }

    #[test]
    fn test_empty_log_converts_to_nothing() {
        let catalog = ObjectiveFunctionCatalog::from_descriptors(["AET"]);
        let conversion = convert(&[], &catalog).unwrap();
        assert!(conversion.header.is_none());
        assert!(conversion.rows.is_empty());
        assert_eq!(conversion.excluded_rows, 0);
        // No generation marker was ever seen
        assert_eq!(conversion.total_generations, -1);
    }

    #[test]
    fn test_chatter_only_log_is_dropped_silently() {
        let catalog = ObjectiveFunctionCatalog::from_descriptors(["AET"]);
        let lines = ["MOCOM-UA optimization", "random diagnostics", ""];
        let conversion = convert(&lines, &catalog).unwrap();
        assert!(conversion.rows.is_empty());
    }
}
