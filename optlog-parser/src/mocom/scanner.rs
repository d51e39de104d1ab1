//! Section scanner
//!
//! The core state machine. Outside a section it scans for one of three
//! fixed marker lines; everything else is dropped silently. On a marker it
//! updates the generation tracker, consumes the section's fixed preamble,
//! then pulls data lines through the sanitizer until a blank line ends the
//! block. Running out of input inside a block is fatal: there is no
//! partial-block recovery.
//!
//! Marker recognition is exact-prefix matching against the literal marker
//! strings, not fixed-width slicing.

use crate::mocom::catalog::ObjectiveFunctionCatalog;
use crate::mocom::convert::ConvertError;
use crate::mocom::cursor::LineCursor;
use crate::mocom::generation::GenerationTracker;
use crate::mocom::header::HeaderResolver;
use crate::mocom::sanitize::sanitize_row;
use crate::mocom::writer::RowSink;
use std::fmt;

/// Marker opening the random starting-parameter section.
pub const STARTING_POPULATION_MARKER: &str = "Determining starting parameters...";
/// Marker opening one generation's block of candidate solutions.
pub const GENERATION_BLOCK_MARKER: &str = "Current generation for generation ";
/// Marker opening the final pareto-set section.
pub const FINAL_RESULTS_MARKER: &str = "Results for multi-objective global optimization:";

/// The three section kinds a MOCOM log contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    StartingPopulation,
    GenerationBlock,
    FinalResults,
}

impl SectionKind {
    /// Match a raw line against the marker set.
    pub fn match_marker(line: &str) -> Option<SectionKind> {
        if line.starts_with(STARTING_POPULATION_MARKER) {
            Some(SectionKind::StartingPopulation)
        } else if line.starts_with(GENERATION_BLOCK_MARKER) {
            Some(SectionKind::GenerationBlock)
        } else if line.starts_with(FINAL_RESULTS_MARKER) {
            Some(SectionKind::FinalResults)
        } else {
            None
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::StartingPopulation => "starting population",
            SectionKind::GenerationBlock => "generation block",
            SectionKind::FinalResults => "final results",
        };
        write!(f, "{}", name)
    }
}

/// Counters reported once the scan finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Rows pushed to the sink.
    pub rows_accepted: usize,
    /// Rows dropped because of the `Bad` marker.
    pub rows_excluded: usize,
    /// Generation total diagnostic (`tracker - 1`).
    pub total_generations: i64,
}

/// The marker-driven state machine driving one conversion run.
pub struct SectionScanner<'a, S: RowSink> {
    cursor: LineCursor<'a>,
    tracker: GenerationTracker,
    resolver: HeaderResolver,
    catalog: &'a ObjectiveFunctionCatalog,
    sink: &'a mut S,
    rows_accepted: usize,
    rows_excluded: usize,
}

impl<'a, S: RowSink> SectionScanner<'a, S> {
    pub fn new(
        lines: &'a [&'a str],
        catalog: &'a ObjectiveFunctionCatalog,
        sink: &'a mut S,
    ) -> Self {
        Self {
            cursor: LineCursor::new(lines),
            tracker: GenerationTracker::new(),
            resolver: HeaderResolver::new(),
            catalog,
            sink,
            rows_accepted: 0,
            rows_excluded: 0,
        }
    }

    /// Consume the whole log in a single forward pass.
    pub fn scan(mut self) -> Result<ScanOutcome, ConvertError> {
        while let Some(line) = self.cursor.next_line() {
            match SectionKind::match_marker(line) {
                Some(SectionKind::StartingPopulation) => self.scan_starting_population()?,
                Some(SectionKind::GenerationBlock) => self.scan_generation_block(line)?,
                Some(SectionKind::FinalResults) => self.scan_final_results()?,
                // Marker-driven, not line-driven: chatter is dropped.
                None => {}
            }
        }
        Ok(ScanOutcome {
            rows_accepted: self.rows_accepted,
            rows_excluded: self.rows_excluded,
            total_generations: self.tracker.total_generations(),
        })
    }

    /// Starting population: one separator line, then the base header line,
    /// then data rows tagged with generation 0 regardless of the tracker.
    /// The first accepted row triggers header resolution.
    fn scan_starting_population(&mut self) -> Result<(), ConvertError> {
        let section = SectionKind::StartingPopulation;
        self.require_line(section)?;

        let header_line = self.require_line(section)?;
        let mut base_columns = vec!["setnum".to_string()];
        base_columns.extend(header_line.split_whitespace().map(str::to_string));

        loop {
            let line = self.require_line(section)?;
            if line.is_empty() {
                return Ok(());
            }
            let row = match sanitize_row(line, 0) {
                Some(row) => row,
                None => {
                    self.rows_excluded += 1;
                    continue;
                }
            };

            if let Some(header) = self
                .resolver
                .resolve(&base_columns, &row, self.catalog)
                .map_err(|err| ConvertError::CatalogMismatch {
                    required: err.required,
                    available: err.available,
                })?
            {
                self.sink.accept_header(header).map_err(ConvertError::io)?;
            }

            self.sink.accept_row(&row).map_err(ConvertError::io)?;
            self.rows_accepted += 1;
        }
    }

    /// Generation block: the marker's trailing token names the generation
    /// just finished, so the tracker moves to its successor before three
    /// preamble lines are skipped.
    fn scan_generation_block(&mut self, marker_line: &str) -> Result<(), ConvertError> {
        let section = SectionKind::GenerationBlock;
        let token = marker_line.split_whitespace().last().unwrap_or_default();
        self.advance_tracker(section, token)?;

        for _ in 0..3 {
            self.require_line(section)?;
        }
        self.consume_data_lines(section)
    }

    /// Final results: the line after the marker carries the generation
    /// number as its second token; two further preamble lines follow.
    fn scan_final_results(&mut self) -> Result<(), ConvertError> {
        let section = SectionKind::FinalResults;
        let generation_line = self.require_line(section)?;
        let token = generation_line
            .split_whitespace()
            .nth(1)
            .unwrap_or_default();
        self.advance_tracker(section, token)?;

        for _ in 0..2 {
            self.require_line(section)?;
        }
        self.consume_data_lines(section)
    }

    /// Pull data lines through the sanitizer until the blank terminator.
    fn consume_data_lines(&mut self, section: SectionKind) -> Result<(), ConvertError> {
        loop {
            let line = self.require_line(section)?;
            if line.is_empty() {
                return Ok(());
            }
            match sanitize_row(line, self.tracker.value()) {
                Some(row) => {
                    self.sink.accept_row(&row).map_err(ConvertError::io)?;
                    self.rows_accepted += 1;
                }
                None => self.rows_excluded += 1,
            }
        }
    }

    fn advance_tracker(&mut self, section: SectionKind, token: &str) -> Result<(), ConvertError> {
        self.tracker
            .advance_past(token)
            .map_err(|err| ConvertError::InvalidGenerationToken {
                section,
                token: err.token,
                line: self.cursor.offset(),
            })
    }

    /// Next line inside a block; exhaustion here is a malformed section.
    fn require_line(&mut self, section: SectionKind) -> Result<&'a str, ConvertError> {
        self.cursor
            .next_line()
            .ok_or(ConvertError::MalformedSection {
                section,
                line: self.cursor.offset(),
            })
    }
}
