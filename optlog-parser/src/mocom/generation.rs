//! Generation tracker
//!
//! A single counter recording which optimization generation the current
//! block of rows belongs to. It starts at 0 and is only ever moved forward
//! by the two marker rules in the scanner:
//!
//! - a generation-block marker carrying generation `N` moves it to `N + 1`
//! - the final-results preamble carrying generation `M` moves it to `M + 1`
//!
//! Across the blocks of a well-formed log the value never decreases. After
//! the scan, the reported "total generations" diagnostic is the counter
//! minus one.

use std::fmt;

/// A generation token from a marker line that did not parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGenerationToken {
    pub token: String,
}

impl fmt::Display for InvalidGenerationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation token '{}' is not an integer", self.token)
    }
}

impl std::error::Error for InvalidGenerationToken {}

/// Monotonic generation counter for one conversion run.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    current: u32,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Generation tag for rows in the current block.
    pub fn value(&self) -> u32 {
        self.current
    }

    /// Move the counter to the successor of the generation named by a
    /// marker token. A trailing `:` on the token (as in
    /// `...for generation 5:`) is stripped before parsing.
    pub fn advance_past(&mut self, token: &str) -> Result<(), InvalidGenerationToken> {
        let digits = token.trim_end_matches(':');
        let generation: u32 = digits.parse().map_err(|_| InvalidGenerationToken {
            token: token.to_string(),
        })?;
        self.current = generation + 1;
        Ok(())
    }

    /// Total-generations diagnostic reported once the log is exhausted.
    pub fn total_generations(&self) -> i64 {
        i64::from(self.current) - 1
    }
}
