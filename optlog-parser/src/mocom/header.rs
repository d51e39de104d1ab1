//! Header resolver
//!
//! The starting-population section names only the decision variables; the
//! objective-test, rank and solution-number columns are implicit. The
//! resolver synthesizes the full output header exactly once, on the first
//! accepted row of that section: the number of objective slots is inferred
//! from the row width, and each slot is named `OF_<descriptor>` using the
//! catalog in link order. Literal `rank`, `soln_num` and `gennum` columns
//! close the header.
//!
//! Resolution is modeled as an explicit two-state status rather than an
//! ambient flag, so idempotence and the "resolve before first write"
//! invariant are checkable.

use crate::mocom::catalog::ObjectiveFunctionCatalog;
use crate::mocom::Row;
use std::fmt;

/// Columns reserved at the tail of every row: `rank`, `soln_num`, `gennum`.
const RESERVED_TRAILING: usize = 3;

/// The resolved output column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Fewer catalog names than the inferred objective slots require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMismatch {
    pub required: usize,
    pub available: usize,
}

impl fmt::Display for CatalogMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header needs {} objective-function names but the catalog holds {}",
            self.required, self.available
        )
    }
}

impl std::error::Error for CatalogMismatch {}

#[derive(Debug)]
enum Resolution {
    Unresolved,
    Resolved(Header),
}

/// One-shot synthesis of the output header.
#[derive(Debug)]
pub struct HeaderResolver {
    state: Resolution,
}

impl HeaderResolver {
    pub fn new() -> Self {
        Self {
            state: Resolution::Unresolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, Resolution::Resolved(_))
    }

    pub fn header(&self) -> Option<&Header> {
        match &self.state {
            Resolution::Resolved(header) => Some(header),
            Resolution::Unresolved => None,
        }
    }

    /// Resolve the header from the base columns and the first accepted row.
    ///
    /// Returns `Some(header)` when this call performed the resolution and
    /// `None` when the header was already resolved; later calls are no-ops.
    pub fn resolve(
        &mut self,
        base_columns: &[String],
        first_row: &Row,
        catalog: &ObjectiveFunctionCatalog,
    ) -> Result<Option<&Header>, CatalogMismatch> {
        if self.is_resolved() {
            return Ok(None);
        }

        let slots = first_row
            .len()
            .saturating_sub(base_columns.len() + RESERVED_TRAILING);
        if slots > catalog.len() {
            return Err(CatalogMismatch {
                required: slots,
                available: catalog.len(),
            });
        }

        let mut columns = base_columns.to_vec();
        for index in 0..slots {
            // Guarded by the length check above
            let descriptor = catalog.get(index).unwrap_or_default();
            columns.push(format!("OF_{}", descriptor));
        }
        columns.push("rank".to_string());
        columns.push("soln_num".to_string());
        columns.push("gennum".to_string());

        self.state = Resolution::Resolved(Header { columns });
        Ok(self.header())
    }
}

impl Default for HeaderResolver {
    fn default() -> Self {
        Self::new()
    }
}
