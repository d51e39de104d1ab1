//! Table writers
//!
//! The scanner pushes the resolved header and every accepted row into a
//! `RowSink`. Two sinks are provided: `TableWriter` serializes straight to
//! an output stream in encounter order (the production path, nothing is
//! buffered or revisited), and `TableBuffer` collects the table in memory
//! for callers that want the `(header, rows)` contract or for tests.

use crate::mocom::header::Header;
use crate::mocom::Row;
use std::io::{self, Write};

/// Destination for the resolved header and accepted rows.
pub trait RowSink {
    /// Called exactly once per conversion, immediately after the header
    /// resolves and before any row of the starting-population block.
    fn accept_header(&mut self, header: &Header) -> io::Result<()>;

    /// Called for every accepted row, in encounter order.
    fn accept_row(&mut self, row: &Row) -> io::Result<()>;
}

/// Streams the table as comma-joined lines, fields unquoted.
pub struct TableWriter<W: Write> {
    out: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush and hand back the underlying stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RowSink for TableWriter<W> {
    fn accept_header(&mut self, header: &Header) -> io::Result<()> {
        writeln!(self.out, "{}", header.columns().join(","))
    }

    fn accept_row(&mut self, row: &Row) -> io::Result<()> {
        writeln!(self.out, "{}", row.join(","))
    }
}

/// Collects the table in memory.
#[derive(Debug, Default)]
pub struct TableBuffer {
    pub header: Option<Header>,
    pub rows: Vec<Row>,
}

impl TableBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowSink for TableBuffer {
    fn accept_header(&mut self, header: &Header) -> io::Result<()> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn accept_row(&mut self, row: &Row) -> io::Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}
