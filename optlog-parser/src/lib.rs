//! # optlog-parser
//!
//! A parser for the free-text run log written by the MOCOM multi-objective
//! optimizer. The log is semi-structured: three kinds of sections, each
//! introduced by a fixed marker line, carry whitespace-separated candidate
//! solutions decorated with noise characters. This crate turns one log into
//! a comma-separated table suitable for downstream statistical analysis.
//!
//! The conversion is a single forward pass. `mocom::convert` is the entry
//! point; `mocom::convert_to_writer` streams rows to an `io::Write` as they
//! are accepted instead of buffering the table.

pub mod mocom;
