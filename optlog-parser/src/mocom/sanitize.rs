//! Row sanitizer
//!
//! MOCOM decorates data lines with structural noise: parameter values are
//! parenthesized, the set number carries a trailing colon, and some variants
//! of the log separate objective values with `=`. Sanitizing strips every
//! occurrence of `(`, `)`, `:` and `=`, appends the current generation tag,
//! and splits on whitespace.
//!
//! A row whose second token is the literal `Bad` marks a candidate the
//! optimizer rejected; such rows are excluded from the output. Exclusion is
//! expected and counted, not an error.

use crate::mocom::Row;
use once_cell::sync::Lazy;
use regex::Regex;

/// The characters MOCOM uses as decoration around data tokens.
static STRIP_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[():=]").expect("valid strip set"));

/// Token marking a candidate solution the optimizer rejected.
const BAD_TOKEN: &str = "Bad";

/// Sanitize one raw data line, tagging it with `gennum`.
///
/// Returns `None` when the row is excluded (`Bad` at token index 1).
/// Everything outside the strip set and surrounding whitespace is carried
/// into the row verbatim.
pub fn sanitize_row(line: &str, gennum: u32) -> Option<Row> {
    let stripped = STRIP_CHARS.replace_all(line, "");
    let mut row: Row = stripped.split_whitespace().map(str::to_string).collect();
    row.push(gennum.to_string());

    if row.get(1).map(String::as_str) == Some(BAD_TOKEN) {
        return None;
    }
    Some(row)
}
