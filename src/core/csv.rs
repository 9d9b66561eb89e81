//! Minimal CSV parser for the ingest commands.
//!
//! Quote-aware and CRLF tolerant; enough for the salary/draft/coach
//! spreadsheet exports this tool consumes. Vendor-specific spreadsheet
//! quirks are out of scope.

use std::mem::take;

/// Parse delimiter-separated rows (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Find the index of a header column matching any of the given aliases
/// (case-insensitive, surrounding whitespace ignored).
pub fn header_index(header: &[String], aliases: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let cell = cell.trim();
        aliases.iter().any(|a| cell.eq_ignore_ascii_case(a))
    })
}
