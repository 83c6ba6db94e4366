// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::HEADERS;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
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
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// First row is a header if it matches our column names.
pub fn detect_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .is_some_and(|first| first.len() == HEADERS.len() && first.iter().zip(HEADERS).all(|(a, b)| a == b));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as one string (Copy / Export / stdout).
pub fn to_export_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![
            row(&["plain", "with,comma", "with \"quote\"", "N/A"]),
            row(&["", "", "N/A", "Blank line"]),
        ];
        let out = to_export_string(None, &rows, ',');
        assert_eq!(
            out,
            "plain,\"with,comma\",\"with \"\"quote\"\"\",N/A\n,,N/A,Blank line\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let out = to_export_string(None, &[row(&["a,b", "c"])], '\t');
        assert_eq!(out, "a,b\tc\n");
    }

    #[test]
    fn parse_handles_quotes_and_crlf() {
        let text = "a,\"b,c\",\"d \"\"e\"\"\"\r\n,,N/A,Blank line\r\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![row(&["a", "b,c", "d \"e\""]), row(&["", "", "N/A", "Blank line"])]);
    }

    #[test]
    fn parse_keeps_last_row_without_newline() {
        assert_eq!(parse_rows("x,y", ','), vec![row(&["x", "y"])]);
        assert!(parse_rows("", ',').is_empty());
        assert!(parse_rows("\n\n", ',').is_empty());
    }

    #[test]
    fn detect_headers_only_for_our_columns() {
        let with = vec![row(&["Input", "Video ID", "Views", "Status"]), row(&["a", "b", "1", "Success"])];
        let (h, rows) = detect_headers(with);
        assert!(h.is_some());
        assert_eq!(rows.len(), 1);

        let without = vec![row(&["Input", "x"]), row(&["a", "b"])];
        let (h, rows) = detect_headers(without);
        assert!(h.is_none());
        assert_eq!(rows.len(), 2);
    }
}
