// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{detect_headers, parse_rows, to_export_string};
use crate::data::{self, ResultRow};

/// Rows rendered with the export options (format + headers policy).
pub fn export_string(export: &ExportOptions, rows: &[ResultRow]) -> String {
    let headers = export.include_headers.then(data::headers);
    to_export_string(headers.as_deref(), &data::table_cells(rows), export.delim())
}

/// Write the results table to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    rows: &[ResultRow],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_string(export, rows))?;
    Ok(path)
}

/// Read an exported file back: (headers if present, rows).
pub fn read_export(
    path: &Path,
    sep: char,
) -> Result<(Option<Vec<String>>, Vec<Vec<String>>), Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(detect_headers(parse_rows(&text, sep)))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
