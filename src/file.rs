// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::error::{ReachError, Result};
use crate::table::ReachTable;

/// Render the table in the export format.
pub fn export_contents(table: &ReachTable, format: ExportFormat, include_headers: bool) -> Result<String> {
    match format.delimiter() {
        Some(sep) => Ok(to_export_string(
            &table.headers(),
            &table.string_rows(),
            include_headers,
            sep,
        )),
        None => {
            let mut s = serde_json::to_string_pretty(&table.to_json())?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write the table where `ExportOptions` points. Returns the final path,
/// or None when no output path was set.
pub fn write_export(export: &ExportOptions, table: &ReachTable) -> Result<Option<PathBuf>> {
    let Some(path) = export.out_path() else { return Ok(None) };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = export_contents(table, export.format, export.include_headers)?;
    fs::write(&path, contents).map_err(|e| ReachError::io(&path, e))?;
    logf!("Wrote {} rows to {}", table.len(), path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ReachError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ReachError::io(dir, e))?;
    }
    Ok(())
}
