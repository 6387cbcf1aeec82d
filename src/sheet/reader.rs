use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::row::{CellValue, SheetRow};
use crate::errors::sheet_context;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// How column labels are assigned to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SheetLayout {
    /// First record is the header row
    #[default]
    Headed,
    /// No header; columns are labelled A, B, C, ...
    Lettered,
}

/// Spreadsheet column letter for a zero-based index (0 → A, 26 → AA)
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Read a single-sheet CSV export into ordered rows.
///
/// Blank rows are skipped. Rows may be ragged; missing trailing cells are absent.
pub fn read_rows(bytes: &[u8], layout: SheetLayout) -> Result<Vec<SheetRow>> {
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = reader.records();
    let header_labels = match layout {
        SheetLayout::Headed => match records.next() {
            Some(record) => build_header_labels(&record.context("Failed to parse header row")?),
            None => return Ok(Vec::new()),
        },
        SheetLayout::Lettered => Vec::new(),
    };

    let mut rows = Vec::new();
    for (idx, record) in records.enumerate() {
        let record = record.with_context(|| format!("Failed to parse sheet row {}", idx + 1))?;
        let row: SheetRow = record
            .iter()
            .enumerate()
            .map(|(col, raw)| (label_for(&header_labels, layout, col), CellValue::parse(raw)))
            .collect();

        if !row.is_blank() {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Read a sheet from disk
pub fn read_sheet_file(path: &Path, layout: SheetLayout) -> Result<Vec<SheetRow>> {
    let bytes = fs::read(path).with_context(|| sheet_context(path))?;
    read_rows(&bytes, layout).with_context(|| sheet_context(path))
}

// Blank headers become __EMPTY_<col>; repeated headers get a _<n> suffix
fn build_header_labels(record: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    record
        .iter()
        .enumerate()
        .map(|(col, raw)| {
            let base = if raw.is_empty() {
                format!("__EMPTY_{}", col)
            } else {
                raw.to_string()
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let label = if *count == 0 {
                base
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;
            label
        })
        .collect()
}

fn label_for(headers: &[String], layout: SheetLayout, col: usize) -> String {
    match layout {
        SheetLayout::Headed => headers
            .get(col)
            .cloned()
            .unwrap_or_else(|| format!("__EMPTY_{}", col)),
        SheetLayout::Lettered => column_letter(col),
    }
}
