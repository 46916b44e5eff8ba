//! Loading records from JSON or CSV files into a fresh store

use crate::store::RecordStore;
use crate::EmployerRecord;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Accepted header names per export column
const NAME_HEADERS: &[&str] = &["name", "企業名", "志望企業名"];
const SALARY_HEADERS: &[&str] = &["salaryText", "salary", "平均年収", "年収 (万円)"];
const HEADCOUNT_HEADERS: &[&str] = &["employeeCountText", "employees", "社員数"];
const BENEFITS_HEADERS: &[&str] = &["benefitsText", "benefits", "福利厚生"];

/// Load records from `path`. `.csv` files are read as CSV, anything else as a
/// JSON array of records.
pub fn load_records(path: &Path) -> Result<RecordStore> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let store = if is_csv {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_csv(file).with_context(|| format!("Invalid CSV in {}", path.display()))?
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_json(&content).with_context(|| format!("Invalid records in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), records = store.len(), "records loaded");
    Ok(store)
}

/// Parse a JSON array of records
pub fn parse_json(content: &str) -> Result<RecordStore> {
    let records: Vec<EmployerRecord> =
        serde_json::from_str(content).context("Expected a JSON array of records")?;

    let mut store = RecordStore::new();
    for (i, record) in records.into_iter().enumerate() {
        store
            .add(record)
            .with_context(|| format!("record {}", i + 1))?;
    }
    Ok(store)
}

/// Parse CSV with a header row. Columns are matched by header name, so
/// order does not matter and missing optional columns read as empty.
pub fn parse_csv<R: Read>(reader: R) -> Result<RecordStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let find = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let Some(name_col) = find(NAME_HEADERS) else {
        anyhow::bail!("CSV has no name column (expected one of: {})", NAME_HEADERS.join(", "));
    };
    let salary_col = find(SALARY_HEADERS);
    let headcount_col = find(HEADCOUNT_HEADERS);
    let benefits_col = find(BENEFITS_HEADERS);

    let mut store = RecordStore::new();
    for (i, row) in rdr.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let row = row.with_context(|| format!("row {}", line))?;
        let field = |col: Option<usize>| col.and_then(|c| row.get(c)).unwrap_or("").to_string();

        let record = EmployerRecord::new(
            field(Some(name_col)),
            field(salary_col),
            field(headcount_col),
            field(benefits_col),
        )
        .with_context(|| format!("row {}", line))?;
        store.add(record).with_context(|| format!("row {}", line))?;
    }
    Ok(store)
}
