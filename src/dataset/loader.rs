use super::types::{Dataset, StandardRecord};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Loads the standards dataset from a directory of CSV exports.
///
/// The workbook this dataset comes from has one sheet per standard, so the
/// export convention is one CSV file per standard with the file stem as the
/// Source. Files are read in name order so the loaded dataset is
/// deterministic regardless of directory iteration order.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let mut records: Vec<StandardRecord> = Vec::new();
    let mut sections_raw: HashSet<String> = HashSet::new();
    let mut sources: BTreeSet<String> = BTreeSet::new();
    let mut seen: HashSet<DedupKey> = HashSet::new();

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading data directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    paths.sort();

    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .trim();

        // The workbook carries an 'Example' sheet that is not real data.
        if stem.eq_ignore_ascii_case("example") {
            tracing::info!("Skipping example export: {}", path.display());
            continue;
        }

        let source = normalize_source(stem);
        match load_file(&path, &source, &mut records, &mut sections_raw, &mut seen) {
            Ok(added) => {
                if added > 0 && !source.is_empty() {
                    sources.insert(source);
                }
            }
            Err(err) => {
                tracing::error!("Failed to load {}: {}", path.display(), err);
            }
        }
    }

    let mut sections: Vec<String> = sections_raw
        .into_iter()
        .filter(|sec| {
            let numeric = is_numeric_section(sec);
            if !numeric {
                tracing::debug!("Filtering out non-numeric section: '{}'", sec);
            }
            numeric
        })
        .collect();
    sections.sort_by(|a, b| natural_sort_key(a).cmp(&natural_sort_key(b)));

    tracing::info!(
        "Loaded {} unique rows, {} sections, {} sources",
        records.len(),
        sections.len(),
        sources.len()
    );

    Ok(Dataset {
        records,
        sections,
        sources: sources.into_iter().collect(),
    })
}

fn load_file(
    path: &Path,
    source: &str,
    records: &mut Vec<StandardRecord>,
    sections_raw: &mut HashSet<String>,
    seen: &mut HashSet<DedupKey>,
) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Header names carry the same spreadsheet artifacts as cells.
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.replace("_x000D_", "").trim().to_string())
        .collect();

    let mut added = 0usize;
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!("Skipping malformed row in {}: {}", path.display(), err);
                continue;
            }
        };

        let Some(record) = record_from_row(&headers, &row, source) else {
            continue;
        };

        if !seen.insert(dedup_key(&record)) {
            continue;
        }
        if !record.section.is_empty() {
            sections_raw.insert(record.section.clone());
        }
        records.push(record);
        added += 1;
    }

    Ok(added)
}

/// Builds a record from one CSV row, applying the column fallback chains.
///
/// Returns `None` for rows with neither a section nor a description, which
/// the original workbook uses as divider/heading rows.
pub fn record_from_row(
    headers: &[String],
    row: &csv::StringRecord,
    source: &str,
) -> Option<StandardRecord> {
    let mut section = cell(headers, row, "Sub-Section");
    if section.is_empty() {
        section = cell(headers, row, "Section");
    }
    if section.is_empty() {
        section = cell(headers, row, "Control Category");
    }

    let requirement_text = cell(headers, row, "Requirement Text");
    let simplified_summary = cell(headers, row, "Simplified Summary");
    let description = if requirement_text.is_empty() {
        simplified_summary.clone()
    } else {
        requirement_text.clone()
    };

    if section.is_empty() && description.is_empty() {
        return None;
    }

    let mut control_id = cell(headers, row, "ControlID");
    if control_id.is_empty() {
        control_id = cell(headers, row, "Internal Control ID");
    }
    if control_id.is_empty() {
        control_id = "N/A".to_string();
    }

    Some(StandardRecord {
        section,
        source: source.to_string(),
        description,
        keywords: cell(headers, row, "Keywords"),
        control_id,
        title: cell(headers, row, "Title"),
        page_number: cell(headers, row, "Page Number"),
        requirement_text,
        simplified_summary,
        control_category: cell(headers, row, "Control Category"),
    })
}

/// Reads a named column, falling back through later columns with the same
/// header (or the `.1` suffix a spreadsheet tool appends when de-duplicating
/// headers) when the earlier ones are empty. Sheets in the workbook carry a
/// second `Requirement Text` / `Simplified Summary` pair that holds the value
/// whenever the first is blank.
fn cell(headers: &[String], row: &csv::StringRecord, name: &str) -> String {
    let suffixed = format!("{}.1", name);
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.as_str() == name || header.as_str() == suffixed.as_str())
        .filter_map(|(idx, _)| row.get(idx))
        .map(clean_cell)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Cleans one spreadsheet cell: strips the `_x000D_` carriage-return artifact
/// and surrounding whitespace, and maps a literal `nan` (stringified missing
/// value) to empty.
pub fn clean_cell(raw: &str) -> String {
    let cleaned = raw.replace("_x000D_", "");
    let trimmed = cleaned.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Normalizes a source name taken from a file stem.
///
/// The workbook has one sheet with a typo in the standard's number.
pub fn normalize_source(stem: &str) -> String {
    let trimmed = stem.trim();
    if trimmed == "IEC 62433-3" {
        "IEC 62443-3-3".to_string()
    } else {
        trimmed.to_string()
    }
}

type DedupKey = (String, String, String, String, String);

fn dedup_key(record: &StandardRecord) -> DedupKey {
    (
        record.source.clone(),
        record.control_id.clone(),
        record.requirement_text.clone(),
        record.simplified_summary.clone(),
        record.title.clone(),
    )
}

/// Only outline-numbered sections (`1`, `4.1`, `4.1.1`) are offered as filter
/// options; prose section names stay on the records but out of the dropdown.
pub fn is_numeric_section(section: &str) -> bool {
    let re = Regex::new(r"^[\d.]+$").unwrap();
    re.is_match(section)
}

/// One run of a section string: either a number or a text fragment.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortSegment {
    Number(u64),
    Text(String),
}

/// Sort key for mixed numeric/dot outline strings, so that `4.1.1` sorts
/// between `4.1` and `4.2`, and `10` after `9`.
pub fn natural_sort_key(section: &str) -> Vec<SortSegment> {
    let mut key = Vec::new();
    let mut buf = String::new();
    let mut in_digits = false;

    for ch in section.chars() {
        if ch.is_ascii_digit() != in_digits {
            flush_segment(&mut buf, in_digits, &mut key);
            in_digits = ch.is_ascii_digit();
        }
        buf.push(ch);
    }
    flush_segment(&mut buf, in_digits, &mut key);
    key
}

fn flush_segment(buf: &mut String, in_digits: bool, key: &mut Vec<SortSegment>) {
    if buf.is_empty() {
        return;
    }
    let segment = if in_digits {
        match buf.parse::<u64>() {
            Ok(n) => SortSegment::Number(n),
            Err(_) => SortSegment::Text(buf.clone()),
        }
    } else {
        SortSegment::Text(buf.clone())
    };
    key.push(segment);
    buf.clear();
}
