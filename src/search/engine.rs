use crate::dataset::types::StandardRecord;

/// Sentinel dropdown values meaning "do not filter on this dimension".
pub const ALL_SECTIONS: &str = "All Sections";
pub const ALL_SOURCES: &str = "All Sources";

/// Filters the dataset by free-text query and the two categorical dimensions.
///
/// The query matches case-insensitively as a substring of any searchable
/// field; section and source match exactly. Empty arguments (and the
/// `All Sections` / `All Sources` sentinels) leave that dimension
/// unfiltered. The filters compose with AND.
pub fn filter_records(
    records: &[StandardRecord],
    query: &str,
    section: &str,
    source: &str,
) -> Vec<StandardRecord> {
    let query = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            matches_query(record, &query)
                && matches_dimension(&record.section, section, ALL_SECTIONS)
                && matches_dimension(&record.source, source, ALL_SOURCES)
        })
        .cloned()
        .collect()
}

fn matches_query(record: &StandardRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    searchable_fields(record)
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

fn matches_dimension(value: &str, selected: &str, all_sentinel: &str) -> bool {
    if selected.is_empty() || selected == all_sentinel {
        return true;
    }
    value == selected
}

fn searchable_fields(record: &StandardRecord) -> [&str; 8] {
    [
        &record.description,
        &record.keywords,
        &record.control_id,
        &record.title,
        &record.requirement_text,
        &record.simplified_summary,
        &record.control_category,
        &record.section,
    ]
}
