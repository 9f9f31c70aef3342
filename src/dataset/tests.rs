//! Dataset Module Tests
//!
//! Validates the loading pipeline, including cell cleaning, column fallback
//! chains, de-duplication, and filter-option discovery.
//!
//! ## Test Scopes
//! - **Cleaning**: Ensures spreadsheet artifacts and stringified missing
//!   values are stripped.
//! - **Row construction**: Verifies the fallback chains and the divider-row
//!   drop rule.
//! - **Options**: Checks the numeric-section filter and natural sort order.
//! - **Loading**: End-to-end directory load with de-duplication.

#[cfg(test)]
mod tests {
    use crate::dataset::loader::{
        clean_cell, is_numeric_section, load_dataset, natural_sort_key, normalize_source,
        record_from_row,
    };
    use crate::dataset::types::StandardRecord;

    fn parse_row(csv_text: &str) -> (Vec<String>, csv::StringRecord) {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let row = reader.records().next().unwrap().unwrap();
        (headers, row)
    }

    // ============================================================
    // CLEANING TESTS - clean_cell
    // ============================================================

    #[test]
    fn test_clean_cell_trims_whitespace() {
        assert_eq!(clean_cell("  access control  "), "access control");
    }

    #[test]
    fn test_clean_cell_strips_carriage_return_artifact() {
        assert_eq!(clean_cell("multi_x000D_ line"), "multi line");
    }

    #[test]
    fn test_clean_cell_maps_nan_to_empty() {
        assert_eq!(clean_cell("nan"), "");
        assert_eq!(clean_cell("NaN"), "");
        assert_eq!(clean_cell(" nan "), "");
    }

    #[test]
    fn test_clean_cell_keeps_real_values() {
        // 'nan' embedded in a longer value is real data
        assert_eq!(clean_cell("nanotechnology"), "nanotechnology");
    }

    // ============================================================
    // SOURCE NORMALIZATION TESTS
    // ============================================================

    #[test]
    fn test_normalize_source_fixes_workbook_typo() {
        assert_eq!(normalize_source("IEC 62433-3"), "IEC 62443-3-3");
    }

    #[test]
    fn test_normalize_source_passes_others_through() {
        assert_eq!(normalize_source(" NIST 800-53 "), "NIST 800-53");
    }

    // ============================================================
    // ROW CONSTRUCTION TESTS - record_from_row
    // ============================================================

    #[test]
    fn test_record_from_row_basic() {
        let (headers, row) = parse_row(
            "Section,ControlID,Title,Requirement Text\n\
             4.1,AC-1,Access Policy,Control access to systems.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.section, "4.1");
        assert_eq!(record.source, "NIST");
        assert_eq!(record.control_id, "AC-1");
        assert_eq!(record.title, "Access Policy");
        assert_eq!(record.requirement_text, "Control access to systems.");
        assert_eq!(record.description, "Control access to systems.");
    }

    #[test]
    fn test_record_from_row_sub_section_wins() {
        let (headers, row) = parse_row(
            "Section,Sub-Section,Requirement Text\n\
             4,4.1.1,Some requirement.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.section, "4.1.1");
    }

    #[test]
    fn test_record_from_row_section_falls_back_to_category() {
        let (headers, row) = parse_row(
            "Section,Control Category,Requirement Text\n\
             ,Access Control,Some requirement.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.section, "Access Control");
        assert_eq!(record.control_category, "Access Control");
    }

    #[test]
    fn test_record_from_row_description_falls_back_to_summary() {
        let (headers, row) = parse_row(
            "Section,Requirement Text,Simplified Summary\n\
             4.1,,Keep systems patched.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.requirement_text, "");
        assert_eq!(record.description, "Keep systems patched.");
    }

    #[test]
    fn test_record_from_row_control_id_fallback_chain() {
        let (headers, row) = parse_row(
            "Section,ControlID,Internal Control ID,Requirement Text\n\
             4.1,,INT-7,Some requirement.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();
        assert_eq!(record.control_id, "INT-7");

        let (headers, row) = parse_row(
            "Section,Requirement Text\n\
             4.1,Some requirement.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();
        assert_eq!(record.control_id, "N/A");
    }

    #[test]
    fn test_record_from_row_falls_back_to_duplicate_columns() {
        // The workbook repeats the Requirement Text / Simplified Summary
        // pair; the second copy holds the value when the first is blank
        let (headers, row) = parse_row(
            "Section,Requirement Text,Simplified Summary,Requirement Text,Simplified Summary\n\
             4.1,,,Mirrored requirement.,Mirrored summary.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.requirement_text, "Mirrored requirement.");
        assert_eq!(record.simplified_summary, "Mirrored summary.");
        assert_eq!(record.description, "Mirrored requirement.");
    }

    #[test]
    fn test_record_from_row_falls_back_to_suffixed_columns() {
        // Some export tools de-duplicate repeated headers with a .1 suffix
        let (headers, row) = parse_row(
            "Section,Requirement Text,Requirement Text.1\n\
             4.1,,Alternate text.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.requirement_text, "Alternate text.");
    }

    #[test]
    fn test_record_from_row_primary_column_wins_over_duplicate() {
        let (headers, row) = parse_row(
            "Section,Requirement Text,Requirement Text.1\n\
             4.1,Primary text.,Alternate text.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();

        assert_eq!(record.requirement_text, "Primary text.");
    }

    #[test]
    fn test_record_from_row_drops_divider_rows() {
        // Neither section nor description: the workbook's heading rows
        let (headers, row) = parse_row(
            "Section,Title,Requirement Text,Simplified Summary\n\
             ,Chapter heading,,\n",
        );
        assert!(record_from_row(&headers, &row, "NIST").is_none());
    }

    #[test]
    fn test_record_from_row_nan_section_is_missing() {
        let (headers, row) = parse_row(
            "Section,Requirement Text\n\
             nan,Some requirement.\n",
        );
        let record = record_from_row(&headers, &row, "NIST").unwrap();
        assert_eq!(record.section, "");
    }

    // ============================================================
    // FILTER OPTION TESTS - is_numeric_section / natural_sort_key
    // ============================================================

    #[test]
    fn test_is_numeric_section() {
        assert!(is_numeric_section("1"));
        assert!(is_numeric_section("4.1"));
        assert!(is_numeric_section("4.1.1"));

        assert!(!is_numeric_section("Access Control"));
        assert!(!is_numeric_section("4.1a"));
        assert!(!is_numeric_section(""));
    }

    #[test]
    fn test_natural_sort_orders_outline_numbers() {
        let mut sections = vec![
            "10".to_string(),
            "4.1.1".to_string(),
            "1".to_string(),
            "4.2".to_string(),
            "4.1".to_string(),
            "9".to_string(),
        ];
        sections.sort_by(|a, b| natural_sort_key(a).cmp(&natural_sort_key(b)));

        assert_eq!(sections, vec!["1", "4.1", "4.1.1", "4.2", "9", "10"]);
    }

    #[test]
    fn test_natural_sort_key_splits_digit_runs() {
        // Lexicographic sort would put "10" before "9"
        assert!(natural_sort_key("9") < natural_sort_key("10"));
        assert!(natural_sort_key("4.9") < natural_sort_key("4.10"));
    }

    // ============================================================
    // SERIALIZATION TESTS - StandardRecord
    // ============================================================

    #[test]
    fn test_record_serializes_under_column_names() {
        let record = StandardRecord {
            section: "4.1".to_string(),
            source: "NIST".to_string(),
            control_id: "AC-1".to_string(),
            requirement_text: "Control access.".to_string(),
            page_number: "12".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).expect("Serialization failed");
        assert_eq!(json["Section"], "4.1");
        assert_eq!(json["ControlID"], "AC-1");
        assert_eq!(json["Requirement Text"], "Control access.");
        assert_eq!(json["Page Number"], "12");
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let json = r#"{"Title": "Access Policy", "Source": "NIST"}"#;
        let record: StandardRecord = serde_json::from_str(json).expect("Deserialization failed");

        assert_eq!(record.title, "Access Policy");
        assert_eq!(record.source, "NIST");
        assert_eq!(record.section, "");
        assert_eq!(record.keywords, "");
    }

    // ============================================================
    // LOADING TESTS - load_dataset
    // ============================================================

    #[test]
    fn test_load_dataset_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("NIST 800-53.csv"),
            "Section,ControlID,Title,Requirement Text\n\
             4.1,AC-1,Access Policy,Control access to systems.\n\
             4.1,AC-1,Access Policy,Control access to systems.\n\
             4.2,IR-1,Incident Plan,Maintain an incident response plan.\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("Example.csv"),
            "Section,Requirement Text\n1,Placeholder row.\n",
        )
        .unwrap();

        let dataset = load_dataset(dir.path()).unwrap();

        // Duplicate row collapsed, example file skipped
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.sources, vec!["NIST 800-53"]);
        assert_eq!(dataset.sections, vec!["4.1", "4.2"]);
        assert!(dataset.records.iter().all(|r| r.source == "NIST 800-53"));
    }

    #[test]
    fn test_load_dataset_filters_prose_sections_from_options() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ISO 27001.csv"),
            "Section,Requirement Text\n\
             Access Control,Use strong authentication.\n\
             4.1,Review policies periodically.\n",
        )
        .unwrap();

        let dataset = load_dataset(dir.path()).unwrap();

        // Both rows load, but only the outline-numbered section is offered
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.sections, vec!["4.1"]);
    }

    #[test]
    fn test_load_dataset_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        assert!(load_dataset(&missing).is_err());
    }
}
