//! Result Renderer
//!
//! Maps records plus the current query into HTML. Every rendered field value
//! passes through the highlighter; empty fields are omitted rather than
//! rendered blank. Page assembly fills placeholder tokens in the static
//! template; a token absent from the template is simply left alone.

use crate::controller::{FilterSelection, ViewState};
use crate::highlight::{escape_html, highlight};
use cyber_standards::dataset::types::StandardRecord;
use cyber_standards::search::types::FilterOptions;

const PAGE_TEMPLATE: &str = include_str!("ui.html");

/// Metadata grid labels paired with their record fields, in display order.
fn metadata_pairs(record: &StandardRecord) -> [(&'static str, &str); 6] {
    [
        ("Control ID", &record.control_id),
        ("Section", &record.section),
        ("Control Category", &record.control_category),
        ("Simplified Summary", &record.simplified_summary),
        ("Keywords", &record.keywords),
        ("Page Number", &record.page_number),
    ]
}

/// Renders the result cards, or the no-results notice for an empty slice.
pub fn render_results(records: &[StandardRecord], query: &str) -> String {
    if records.is_empty() {
        return "<p class=\"no-results\">No results found.</p>".to_string();
    }
    records
        .iter()
        .map(|record| render_card(record, query))
        .collect()
}

fn render_card(record: &StandardRecord, query: &str) -> String {
    let title = if record.title.is_empty() {
        &record.control_id
    } else {
        &record.title
    };

    let mut card = String::from("<div class=\"result-card\">");
    card.push_str("<div class=\"result-header\">");
    card.push_str(&format!("<h3>{}</h3>", highlight(title, query)));
    if !record.source.is_empty() {
        card.push_str(&format!(
            "<span class=\"result-source\">{}</span>",
            highlight(&record.source, query)
        ));
    }
    card.push_str("</div>");

    let requirement = if record.requirement_text.is_empty() {
        &record.description
    } else {
        &record.requirement_text
    };
    if !requirement.is_empty() {
        card.push_str(&format!(
            "<p class=\"requirement-text\">{}</p>",
            highlight(requirement, query)
        ));
    }

    let rows: String = metadata_pairs(record)
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| {
            format!(
                "<div class=\"meta-row\"><span class=\"meta-label\">{}</span>\
                 <span class=\"meta-value\">{}</span></div>",
                label,
                highlight(value, query)
            )
        })
        .collect();
    if !rows.is_empty() {
        card.push_str(&format!("<div class=\"metadata-grid\">{}</div>", rows));
    }

    card.push_str("</div>");
    card
}

/// Renders the results region for the controller's current state.
pub fn render_state(state: &ViewState, query: &str) -> String {
    match state {
        ViewState::Idle => {
            "<p class=\"idle-notice\">Enter a search term or pick a filter to begin.</p>"
                .to_string()
        }
        ViewState::Loading => String::new(),
        ViewState::Displayed(records) => render_results(records, query),
        ViewState::Error(message) => format!(
            "<div class=\"error-message\">Failed to load results: {}</div>",
            escape_html(message)
        ),
    }
}

/// Renders one dropdown's option list with the current value selected.
pub fn render_options(values: &[String], selected: &str, all_label: &str) -> String {
    let mut out = format!("<option value=\"\">{}</option>", all_label);
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        let escaped = escape_html(value);
        let marker = if value == selected { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escaped, marker
        ));
    }
    out
}

/// Fills the page template for the given options, selection, and view state.
pub fn render_page(
    options: &FilterOptions,
    selection: &FilterSelection,
    state: &ViewState,
) -> String {
    PAGE_TEMPLATE
        .replace("{{query}}", &escape_html(&selection.query))
        .replace(
            "{{section_options}}",
            &render_options(&options.sections, &selection.section, "All Sections"),
        )
        .replace(
            "{{source_options}}",
            &render_options(&options.sources, &selection.source, "All Sources"),
        )
        .replace(
            "{{loading_hidden}}",
            if matches!(state, ViewState::Loading) {
                ""
            } else {
                " hidden"
            },
        )
        .replace("{{results}}", &render_state(state, &selection.query))
}
