//! Message content handling for RSVP tallies
//!
//! The message envelope is two lines: the event title on line 1 (optionally
//! wrapped in emphasis markers) and the rendered totals on line 2. Edits
//! always re-extract the title from line 1, discard everything after it, and
//! append a freshly rendered counts line, so the same helpers work for a
//! message that has never carried a counts line and for one that already has.

use super::vote::Totals;

/// Extract the event title from the first line of message content
///
/// Emphasis markers are stripped; everything after line 1 is discarded.
pub fn extract_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    first_line
        .trim()
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim()
        .to_string()
}

/// Render ledger totals as the counts line
pub fn render_totals(totals: &Totals) -> String {
    format!(
        "Yes: {} | No: {} | Maybe: {}",
        totals.yes, totals.no, totals.maybe
    )
}

/// Rebuild message content as `<title>\n<counts line>`
pub fn build_content(title: &str, totals: &Totals) -> String {
    format!("{}\n{}", title, render_totals(totals))
}
