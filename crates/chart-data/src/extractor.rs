//! Per-entry scan of a single export document.
//!
//! Every `div.message` element is either a *service* entry (a date separator
//! or a pinned/system notice, class token `service`) or an ordinary chat
//! message (class token `clearfix`). Service entries carry their date text on
//! the second line of the second child node; that position is fixed by the
//! export format. Anything malformed is skipped without touching the state.

use chart_core::models::ScanState;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Selector matching every message container in an export document.
fn message_selector() -> Selector {
    Selector::parse("div.message").expect("selector is valid")
}

/// Scan one document's entries into `state`, in document order.
///
/// The date context in `state` carries in from the previous document and out
/// to the next one; a document may open with messages that belong to the
/// last separator of its predecessor.
pub fn scan_document(html: &str, state: &mut ScanState) {
    let document = Html::parse_document(html);
    let selector = message_selector();

    for entry in document.select(&selector) {
        if entry.value().attr("class").is_none() {
            continue;
        }

        if entry.value().classes().any(|c| c == "service") {
            match service_date_text(&entry) {
                Some(text) => state.record_date_text(&text),
                None => debug!("service entry without a date text position"),
            }
        } else if entry.value().classes().any(|c| c == "clearfix") {
            state.record_message();
        }
    }
}

/// Extract the date-separator text line from a service entry.
///
/// The export places it on the second line of the entry's second child node
/// (the `body details` element). Entries that don't have that shape yield
/// `None`.
fn service_date_text(entry: &ElementRef) -> Option<String> {
    let child = entry.children().nth(1)?;
    let raw = match child.value() {
        Node::Element(_) => ElementRef::wrap(child)?.html(),
        Node::Text(t) => t.text.to_string(),
        _ => return None,
    };
    raw.lines().nth(1).map(str::to_string)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
