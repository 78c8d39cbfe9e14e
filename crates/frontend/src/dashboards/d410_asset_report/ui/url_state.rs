//! Keeps the report filters in the page URL so a report can be bookmarked

use contracts::dashboards::d410_asset_report::ReportQuery;
use web_sys::window;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Filters encoded in the current URL; a malformed query is ignored
pub fn read_query() -> ReportQuery {
    let search = current_search();
    match ReportQuery::parse(&search) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("Ignoring report query `{}`: {}", search, e);
            ReportQuery::default()
        }
    }
}

/// Replace (not push) the history entry, so filter tweaks do not pile up
/// in the back button
pub fn write_query(query: &ReportQuery) {
    let query_string = match query.to_query_string() {
        Ok(query_string) => query_string,
        Err(e) => {
            log::warn!("Cannot encode report query: {}", e);
            return;
        }
    };
    let new_url = if query_string.is_empty() {
        String::new()
    } else {
        format!("?{}", query_string)
    };

    // Only update URL if it actually changed
    if current_search() == new_url {
        return;
    }

    let target = if new_url.is_empty() {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    } else {
        new_url
    };
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target));
        }
    }
}
