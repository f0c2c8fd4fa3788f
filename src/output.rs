use serde::Serialize;

use crate::api::{MediaStatus, SearchResult};
use crate::error::Result;

#[derive(Serialize)]
struct SearchOutput<'a> {
    results: &'a [SearchResult],
}

/// Render search results as one structured JSON blob.
pub fn render_search(results: &[SearchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SearchOutput { results })?)
}

/// Render an availability record, absent fields omitted.
pub fn render_status(status: &MediaStatus) -> Result<String> {
    Ok(serde_json::to_string_pretty(status)?)
}
