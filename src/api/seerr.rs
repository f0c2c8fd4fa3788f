use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::media::{MediaStatus, MediaType, SearchResult};
use crate::config::Config;
use crate::error::ApiError;

const API_KEY_HEADER: &str = "X-Api-Key";
const MAX_SEARCH_RESULTS: usize = 5;

/// Seerr API client
pub struct SeerrClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SeerrClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    /// Search the catalog, keeping the first few results that validate.
    /// Malformed items are skipped rather than failing the whole batch.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = search_url(&self.base_url, query);
        tracing::debug!("Searching: {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Seerr(format!("HTTP {}", response.status())));
        }

        let data: SearchResponse = response.json().await?;
        Ok(collect_results(&data.results))
    }

    /// Submit a request for a movie or show. Returns the one-line message
    /// to print; a rejected request is folded into the message rather than
    /// surfaced as an error.
    pub async fn add_request(
        &self,
        media_type: MediaType,
        media_id: i64,
        seasons: &[u32],
    ) -> Result<String, ApiError> {
        let url = format!("{}/request", self.base_url);
        let body = request_body(media_type, media_id, seasons);
        tracing::debug!("Submitting request: {} {}", url, body);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.json::<Value>().await.ok();
            return Ok(failure_message(status, error_body.as_ref()));
        }

        Ok(reason_phrase(status))
    }

    /// Fetch the availability status of a single library item.
    pub async fn get_available(
        &self,
        media_type: MediaType,
        media_id: i64,
    ) -> Result<MediaStatus, ApiError> {
        let url = availability_url(&self.base_url, media_type, media_id);
        tracing::debug!("Fetching availability: {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Seerr(format!("HTTP {}", response.status())));
        }

        let raw: Value = response.json().await?;
        Ok(MediaStatus::from_value(&raw)?)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

/// Validate search items one by one, keeping source order. A malformed
/// item is dropped with a trace instead of failing the batch.
fn collect_results(raw: &[Value]) -> Vec<SearchResult> {
    let mut results = Vec::new();
    for item in raw {
        if results.len() >= MAX_SEARCH_RESULTS {
            break;
        }
        match SearchResult::from_value(item) {
            Ok(result) => results.push(result),
            Err(e) => tracing::debug!("Skipping malformed search result: {}", e),
        }
    }
    results
}

// Seerr rejects '+' as a space in search queries, so spaces must be
// percent-encoded
fn search_url(base_url: &str, query: &str) -> String {
    format!("{}/search?query={}", base_url, urlencoding::encode(query))
}

fn availability_url(base_url: &str, media_type: MediaType, media_id: i64) -> String {
    format!("{}/{}/{}", base_url, media_type.as_str(), media_id)
}

fn request_body(media_type: MediaType, media_id: i64, seasons: &[u32]) -> Value {
    let mut body = json!({
        "mediaType": media_type.as_str(),
        "mediaId": media_id,
    });

    // the server treats an empty season list as invalid, so the key is
    // only sent when seasons were actually picked
    if !seasons.is_empty() {
        body["seasons"] = json!(seasons);
    }

    body
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn failure_message(status: StatusCode, body: Option<&Value>) -> String {
    let message = body
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");

    format!("{}: {}", reason_phrase(status), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_url_percent_encodes_spaces() {
        let url = search_url("https://seerr.local/api/v1", "star wars");
        assert_eq!(url, "https://seerr.local/api/v1/search?query=star%20wars");
        assert!(!url.contains('+'));
    }

    #[test]
    fn test_availability_url_uses_media_type_path() {
        let url = availability_url("https://seerr.local/api/v1", MediaType::Tv, 42);
        assert_eq!(url, "https://seerr.local/api/v1/tv/42");

        let url = availability_url("https://seerr.local/api/v1", MediaType::Movie, 603);
        assert_eq!(url, "https://seerr.local/api/v1/movie/603");
    }

    #[test]
    fn test_request_body_without_seasons() {
        let body = request_body(MediaType::Movie, 603, &[]);
        assert_eq!(body, json!({ "mediaType": "movie", "mediaId": 603 }));
        assert!(body.get("seasons").is_none());
    }

    #[test]
    fn test_request_body_with_seasons() {
        let body = request_body(MediaType::Tv, 1396, &[1, 2]);
        assert_eq!(
            body,
            json!({ "mediaType": "tv", "mediaId": 1396, "seasons": [1, 2] })
        );
    }

    #[test]
    fn test_failure_message_with_server_message() {
        let body = json!({ "message": "Already requested" });
        let message = failure_message(StatusCode::BAD_REQUEST, Some(&body));
        assert_eq!(message, "Bad Request: Already requested");
    }

    #[test]
    fn test_failure_message_without_body() {
        let message = failure_message(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(message, "Internal Server Error: Unknown error");
    }

    #[test]
    fn test_failure_message_with_non_object_body() {
        let body = json!("not json we expected");
        let message = failure_message(StatusCode::NOT_FOUND, Some(&body));
        assert_eq!(message, "Not Found: Unknown error");
    }

    #[test]
    fn test_success_reason_phrase() {
        assert_eq!(reason_phrase(StatusCode::CREATED), "Created");
        assert_eq!(reason_phrase(StatusCode::OK), "OK");
    }

    #[test]
    fn test_batch_decode_skips_malformed_and_truncates() {
        let raw: Vec<Value> = vec![
            json!({ "id": 1, "mediaType": "movie", "originalTitle": "One" }),
            json!({ "id": "bad", "mediaType": "movie", "originalTitle": "Broken" }),
            json!({ "id": 3, "mediaType": "tv", "originalName": "Three" }),
            json!({ "id": 4, "mediaType": "movie", "originalTitle": "Four" }),
            json!({ "id": 5, "mediaType": "movie", "originalTitle": "Five" }),
            json!({ "id": 6, "mediaType": "movie", "originalTitle": "Six" }),
            json!({ "id": 7, "mediaType": "movie", "originalTitle": "Seven" }),
        ];

        let ids: Vec<i64> = collect_results(&raw).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_batch_decode_of_short_response() {
        let raw = vec![json!({ "id": 1, "mediaType": "movie", "originalTitle": "One" })];
        assert_eq!(collect_results(&raw).len(), 1);
        assert!(collect_results(&[]).is_empty());
    }
}
