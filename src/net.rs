//! HTTP calls to the news search service.

use std::sync::LazyLock;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

use crate::state::{NewsRecord, QueryInput};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with sane timeouts and a stable user agent.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(15))
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(format!("newsdeck/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
});

/// Reply envelope of `GET /api/news`.
#[derive(Debug, serde::Deserialize)]
struct SearchEnvelope {
    /// Whether the service handled the request.
    success: bool,
    /// Number of records the service claims to have sent.
    #[serde(default)]
    count: usize,
    /// The records themselves.
    #[serde(default)]
    data: Vec<NewsRecord>,
    /// Per-outlet counts as computed by the service.
    #[serde(default)]
    stats: std::collections::BTreeMap<String, usize>,
    /// Failure detail when `success` is false.
    #[serde(default)]
    error: Option<String>,
}

/// What: Run one search against the service.
///
/// Inputs:
/// - `base_url`: Service base URL without a trailing slash
/// - `query`: The submitted form fields, forwarded verbatim as URL params
///
/// Output:
/// - The records in service order, or a one-line error suitable for the
///   status pane. The service wraps its own failures in a JSON envelope,
///   so HTTP status alone is not trusted.
pub async fn search(base_url: &str, query: &QueryInput) -> Result<Vec<NewsRecord>> {
    let url = format!("{}/api/news", base_url.trim_end_matches('/'));
    info!(id = query.id, url = %url, "requesting news search");
    let resp = HTTP_CLIENT
        .get(&url)
        .query(&[
            ("keyword", query.keyword.as_str()),
            ("logic", query.logic.as_str()),
            ("start_date", query.start_date.as_str()),
            ("end_date", query.end_date.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "news search request failed");
            Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
        })?;
    let status = resp.status();
    let envelope: SearchEnvelope = resp.json().await.map_err(|e| {
        warn!(error = %e, status = %status, "news search returned invalid JSON");
        Box::<dyn std::error::Error + Send + Sync>::from(format!("Invalid response: {e}"))
    })?;
    if !envelope.success {
        let detail = envelope
            .error
            .unwrap_or_else(|| format!("service returned HTTP {status}"));
        warn!(detail = %detail, "news search reported failure");
        return Err(detail.into());
    }
    if envelope.count != envelope.data.len() {
        debug!(
            count = envelope.count,
            actual = envelope.data.len(),
            "service count disagrees with payload length"
        );
    }
    debug!(
        records = envelope.data.len(),
        sources = envelope.stats.len(),
        "news search succeeded"
    );
    Ok(envelope.data)
}

/// What: Ask the service to render a batch of records as a spreadsheet.
///
/// Inputs:
/// - `base_url`: Service base URL without a trailing slash
/// - `records`: The batch, posted as a bare JSON array
///
/// Output:
/// - The raw xlsx bytes, or a one-line error. Failures come back as a
///   JSON envelope whose `error` field is surfaced when present.
pub async fn export_selected(base_url: &str, records: &[NewsRecord]) -> Result<Vec<u8>> {
    let url = format!("{}/api/download-selected", base_url.trim_end_matches('/'));
    info!(count = records.len(), url = %url, "requesting spreadsheet export");
    let resp = HTTP_CLIENT
        .post(&url)
        .json(records)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "spreadsheet export request failed");
            Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
        })?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("service returned HTTP {status}"));
        warn!(status = %status, detail = %detail, "spreadsheet export failed");
        return Err(detail.into());
    }
    let bytes = resp.bytes().await.map_err(|e| {
        warn!(error = %e, "spreadsheet download interrupted");
        Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
    })?;
    info!(bytes = bytes.len(), "spreadsheet received");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::SearchEnvelope;

    #[test]
    /// What: The service envelope parses with exact wire field names
    ///
    /// - Input: A success payload with publishedAt and a Chinese sentiment
    /// - Output: Records, count, and stats populated; no error
    fn net_search_envelope_parses_success() {
        let body = r#"{
            "success": true,
            "count": 1,
            "data": [{
                "title": "台灣新聞一則",
                "link": "https://news.example/1",
                "source": "中央社",
                "publishedAt": "2026-08-20 10:30:00",
                "sentiment": "正面"
            }],
            "stats": {"中央社": 1}
        }"#;
        let env: SearchEnvelope = serde_json::from_str(body).expect("parse");
        assert!(env.success);
        assert_eq!(env.count, 1);
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].published_at, "2026-08-20 10:30:00");
        assert_eq!(env.data[0].sentiment.as_deref(), Some("正面"));
        assert_eq!(env.stats.get("中央社"), Some(&1));
        assert!(env.error.is_none());
    }

    #[test]
    /// What: Failure envelopes parse without data and records round-trip
    ///
    /// - Input: A failure payload; a record serialized back to JSON
    /// - Output: Error text available; wire names preserved on output
    fn net_search_envelope_parses_failure_and_serializes_records() {
        let env: SearchEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).expect("parse");
        assert!(!env.success);
        assert_eq!(env.error.as_deref(), Some("boom"));
        assert!(env.data.is_empty());

        let record = crate::state::NewsRecord {
            title: "t".into(),
            link: "https://news.example/t".into(),
            source: "Wire".into(),
            published_at: "2026-08-20".into(),
            sentiment: None,
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("published_at").is_none());
        assert!(json.get("sentiment").is_none());
    }
}
