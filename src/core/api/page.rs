//! Pagination normalization.
//!
//! List endpoints answer either with a bare JSON array or with DRF's
//! `{count, next, previous, results}` envelope. Both shapes are decoded into
//! `ListEnvelope` and collapsed to `Page` right at the response boundary;
//! nothing downstream branches on shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::client;
use super::error::ApiResult;

/// Raw wire shape of a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

/// Normalized list result used by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Total number of records on the server. For bare arrays this is just
    /// the item count.
    pub count: u64,
    pub items: Vec<T>,
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        match envelope {
            ListEnvelope::Paginated { count, results, .. } => Page {
                count,
                items: results,
            },
            ListEnvelope::Bare(items) => Page {
                count: items.len() as u64,
                items,
            },
        }
    }
}

/// Fetch a list endpoint and normalize whichever shape comes back.
pub async fn fetch_page<T: DeserializeOwned + 'static>(path: &str) -> ApiResult<Page<T>> {
    let envelope: ListEnvelope<T> = client::get(path).await?;
    Ok(envelope.into())
}

/// Append query parameters to an endpoint path.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

// Minimal percent-encoding for query values; the backend only ever sees
// identifiers, ISO dates, and short labels here.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_paginated_envelope_normalizes() {
        let value = json!({
            "count": 42,
            "next": "http://api/items/?page=2",
            "previous": null,
            "results": [{ "id": "a" }, { "id": "b" }]
        });
        let envelope: ListEnvelope<Row> = serde_json::from_value(value).unwrap();
        let page: Page<Row> = envelope.into();
        assert_eq!(page.count, 42);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "a");
    }

    #[test]
    fn test_bare_array_normalizes() {
        let value = json!([{ "id": "x" }]);
        let envelope: ListEnvelope<Row> = serde_json::from_value(value).unwrap();
        let page: Page<Row> = envelope.into();
        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].id, "x");
    }

    #[test]
    fn test_empty_shapes() {
        let bare: ListEnvelope<Row> = serde_json::from_value(json!([])).unwrap();
        assert_eq!(Page::from(bare).count, 0);

        let paginated: ListEnvelope<Row> = serde_json::from_value(json!({
            "count": 0, "next": null, "previous": null, "results": []
        }))
        .unwrap();
        assert_eq!(Page::from(paginated).count, 0);
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/v1/items/", &[]), "/api/v1/items/");
        assert_eq!(
            with_query("/api/v1/items/", &[("type", "region"), ("q", "toshkent shahri")]),
            "/api/v1/items/?type=region&q=toshkent%20shahri"
        );
    }

    #[test]
    fn test_urlencode_reserved_characters() {
        assert_eq!(urlencode("2026-01-01T00:00:00+05:00"), "2026-01-01T00%3A00%3A00%2B05%3A00");
    }
}
