//! API utilities for frontend-backend communication
//!
//! Helpers for constructing API URLs and query strings.

use serde::Serialize;

/// Get the base URL for API requests
///
/// The backend is served under `/api` on the same origin as the panel.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - "/api" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api", protocol, host)
}

/// Join a base URL and an API path without doubling or dropping slashes
///
/// # Example
/// ```ignore
/// let url = join_url("https://scd.example.com/api/", "/categories/3");
/// assert_eq!(url, "https://scd.example.com/api/categories/3");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Serialize a filter struct into a query string (no leading `?`)
///
/// Unset values must be skipped by the filter's serde attributes.
pub fn encode_query<T: Serialize>(params: &T) -> Result<String, serde_qs::Error> {
    serde_qs::to_string(params)
}

/// Append an already encoded query string to a path
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "String::is_empty")]
        search: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        category_id: Option<i64>,
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "categories"), "/api/categories");
        assert_eq!(join_url("/api/", "/categories"), "/api/categories");
    }

    #[test]
    fn test_encode_query_skips_unset_values() {
        let empty = Params {
            search: String::new(),
            category_id: None,
        };
        assert_eq!(encode_query(&empty).unwrap(), "");

        let params = Params {
            search: "cable".to_string(),
            category_id: Some(4),
        };
        assert_eq!(
            encode_query(&params).unwrap(),
            "search=cable&category_id=4"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/sales", ""), "/sales");
        assert_eq!(with_query("/sales?page=1", "per_page=20"), "/sales?page=1&per_page=20");
        assert_eq!(with_query("/sales", "page=2"), "/sales?page=2");
    }
}
