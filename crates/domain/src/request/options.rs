//! Per-call request options and the descriptor handed to a transport.

use std::collections::BTreeMap;

use serde_json::Value;

use super::HttpMethod;

/// Name of the content type header.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Name of the authorization header.
pub const AUTHORIZATION: &str = "Authorization";
/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Options bag supplied by a caller for one logical request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: HttpMethod,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Header overrides, merged after the defaults.
    pub headers: BTreeMap<String, String>,
    /// When set, no `Authorization` header is attached.
    pub skip_auth: bool,
}

impl RequestOptions {
    /// Options for a GET request.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// Options for a request with the given method and no body.
    #[must_use]
    pub fn method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options for a request with the given method and JSON body.
    #[must_use]
    pub fn with_body(method: HttpMethod, body: Value) -> Self {
        Self {
            method,
            body: Some(body),
            ..Self::default()
        }
    }

    /// Adds a header override.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Marks the request as unauthenticated (login, signup, refresh).
    #[must_use]
    pub const fn without_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

/// A fully built request: absolute URL, final headers and encoded body.
///
/// Built once per logical call and reused for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: HttpMethod,
    /// Base URL joined with the request path.
    pub url: String,
    /// Final header set.
    pub headers: BTreeMap<String, String>,
    /// UTF-8 JSON body bytes.
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_flags() {
        let options = RequestOptions::with_body(HttpMethod::Post, serde_json::json!({"a": 1}))
            .header("X-Trace", "1")
            .without_auth();

        assert_eq!(options.method, HttpMethod::Post);
        assert!(options.skip_auth);
        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_descriptor_header_lookup_ignores_case() {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        let descriptor = RequestDescriptor {
            method: HttpMethod::Get,
            url: "/api/habits".to_string(),
            headers,
            body: None,
        };

        assert_eq!(descriptor.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(descriptor.header(AUTHORIZATION), None);
    }
}
