//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", nanos, seq))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Parse from a method string (case-insensitive). Unknown methods map to `Get`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "PATCH" => Method::Patch,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            _ => Method::Get,
        }
    }
}

/// Typed request context passed to handlers.
///
/// Built once per incoming request; the path is stored without its query
/// string, which is parsed into `query`.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
}

impl RequestContext {
    /// Create a new request context from a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let raw = path_with_query.into();
        let (path, query) = match raw.split_once('?') {
            Some((p, q)) => (p.to_string(), parse_query(q)),
            None => (raw, HashMap::new()),
        };
        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            headers: HashMap::new(),
        }
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a query string into key/value pairs.
///
/// Plus signs and percent escapes in values are decoded; malformed escapes
/// are kept verbatim rather than rejected.
pub fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

fn decode_component(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_uniqueness() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/api/parts?category=cpu");
        assert_eq!(ctx.path, "/api/parts");
        assert_eq!(ctx.query_param("category"), Some("cpu"));
    }

    #[test]
    fn test_context_without_query() {
        let ctx = RequestContext::new(Method::Get, "/ms");
        assert_eq!(ctx.path, "/ms");
        assert!(ctx.query.is_empty());
    }

    #[test]
    fn test_parse_query_decodes() {
        let q = parse_query("part=cpu-1&name=Ryzen+5%207600");
        assert_eq!(q.get("part").map(String::as_str), Some("cpu-1"));
        assert_eq!(q.get("name").map(String::as_str), Some("Ryzen 5 7600"));
    }

    #[test]
    fn test_parse_query_malformed_escape() {
        let q = parse_query("x=%zz");
        assert_eq!(q.get("x").map(String::as_str), Some("%zz"));
    }

    #[test]
    fn test_header_case_insensitive() {
        let mut ctx = RequestContext::new(Method::Get, "/");
        ctx.headers
            .insert("Content-Type".to_string(), "text/html".to_string());
        assert_eq!(ctx.header("content-type"), Some("text/html"));
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("post"), Method::Post);
        assert_eq!(Method::parse("GET"), Method::Get);
        assert_eq!(Method::parse("weird"), Method::Get);
    }
}
