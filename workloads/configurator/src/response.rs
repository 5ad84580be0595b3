//! Handler response type, independent of the Spin HTTP bindings.

use serde::Serialize;

/// A fully materialized HTTP response.
///
/// Handlers build these on any target; the wasm32 entry point converts
/// them into Spin responses at the very edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AppResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl AppResponse {
    /// A 200 HTML page.
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: body.into_bytes(),
        }
    }

    /// A 200 JSON payload.
    pub fn json<T: Serialize>(value: &T) -> Self {
        Self::json_with_status(200, value)
    }

    /// A JSON payload with an explicit status.
    pub fn json_with_status<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body,
            },
            Err(_) => Self::text(500, "serialization failure"),
        }
    }

    /// A plain-text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: body.into().into_bytes(),
        }
    }

    /// A 400 with a JSON error body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(400, message)
    }

    /// A 404 with a JSON error body.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(404, message)
    }

    /// A 405 with a JSON error body.
    pub fn method_not_allowed() -> Self {
        Self::error(405, "method not allowed")
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        #[derive(Serialize)]
        struct ErrorBody {
            error: String,
        }
        Self::json_with_status(
            status,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive). Used by tests.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body as UTF-8, lossy. Used by tests.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
