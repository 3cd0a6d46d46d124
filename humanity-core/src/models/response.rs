use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response received from the Humanity API.
///
/// Apart from the `status` flag nothing in the body is typed or validated;
/// the full body is kept so callers can inspect whatever the remote service
/// returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code of the response
    pub http_status: u16,

    /// Parsed response body. Bodies that are not valid JSON are kept as a
    /// JSON string.
    pub data: Value,
}

impl ApiResponse {
    pub fn new(http_status: u16, data: Value) -> Self {
        Self { http_status, data }
    }

    /// Build a response from a raw body, falling back to a string value when
    /// the body does not parse as JSON.
    pub fn from_body(http_status: u16, body: String) -> Self {
        let data = serde_json::from_str(&body).unwrap_or(Value::String(body));
        Self { http_status, data }
    }

    /// Raw `status` value, if the body is an object carrying one.
    pub fn status_flag(&self) -> Option<&Value> {
        self.data.get("status")
    }

    /// Whether the status flag equals 1.
    ///
    /// The remote service is not consistent about the flag's type, so the
    /// comparison is loose: integer or float `1`, a string that parses to
    /// the number 1 once trimmed (`"1"`, `" 1.0 "`), or boolean `true`.
    pub fn is_success(&self) -> bool {
        self.status_flag().is_some_and(is_success_flag)
    }

    /// Access token issued by `staff.login`.
    pub fn token(&self) -> Option<&str> {
        self.data
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Nested `data` member of the body, where the service puts results.
    pub fn payload(&self) -> Option<&Value> {
        self.data.get("data")
    }

    /// Short human-readable form of the status flag for logs and errors.
    pub fn status_label(&self) -> String {
        match self.status_flag() {
            Some(flag) => flag.to_string(),
            None => "missing".to_string(),
        }
    }
}

fn is_success_flag(flag: &Value) -> bool {
    match flag {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| n == 1.0),
        Value::Bool(b) => *b,
        _ => false,
    }
}
