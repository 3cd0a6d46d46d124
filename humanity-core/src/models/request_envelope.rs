use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::Result;
use crate::models::credentials::Session;

/// Caller-supplied RPC parameters, merged into the `request` object.
pub type Params = Map<String, Value>;

/// Output format requested from the remote service. Only JSON is supported.
pub const OUTPUT_FORMAT: &str = "json";

/// Name of the single form field carrying the encoded envelope.
pub const FORM_FIELD: &str = "data";

/// RPC method tag placed in `request.method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Get,
    Create,
    Update,
    Delete,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Create => "CREATE",
            RequestMethod::Update => "UPDATE",
            RequestMethod::Delete => "DELETE",
        }
    }
}

/// Outbound request envelope.
///
/// Serializes to `{key, output, token, request: {method, module, ...params}}`,
/// the only request shape the Humanity API accepts. Built fresh for every
/// call, so the token is whatever the session held at construction time.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    pub key: String,
    pub output: &'static str,
    pub token: Session,
    pub request: Params,
}

impl RequestEnvelope {
    /// Build an envelope for `module`.
    ///
    /// `method` and `module` are inserted first and `params` are merged on
    /// top, so a parameter literally named `method` or `module` replaces the
    /// RPC target. That override is logged but not rejected.
    pub fn new(
        api_key: &str,
        session: &Session,
        method: RequestMethod,
        module: &str,
        params: Params,
    ) -> Self {
        let mut request = Params::new();
        request.insert("method".to_string(), Value::from(method.as_str()));
        request.insert("module".to_string(), Value::from(module));

        for (name, value) in params {
            if name == "method" || name == "module" {
                tracing::warn!(module, param = %name, "Parameter overrides envelope field");
            }
            request.insert(name, value);
        }

        Self {
            key: api_key.to_string(),
            output: OUTPUT_FORMAT,
            token: session.clone(),
            request,
        }
    }

    /// RPC module the envelope targets after parameter merging.
    pub fn module(&self) -> Option<&str> {
        self.request.get("module").and_then(Value::as_str)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as an `application/x-www-form-urlencoded` body: `data=<json>`.
    pub fn to_form_body(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(form_urlencoded::Serializer::new(String::new())
            .append_pair(FORM_FIELD, &json)
            .finish())
    }
}
