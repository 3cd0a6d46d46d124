use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use humanity_core::{ApiResponse, Credentials, Params, RequestEnvelope, RequestMethod, Session};
use reqwest::{header, Client, Response};
use serde_json::Value;

/// Report type requested by [`HumanityClient::get_timesheets`].
const TIMESHEETS_REPORT_TYPE: &str = "timesheets_summary";

/// HTTP client for the Humanity workforce-scheduling API
///
/// Every call POSTs a single form-encoded request envelope to the API
/// endpoint and succeeds only when the response's status flag is 1.
/// Nothing is retried; transport failures and rejected responses are
/// returned to the caller unchanged.
pub struct HumanityClient {
    config: ClientConfig,
    credentials: Credentials,
    session: Session,
    client: Client,
}

impl HumanityClient {
    /// Create a new client for the public Humanity endpoint
    ///
    /// The session starts unauthenticated; call [`login`](Self::login) and
    /// store the returned token with [`set_token`](Self::set_token), or use
    /// [`authenticate`](Self::authenticate) to do both.
    ///
    /// # Example
    /// ```no_run
    /// use humanity_client::HumanityClient;
    ///
    /// let client = HumanityClient::new("api-key", "alice", "secret").unwrap();
    /// ```
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(api_key, username, password),
            ClientConfig::default(),
        )
    }

    /// Create a new client with explicit endpoint settings
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            credentials,
            session: Session::Unauthenticated,
            client,
        })
    }

    /// Create a new client POSTing to `base_url`
    ///
    /// # Errors
    /// Returns `ClientError::UrlParseError` if `base_url` is not a valid URL
    pub fn from_base_url(credentials: Credentials, base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::with_base_url(base_url)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Set the access token for subsequent API requests
    ///
    /// Returns the client itself so calls can be chained.
    pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.session = Session::Authenticated(token.into());
        self
    }

    /// Drop the stored token, returning the session to unauthenticated
    pub fn clear_token(&mut self) -> &mut Self {
        self.session = Session::Unauthenticated;
        self
    }

    /// Fetch the account configuration (`api.config`)
    pub async fn get_config(&self) -> Result<ApiResponse> {
        self.request(RequestMethod::Get, "api.config", Params::new())
            .await
    }

    /// Get a list of locations (`location.locations`)
    ///
    /// `location_type` is forwarded uninterpreted. A `null` value leaves the
    /// `type` parameter out of the request entirely.
    pub async fn get_locations(&self, location_type: impl Into<Value>) -> Result<ApiResponse> {
        let mut params = Params::new();
        let location_type = location_type.into();
        if !location_type.is_null() {
            params.insert("type".to_string(), location_type);
        }

        self.request(RequestMethod::Get, "location.locations", params)
            .await
    }

    /// Get a timesheet summary between two dates (`reports.timesheets`)
    ///
    /// # Arguments
    /// * `start_date` - start date in the form `MMM dd, YYYY`, e.g. "Jan 05, 2023"
    /// * `end_date` - end date in the same form
    ///
    /// Dates are forwarded as-is; the remote service does the parsing.
    pub async fn get_timesheets(&self, start_date: &str, end_date: &str) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.insert("start_date".to_string(), Value::from(start_date));
        params.insert("end_date".to_string(), Value::from(end_date));
        params.insert("type".to_string(), Value::from(TIMESHEETS_REPORT_TYPE));

        self.request(RequestMethod::Get, "reports.timesheets", params)
            .await
    }

    /// Log in as the configured staff user (`staff.login`)
    ///
    /// The token in a successful response is not stored; pass it to
    /// [`set_token`](Self::set_token) or use [`authenticate`](Self::authenticate).
    pub async fn login(&self) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.insert("username".to_string(), Value::from(self.credentials.username.as_str()));
        params.insert("password".to_string(), Value::from(self.credentials.password.as_str()));

        self.request(RequestMethod::Get, "staff.login", params)
            .await
    }

    /// Log in and store the issued token in the session
    ///
    /// # Errors
    /// Returns `ClientError::MissingToken` if the login succeeded but the
    /// response held no token; the session is left unchanged.
    pub async fn authenticate(&mut self) -> Result<ApiResponse> {
        let response = self.login().await?;

        match response.token() {
            Some(token) => {
                let token = token.to_string();
                self.set_token(token);
                tracing::info!("Authenticated as {}", self.credentials.username);
                Ok(response)
            }
            None => {
                tracing::warn!("Login response for {} carried no token", self.credentials.username);
                Err(ClientError::MissingToken(Box::new(response)))
            }
        }
    }

    /// Call an arbitrary API module
    ///
    /// `params` are merged over `{method, module}` in the request envelope.
    /// A parameter named `method` or `module` replaces the RPC target, so
    /// callers should not use those names.
    ///
    /// # Errors
    /// * `ClientError::RequestFailed` on transport failures and non-2xx HTTP
    ///   statuses
    /// * `ClientError::Rejected` when the response's status flag is not 1,
    ///   including responses with no status flag at all
    pub async fn request(
        &self,
        method: RequestMethod,
        module: &str,
        params: Params,
    ) -> Result<ApiResponse> {
        let envelope = RequestEnvelope::new(
            &self.credentials.api_key,
            &self.session,
            method,
            module,
            params,
        );
        let body = envelope.to_form_body()?;

        tracing::debug!("Sending {} {} to: {}", method.as_str(), module, self.config.base_url);

        let response = match self
            .client
            .post(self.config.base_url.clone())
            .header(header::ORIGIN, &self.config.origin)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .and_then(Response::error_for_status)
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Request for {} failed: {}", module, e);
                return Err(ClientError::RequestFailed(e));
            }
        };

        let http_status = response.status().as_u16();
        let api_response = ApiResponse::from_body(http_status, response.text().await?);

        if api_response.is_success() {
            tracing::info!("{} succeeded", module);
            Ok(api_response)
        } else {
            tracing::warn!(
                "{} rejected with status: {}",
                module,
                api_response.status_label()
            );
            Err(ClientError::Rejected(Box::new(api_response)))
        }
    }
}
