use serde::{Serialize, Serializer};
use std::fmt;

/// Account credentials supplied by the host application.
///
/// No validation is performed; empty strings are accepted and forwarded
/// to the remote service as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key issued for the Humanity account
    pub api_key: String,

    /// Staff username used by `staff.login`
    pub username: String,

    /// Staff password used by `staff.login`
    pub password: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token state of a client session.
///
/// A session starts out unauthenticated and becomes authenticated once the
/// host stores the token returned by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(String),
}

impl Session {
    /// Token value as it appears in the request envelope.
    ///
    /// The remote service always expects a `token` field, so an
    /// unauthenticated session is sent as the empty string.
    pub fn wire_token(&self) -> &str {
        match self {
            Session::Unauthenticated => "",
            Session::Authenticated(token) => token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

impl Serialize for Session {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("key-1", "alice", "hunter2");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_empty_credentials_accepted() {
        let creds = Credentials::new("", "", "");
        assert_eq!(creds.api_key, "");
        assert_eq!(creds.username, "");
    }

    #[test]
    fn test_session_wire_token() {
        assert_eq!(Session::default().wire_token(), "");
        assert_eq!(Session::Authenticated("abc".into()).wire_token(), "abc");
    }

    #[test]
    fn test_session_serializes_as_string() {
        let unauth = serde_json::to_string(&Session::Unauthenticated).unwrap();
        let auth = serde_json::to_string(&Session::Authenticated("t0k".into())).unwrap();

        assert_eq!(unauth, r#""""#);
        assert_eq!(auth, r#""t0k""#);
    }
}
