use humanity_core::{ApiResponse, CoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Envelope error: {0}")]
    Envelope(#[from] CoreError),

    /// The service answered but the status flag was not 1. Carries the
    /// full response so callers can work out why.
    #[error("Request rejected by Humanity API (status: {})", .0.status_label())]
    Rejected(Box<ApiResponse>),

    #[error("Login succeeded but the response carried no token")]
    MissingToken(Box<ApiResponse>),
}

impl ClientError {
    /// Response attached to an application-level failure, if any.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ClientError::Rejected(response) | ClientError::MissingToken(response) => Some(response),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
