pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use client::HumanityClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use humanity_core::{ApiResponse, Credentials, Params, RequestMethod, Session};
