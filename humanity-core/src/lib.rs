pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use models::credentials::{Credentials, Session};
pub use models::request_envelope::{Params, RequestEnvelope, RequestMethod};
pub use models::response::ApiResponse;
