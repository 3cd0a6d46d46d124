pub mod credentials;
pub mod request_envelope;
pub mod response;
