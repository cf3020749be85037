use thiserror::Error;

pub mod types;
pub mod utils;
pub mod env;
pub mod request_user;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing header: {0}")]
    MissingHeader(&'static str),
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },
}
