use shopfront_data::FetchError;
use thiserror::Error;

/// Errors surfaced by checkout page operations.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Backend error: {0}")]
    Backend(#[from] FetchError),
}
