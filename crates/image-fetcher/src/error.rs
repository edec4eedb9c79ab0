//! Error types for image fetching

use std::fmt;

/// Errors surfaced to callers of the image fetcher.
///
/// Cache failures are not represented here; they are absorbed inside the
/// fetcher and never turn a successful download into a failure.
#[derive(Debug)]
pub enum FetchError {
    /// The image URL string does not parse; no I/O was attempted
    InvalidUrl(String),
    /// The request could not be completed (connection failure, timeout)
    Http(Box<reqwest::Error>),
    /// The endpoint answered with a non-success status
    Status(reqwest::StatusCode),
    /// Bytes were retrieved but do not decode as an image
    InvalidImageData(image::ImageError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "Invalid image URL: {url}"),
            FetchError::Http(err) => write!(f, "Image HTTP error: {err}"),
            FetchError::Status(status) => {
                write!(f, "Image endpoint returned status {status}")
            }
            FetchError::InvalidImageData(err) => write!(f, "Invalid image data: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err.as_ref()),
            FetchError::InvalidImageData(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
