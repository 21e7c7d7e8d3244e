use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("version has invalid format, should be major.minor.patch")]
    InvalidVersion,
    #[error("invalid value for preference {name}: {reason}")]
    InvalidPreference { name: String, reason: String },
    #[error("request to {url} failed with status {status}")]
    Http { status: u16, url: String },
}
