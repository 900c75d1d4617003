//! Doctor directory feed boundary.
//!
//! This crate provides the **wire model** of the upstream practitioner feed and the
//! translation into [`Doctor`](directory_types::Doctor) records:
//! - `wire`: raw JSON records and the raw→domain translation rules
//! - `fallback`: the fixed dataset substituted when the feed cannot be read
//! - `source`: the [`DoctorSource`] seam and its HTTP implementation
//!
//! Fetching never fails from the caller's point of view. Transport, status and payload
//! problems are logged and answered with the fallback dataset. [`FetchError`] is only
//! observable through [`HttpDoctorSource::try_fetch`].

pub mod fallback;
pub mod source;
pub mod wire;

pub use fallback::fallback_doctors;
pub use source::{DoctorSource, HttpDoctorSource, StaticDoctorSource};
pub use wire::{leading_number, parse_feed};

/// Errors raised while reading the upstream feed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("feed answered with HTTP status {0}")]
    Status(u16),

    #[error("malformed feed payload at {path}: {message}")]
    Payload { path: String, message: String },
}

/// Type alias for Results that can fail with a [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;
