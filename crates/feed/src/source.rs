//! Doctor sources.
//!
//! [`DoctorSource`] is the seam the listing controller fetches through. The HTTP
//! implementation performs exactly one GET per call and never surfaces an error:
//! any failure is logged and answered with [`fallback_doctors`].

use crate::wire::parse_feed;
use crate::{fallback_doctors, FetchError, FetchResult};
use async_trait::async_trait;
use directory_types::Doctor;
use std::time::Duration;
use url::Url;

/// A provider of the full doctor set.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    /// Fetch the full doctor set.
    ///
    /// Implementations must not fail; an empty list is a legitimate answer.
    async fn fetch(&self) -> Vec<Doctor>;
}

/// Reads the upstream feed over HTTP.
#[derive(Clone, Debug)]
pub struct HttpDoctorSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpDoctorSource {
    /// Build a source for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and translate the feed, reporting failures instead of substituting.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] on connection, timeout or body read failures
    /// - [`FetchError::Status`] on any non-2xx answer
    /// - [`FetchError::Payload`] when the body is not a valid feed
    pub async fn try_fetch(&self) -> FetchResult<Vec<Doctor>> {
        tracing::info!("fetching doctors from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn fetch(&self) -> Vec<Doctor> {
        match self.try_fetch().await {
            Ok(doctors) => {
                tracing::info!("doctor feed fetched: {} doctors found", doctors.len());
                doctors
            }
            Err(e) => {
                tracing::warn!("failed to fetch doctors, serving fallback set: {}", e);
                fallback_doctors()
            }
        }
    }
}

/// Serves a fixed list. Useful offline and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticDoctorSource {
    doctors: Vec<Doctor>,
}

impl StaticDoctorSource {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }
}

#[async_trait]
impl DoctorSource for StaticDoctorSource {
    async fn fetch(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }
}
