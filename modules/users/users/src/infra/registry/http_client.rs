use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::domain::error::LookupError;
use crate::domain::mask_birth_number;
use crate::domain::ports::RegistryClient;

#[derive(Debug, Deserialize)]
struct RuianResponse {
    ruian: Option<i32>,
}

/// HTTP adapter implementing the `RegistryClient` port.
///
/// Issues `GET {base_url}/ruian/{birth_number}`. Every request is bounded by
/// the timeout given at construction. `reqwest::Client` is `Clone + Send + Sync`,
/// so no external locking is needed.
#[derive(Clone)]
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRegistryClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn lookup_url(&self, birth_number: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::transport("registry base URL cannot be a base"))?
            .pop_if_empty()
            .extend(&["ruian", birth_number]);
        Ok(url)
    }
}

fn send_err(e: &reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::transport(e.to_string())
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    #[instrument(
        skip_all,
        fields(registry_base = %self.base_url, birth_number = %mask_birth_number(birth_number))
    )]
    async fn resolve(&self, birth_number: &str) -> Result<Option<i32>, LookupError> {
        let url = self.lookup_url(birth_number)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Registry request failed");
            send_err(&e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Registry has no record");
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Registry responded with an error");
            return Err(LookupError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: Option<RuianResponse> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::invalid_payload(e.to_string())
            }
        })?;

        let ruian = body.and_then(|b| b.ruian);
        tracing::debug!(found = ruian.is_some(), "Registry lookup completed");
        Ok(ruian)
    }
}
