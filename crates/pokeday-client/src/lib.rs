//! HTTP fetch stage for the Pokémon-of-the-day endpoints.
//!
//! One fetch-and-validate stage, instantiated per hop: the public proxy uses
//! it against the private provider's `/today`, and presentation-side callers
//! use it against the proxy's `/api/pokemonOfDay`. The base URL is injected
//! at construction so there is no ambient environment branching, and a
//! failed fetch is always a typed `Err` — never a substituted default entry.

use std::time::Duration;

use pokeday_core::Entry;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Path served by the private provider.
pub const TODAY_PATH: &str = "/today";

/// Path served by the public proxy.
pub const POKEMON_OF_DAY_PATH: &str = "/api/pokemonOfDay";

#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or timed out on the wire.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status; the body is not parsed.
    #[error("unexpected status: {status}")]
    Status { status: StatusCode },

    /// The body did not match the expected entry shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for one hop of the entry-of-the-day chain.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client against `base_url` with a bounded request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Issues a single `GET {base_url}{path}` and decodes the body as an
    /// [`Entry`].
    ///
    /// The status is validated before the body is touched, so a non-success
    /// response never reaches the decoder. At most one attempt; no retries.
    pub async fn fetch_entry(&self, path: &str) -> Result<Entry, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching entry of the day");

        let response = self.http.get(&url).send().await.map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        response.json::<Entry>().await.map_err(FetchError::Decode)
    }
}
