//! HTTP species catalog
//!
//! Talks to a PokeAPI-compatible server: `GET {base_url}/pokemon/{species}`.

use std::time::Duration;

use super::{FetchError, SpeciesCatalog, SpeciesRecord};
use crate::config::Settings;

/// Configuration for the catalog server
#[derive(Clone, Debug)]
pub struct PokeApiConfig {
    /// Base URL of the API, without trailing slash (e.g. "https://pokeapi.co/api/v2")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            base_url: settings.api_url,
            timeout_secs: settings.timeout_secs,
        }
    }
}

impl From<&Settings> for PokeApiConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.api_url.clone(),
            timeout_secs: settings.timeout_secs,
        }
    }
}

/// Blocking client for a PokeAPI-compatible catalog
pub struct PokeApiClient {
    config: PokeApiConfig,
    client: reqwest::blocking::Client,
}

impl PokeApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: PokeApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("alpha-enemy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// URL of the species document
    pub fn species_url(&self, species: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.config.base_url.trim_end_matches('/'),
            species
        )
    }
}

impl SpeciesCatalog for PokeApiClient {
    fn lookup(&self, species: &str) -> Result<SpeciesRecord, FetchError> {
        let url = self.species_url(species);
        log::debug!("Fetching species document from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = if status.is_success() {
            response
                .text()
                .map_err(|e| FetchError::Network(e.to_string()))?
        } else {
            String::new()
        };

        record_from_response(status, &body)
    }
}

/// Map a catalog response onto a species document or a lookup failure
pub fn record_from_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<SpeciesRecord, FetchError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    SpeciesRecord::from_json(body).map_err(|e| FetchError::Parse(e.to_string()))
}
