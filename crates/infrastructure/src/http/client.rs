//! HTTP catalog adapter using reqwest.
//!
//! Implements the `PhotoCatalog` port against the remote photo service.
//! Every request carries the configured `client_id` query parameter; the
//! signing scheme itself belongs to the transport collaborator and is not
//! modeled here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use aperture_application::ports::{CatalogError, PhotoCatalog, SearchResults};
use aperture_domain::{AuthorProfile, Photo};

use super::dto::{PhotoDto, SearchEnvelopeDto, UserProfileDto, collect_photos};

/// Connection settings for the remote photo service.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the service, e.g. `https://api.photos.example/`.
    pub base_url: Url,
    /// Client identifier appended to every request.
    pub client_id: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl CatalogConfig {
    /// Creates a config with the default timeout.
    #[must_use]
    pub fn new(base_url: Url, client_id: impl Into<String>) -> Self {
        Self {
            base_url,
            client_id: client_id.into(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Photo catalog adapter backed by `reqwest::Client`.
pub struct HttpPhotoCatalog {
    client: Client,
    config: CatalogConfig,
}

impl HttpPhotoCatalog {
    /// Creates a catalog client for the configured service.
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(concat!("aperture/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| CatalogError::Other {
                message: error.to_string(),
            })?;
        Ok(Self { client, config })
    }

    /// Creates an adapter over a caller-supplied client, keeping its
    /// transport settings.
    #[must_use]
    pub const fn with_client(client: Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Builds an endpoint URL with the client identifier attached.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let mut url = self
            .config
            .base_url
            .join(path)
            .map_err(|error| CatalogError::Other {
                message: format!("invalid endpoint {path}: {error}"),
            })?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id);
        Ok(url)
    }

    /// Issues a GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_owned(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|error| CatalogError::Decode {
                message: error.to_string(),
            })
    }
}

/// Maps reqwest failures into port errors. Status failures are handled
/// separately from the response; everything arriving here failed before or
/// during the exchange.
fn map_transport_error(error: reqwest::Error) -> CatalogError {
    if error.is_timeout() || error.is_connect() {
        return CatalogError::Connectivity {
            message: error.to_string(),
        };
    }
    if error.is_decode() {
        return CatalogError::Decode {
            message: error.to_string(),
        };
    }
    CatalogError::Other {
        message: error.to_string(),
    }
}

#[async_trait]
impl PhotoCatalog for HttpPhotoCatalog {
    async fn list_photos(
        &self,
        page_index: u32,
        per_page: usize,
    ) -> Result<Vec<Photo>, CatalogError> {
        let url = self.endpoint("photos")?;
        let records: Vec<PhotoDto> = self
            .get_json(
                url,
                &[
                    ("page", page_index.to_string()),
                    ("per_page", per_page.to_string()),
                ],
            )
            .await?;
        Ok(collect_photos(records))
    }

    async fn search_photos(
        &self,
        query: &str,
        page_index: u32,
        per_page: usize,
    ) -> Result<SearchResults, CatalogError> {
        let url = self.endpoint("search/photos")?;
        let envelope: SearchEnvelopeDto = self
            .get_json(
                url,
                &[
                    ("query", query.to_owned()),
                    ("page", page_index.to_string()),
                    ("per_page", per_page.to_string()),
                ],
            )
            .await?;
        Ok(SearchResults {
            total: envelope.total,
            total_pages: envelope.total_pages,
            results: collect_photos(envelope.results),
        })
    }

    async fn get_photo(&self, id: &str) -> Result<Photo, CatalogError> {
        let url = self.endpoint(&format!("photos/{id}"))?;
        let record: PhotoDto = self.get_json(url, &[]).await?;
        record.into_photo().ok_or_else(|| CatalogError::Decode {
            message: format!("photo {id}: record failed validation"),
        })
    }

    async fn get_author(&self, username: &str) -> Result<AuthorProfile, CatalogError> {
        let url = self.endpoint(&format!("users/{username}"))?;
        let record: UserProfileDto = self.get_json(url, &[]).await?;
        record.into_profile().ok_or_else(|| CatalogError::Decode {
            message: format!("user {username}: record failed validation"),
        })
    }
}
