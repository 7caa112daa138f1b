//! Sector backend implementation using the sectors REST API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, warn};

use sectora_core::{
    model::Sector,
    ports::{PortError, SectorPort},
};

/// Public deployment of the sectors API.
pub const DEFAULT_BASE_URL: &str = "https://sistema-domicilios-backend.onrender.com/api";

/// Response from both `GET /sectors` and `POST /sectors`.
#[derive(Debug, Deserialize)]
struct SectorsResponse {
    sectors: Vec<Sector>,
}

/// Sector backend talking to a REST API rooted at `base_url`.
pub struct HttpSectorPort {
    client: Client,
    base_url: String,
}

impl HttpSectorPort {
    /// Create a new port bound to the given HTTP client and API root.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn sectors_url(&self) -> String {
        format!("{}/sectors", self.base_url)
    }
}

#[async_trait]
impl SectorPort for HttpSectorPort {
    async fn list(&self) -> Result<Vec<Sector>, PortError> {
        let url = self.sectors_url();
        debug!(%url, "fetching sectors");

        let resp = fetch_sectors(self.client.get(url)).await?;
        Ok(resp.sectors)
    }

    async fn create(&self, sector: &Sector) -> Result<Vec<Sector>, PortError> {
        let url = self.sectors_url();
        debug!(%url, name = %sector.name, "creating sector");

        let resp = fetch_sectors(self.client.post(url).json(sector)).await?;
        Ok(resp.sectors)
    }
}

/// Build a shareable backend for the API rooted at `base_url`.
#[must_use]
pub fn port(client: Client, base_url: impl Into<String>) -> Arc<dyn SectorPort> {
    Arc::new(HttpSectorPort::new(client, base_url))
}

// Send the request and decode the `{ "sectors": [...] }` envelope.
async fn fetch_sectors(req: RequestBuilder) -> Result<SectorsResponse, PortError> {
    let resp = req.send().await.map_err(PortError::from)?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        warn!(%status, %body, "sectors API rejected request");
        return Err(PortError::Status { status, body });
    }

    resp.json().await.map_err(PortError::from)
}
