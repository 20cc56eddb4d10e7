use std::future::Future;

use thiserror::Error;
use url::Url;

use crate::types::CatalogEntry;

pub const CATALOG_PATH: &str = "/api/cheeses";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Where the page gets its catalog from.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, FetchError>> + Send;
}

/// Fetches the catalog from a running service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalogSource {
    base: Url,
    http: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> Result<Url, FetchError> {
        Ok(self.base.join(CATALOG_PATH)?)
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        let url = self.endpoint()?;
        log::debug!("GET {}", url);
        let entries = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CatalogEntry>>()
            .await?;
        Ok(entries)
    }
}
