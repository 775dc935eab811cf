use crate::domain::ports::CatalogSource;
use crate::utils::error::{BadgeError, Result};
use reqwest::Client;

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/kamuridesu/markdown-badges/master/README.md";

/// Fetches the badge catalog markdown over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<String> {
        tracing::debug!("Making catalog request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            return Err(BadgeError::HttpStatusError {
                endpoint: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_catalog_returns_body() {
        let server = MockServer::start();
        let catalog_mock = server.mock(|when, then| {
            when.method(GET).path("/README.md");
            then.status(200).body("### Languages\n");
        });

        let source = HttpCatalogSource::new(server.url("/README.md"));
        let body = source.fetch_catalog().await.unwrap();

        catalog_mock.assert();
        assert_eq!(body, "### Languages\n");
    }

    #[tokio::test]
    async fn test_fetch_catalog_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/README.md");
            then.status(500);
        });

        let source = HttpCatalogSource::new(server.url("/README.md"));
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, BadgeError::HttpStatusError { status: 500, .. }));
    }
}
