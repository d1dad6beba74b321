use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use super::{Catalog, CatalogError};
use crate::domain::{CatalogProduct, ProductId};

/// Client for the remote product API.
///
/// Looks products up with `GET {base_url}/products/{id}` and expects a JSON
/// object with at least `id`, `name` and `price`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!(url = %url, "Fetching product");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !status.is_success() {
            warn!(status = %status, "Catalog returned an error status");
            return Err(CatalogError::Http(format!(
                "HTTP {status}: {}",
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let product: CatalogProduct = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        if product.id != id {
            return Err(CatalogError::InvalidResponse(format!(
                "requested product {id}, got {}",
                product.id
            )));
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn catalog_for(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(format!("{}/", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetches_product_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "title": "ignored",
                "name": "Shoe",
                "price": 10,
                "image": "https://cdn.example.com/shoe.png"
            })))
            .mount(&server)
            .await;

        let product = catalog_for(&server).await.product(42).await.unwrap();
        assert_eq!(
            product,
            CatalogProduct::new(42, "Shoe", 10.0, "https://cdn.example.com/shoe.png")
        );
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = catalog_for(&server).await.product(9).await;
        assert_eq!(result, Err(CatalogError::NotFound(9)));
    }

    #[tokio::test]
    async fn maps_server_errors_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = catalog_for(&server).await.product(1).await;
        assert!(matches!(result, Err(CatalogError::Http(_))));
    }

    #[tokio::test]
    async fn rejects_malformed_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .mount(&server)
            .await;

        let result = catalog_for(&server).await.product(1).await;
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn rejects_mismatched_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "name": "Other", "price": 1
            })))
            .mount(&server)
            .await;

        let result = catalog_for(&server).await.product(1).await;
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }
}
