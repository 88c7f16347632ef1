use cartwise_core::Product;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{SearchRequest, SearchResponse};

impl ApiClient {
    /// Lists the products the agent curated for the current session.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.get("/api/products").await
    }

    /// Fetches one product. The id is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// [`ClientError::HttpStatus`] with status 404 when the id is unknown;
    /// otherwise any [`ClientError`] from the request.
    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let segment = utf8_percent_encode(id, NON_ALPHANUMERIC);
        self.get(&format!("/api/products/{segment}")).await
    }

    /// Runs a ranked search. Results come back grouped by category, each
    /// product with its score breakdown and explanation.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn search_products(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ClientError> {
        self.post("/api/products/search", request).await
    }
}
