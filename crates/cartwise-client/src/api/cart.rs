use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{CartQuery, CartResponse};

impl ApiClient {
    /// Fetches the retailer-backed cart assembled from the last search.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn get_cart(&self, query: &CartQuery) -> Result<CartResponse, ClientError> {
        let pairs = query.to_pairs();
        let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get_with_query("/api/cart", &borrowed).await
    }
}
