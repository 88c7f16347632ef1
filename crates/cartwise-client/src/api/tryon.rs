use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{TryOnItem, TryOnRequest, TryOnResponse};

impl ApiClient {
    /// Generates a virtual try-on composite and returns its image URL.
    ///
    /// `body_image_url` is usually a `data:` URL of the uploaded photo.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn generate_tryon(
        &self,
        body_image_url: &str,
        clothing_items: &[TryOnItem],
    ) -> Result<String, ClientError> {
        let body = TryOnRequest {
            body_image_url,
            clothing_items,
        };
        let response: TryOnResponse = self.post("/api/tryon/generate", &body).await?;
        Ok(response.url)
    }
}
