use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{ExtractRequest, ExtractResponse, ExtractedRequirements};

impl ApiClient {
    /// Turns a free-text shopping request plus preference tags into
    /// structured requirements.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn extract_requirements(
        &self,
        query: &str,
        preferences: &[String],
    ) -> Result<ExtractedRequirements, ClientError> {
        let response: ExtractResponse = self
            .post("/api/llm/extract", &ExtractRequest { query, preferences })
            .await?;
        Ok(response.data)
    }
}
