use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{PinterestCallbackResponse, PinterestLogin, PinterestStatus};

impl ApiClient {
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn pinterest_status(&self) -> Result<PinterestStatus, ClientError> {
        self.get("/api/pinterest/status").await
    }

    /// Fetches the OAuth authorization URL and its state token.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn pinterest_login(&self) -> Result<PinterestLogin, ClientError> {
        self.get("/api/pinterest/login").await
    }

    /// Completes the OAuth handshake with the code Pinterest redirected back with.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request; a missing code is a
    /// 400 from the backend.
    pub async fn complete_pinterest_callback(
        &self,
        code: &str,
        state: Option<&str>,
    ) -> Result<bool, ClientError> {
        let mut query = vec![("code", code)];
        if let Some(s) = state {
            query.push(("state", s));
        }
        let response: PinterestCallbackResponse = self
            .get_with_query("/api/pinterest/callback", &query)
            .await?;
        Ok(response.success)
    }
}
