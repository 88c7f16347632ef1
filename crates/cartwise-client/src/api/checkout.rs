use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{AutomateCheckoutRequest, AutomateCheckoutResponse};

impl ApiClient {
    /// Hands the cart and buyer details to the backend's retailer
    /// automation. The backend runs it in the background; this returns as
    /// soon as it has been started.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn automate_checkout(
        &self,
        request: &AutomateCheckoutRequest,
    ) -> Result<AutomateCheckoutResponse, ClientError> {
        self.post("/api/checkout/automate", request).await
    }
}
