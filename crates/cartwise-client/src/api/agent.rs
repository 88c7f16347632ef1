use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::AgentLogEntry;

impl ApiClient {
    /// Fetches the agent activity log.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn agent_logs(&self) -> Result<Vec<AgentLogEntry>, ClientError> {
        self.get("/api/agent/logs").await
    }
}
