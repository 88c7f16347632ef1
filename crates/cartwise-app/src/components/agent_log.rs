use cartwise_client::{AgentLogEntry, ApiClient};

/// The agent activity timeline. Hovering a step reveals its detail.
#[derive(Debug, Clone, Default)]
pub struct AgentLogView {
    entries: Vec<AgentLogEntry>,
    hovered: Option<u32>,
}

impl AgentLogView {
    /// Fetches the log. A failed fetch leaves the timeline empty.
    pub async fn load(client: &ApiClient) -> Self {
        let entries = match client.agent_logs().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "agent log unavailable");
                Vec::new()
            }
        };
        Self {
            entries,
            hovered: None,
        }
    }

    #[must_use]
    pub fn from_entries(entries: Vec<AgentLogEntry>) -> Self {
        Self {
            entries,
            hovered: None,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[AgentLogEntry] {
        &self.entries
    }

    pub fn hover(&mut self, step: Option<u32>) {
        self.hovered = step;
    }

    /// Detail text of the hovered step, if any.
    #[must_use]
    pub fn visible_detail(&self) -> Option<&str> {
        let step = self.hovered?;
        self.entries
            .iter()
            .find(|e| e.step == step)
            .map(|e| e.detail.as_str())
    }
}
