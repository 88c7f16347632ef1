//! The shopping request panel: free-text query, preference tags, voice
//! toggle and the Pinterest connection.

use cartwise_client::ExtractedRequirements;
use tokio::task::JoinHandle;

use crate::context::AppContext;
use crate::nav::Route;

/// Preference tags offered as toggles, in display order.
pub const PREFERENCES: [&str; 5] = ["Budget", "Fast Delivery", "Trending", "My Style", "Eco-Friendly"];

pub const PINTEREST_CONNECT_ERROR: &str =
    "Failed to start Pinterest connection. Is the backend running?";

#[derive(Debug)]
pub struct SearchSidebar {
    ctx: AppContext,
    query: String,
    active_preferences: Vec<String>,
    listening: bool,
    searching: bool,
    pinterest_connected: bool,
    pinterest_loading: bool,
    pinterest_error: Option<String>,
    requirements: Option<ExtractedRequirements>,
    pending_extraction: Option<JoinHandle<Option<ExtractedRequirements>>>,
}

impl SearchSidebar {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            query: String::new(),
            active_preferences: Vec::new(),
            listening: false,
            searching: false,
            pinterest_connected: false,
            pinterest_loading: false,
            pinterest_error: None,
            requirements: None,
            pending_extraction: None,
        }
    }

    /// Checks the Pinterest connection. Any failure reads as "not
    /// connected" and is never shown to the user.
    pub async fn mount(&mut self) {
        self.pinterest_connected = match self.ctx.client.pinterest_status().await {
            Ok(status) => status.connected,
            Err(e) => {
                tracing::debug!(error = %e, "pinterest status unavailable");
                false
            }
        };
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Toggles a preference tag and returns whether it is now active.
    pub fn toggle_preference(&mut self, label: &str) -> bool {
        if let Some(pos) = self.active_preferences.iter().position(|p| p == label) {
            self.active_preferences.remove(pos);
            false
        } else {
            self.active_preferences.push(label.to_string());
            true
        }
    }

    #[must_use]
    pub fn active_preferences(&self) -> &[String] {
        &self.active_preferences
    }

    pub fn toggle_listening(&mut self) -> bool {
        self.listening = !self.listening;
        self.listening
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    #[must_use]
    pub fn pinterest_connected(&self) -> bool {
        self.pinterest_connected
    }

    /// Whether the connect button is disabled.
    #[must_use]
    pub fn pinterest_loading(&self) -> bool {
        self.pinterest_loading
    }

    #[must_use]
    pub fn pinterest_error(&self) -> Option<&str> {
        self.pinterest_error.as_deref()
    }

    /// Requirements extracted by the last search, if extraction finished.
    #[must_use]
    pub fn requirements(&self) -> Option<&ExtractedRequirements> {
        self.requirements.as_ref()
    }

    /// Starts the Pinterest OAuth flow.
    ///
    /// On success the caller redirects to the returned URL and the button
    /// stays disabled. On failure an inline error is set, the button is
    /// re-enabled and `None` is returned.
    pub async fn connect_pinterest(&mut self) -> Option<Route> {
        self.pinterest_loading = true;
        self.pinterest_error = None;

        match self.ctx.client.pinterest_login().await {
            Ok(login) => {
                tracing::debug!(state = %login.state, "redirecting to pinterest oauth");
                Some(Route::External(login.oauth_url))
            }
            Err(e) => {
                tracing::warn!(error = %e, "pinterest login failed");
                self.pinterest_loading = false;
                self.pinterest_error = Some(PINTEREST_CONNECT_ERROR.to_string());
                None
            }
        }
    }

    /// Sends the request to the agent and hands off to the cart.
    ///
    /// Requirement extraction runs in the background; its failure is
    /// ignored. The hand-off happens after the configured search delay
    /// whether or not extraction has finished.
    pub async fn start_shopping(&mut self) -> Route {
        self.searching = true;

        let client = self.ctx.client.clone();
        let query = self.query.clone();
        let preferences = self.active_preferences.clone();
        let extraction = tokio::spawn(async move {
            match client.extract_requirements(&query, &preferences).await {
                Ok(requirements) => Some(requirements),
                Err(e) => {
                    tracing::debug!(error = %e, "requirement extraction failed");
                    None
                }
            }
        });

        tokio::time::sleep(self.ctx.config.search_delay()).await;

        if extraction.is_finished() {
            self.requirements = extraction.await.ok().flatten();
        } else {
            self.pending_extraction = Some(extraction);
        }

        self.searching = false;
        Route::Cart
    }

    /// Waits for an extraction that was still running at hand-off.
    pub async fn finish_extraction(&mut self) -> Option<&ExtractedRequirements> {
        if let Some(pending) = self.pending_extraction.take() {
            self.requirements = pending.await.ok().flatten();
        }
        self.requirements.as_ref()
    }
}
