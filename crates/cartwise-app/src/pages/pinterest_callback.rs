//! Landing point of the Pinterest OAuth redirect.

use percent_encoding::percent_decode_str;

use crate::context::AppContext;
use crate::nav::Route;

pub const CONNECTING: &str = "Connecting Pinterest...";
pub const MISSING_CODE: &str = "Missing authorization code.";
pub const CONNECTED: &str = "Pinterest connected. Redirecting...";
pub const FAILED: &str = "Failed to connect Pinterest.";

/// `code` and `state` from the redirect URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

impl CallbackQuery {
    /// Accepts a full URL, a `?`-prefixed query string, or a bare query
    /// string. Empty values count as absent; the first occurrence wins.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let query = input.split_once('?').map_or(input, |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);

        let mut parsed = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            if value.is_empty() {
                continue;
            }
            match key {
                "code" if parsed.code.is_none() => parsed.code = Some(value),
                "state" if parsed.state.is_none() => parsed.state = Some(value),
                _ => {}
            }
        }
        parsed
    }
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[derive(Debug)]
pub struct PinterestCallbackPage {
    ctx: AppContext,
    message: String,
}

impl PinterestCallbackPage {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            message: CONNECTING.to_string(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Completes the OAuth exchange for the redirect `url_or_query`.
    ///
    /// Returns [`Route::Landing`] after the redirect delay on success. A
    /// missing code, a rejected exchange and a failed request all leave a
    /// message on the page and return `None`; nothing is retried.
    pub async fn run(&mut self, url_or_query: &str) -> Option<Route> {
        let query = CallbackQuery::parse(url_or_query);
        let Some(code) = query.code else {
            self.message = MISSING_CODE.to_string();
            return None;
        };

        match self
            .ctx
            .client
            .complete_pinterest_callback(&code, query.state.as_deref())
            .await
        {
            Ok(true) => {
                tracing::info!("pinterest account connected");
                self.message = CONNECTED.to_string();
                tokio::time::sleep(self.ctx.config.redirect_delay()).await;
                Some(Route::Landing)
            }
            Ok(false) => {
                tracing::warn!("pinterest rejected the authorization code");
                self.message = FAILED.to_string();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "pinterest callback failed");
                self.message = FAILED.to_string();
                None
            }
        }
    }
}
