use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the shopping front end.
///
/// The `*_delay_ms` values pace the simulated UI transitions (optimize
/// toast, search hand-off, checkout confirmation, OAuth redirect). Tests
/// set them to zero.
#[derive(Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub user_id: String,
    pub currency: String,
    pub request_timeout_secs: u64,
    pub optimize_delay_ms: u64,
    pub search_delay_ms: u64,
    pub checkout_delay_ms: u64,
    pub redirect_delay_ms: u64,
    /// Where the last known wallet balance is written; `None` disables it.
    pub wallet_cache_path: Option<PathBuf>,
    pub buyer_email: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn optimize_delay(&self) -> Duration {
        Duration::from_millis(self.optimize_delay_ms)
    }

    #[must_use]
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    #[must_use]
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Configuration with every delay zeroed, pointed at `api_base_url`.
    ///
    /// Intended for tests that run page flows against a mock server.
    #[must_use]
    pub fn for_base_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            env: Environment::Test,
            log_level: "debug".to_string(),
            user_id: "demo".to_string(),
            currency: "USD".to_string(),
            request_timeout_secs: 5,
            optimize_delay_ms: 0,
            search_delay_ms: 0,
            checkout_delay_ms: 0,
            redirect_delay_ms: 0,
            wallet_cache_path: None,
            buyer_email: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("user_id", &self.user_id)
            .field("currency", &self.currency)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("optimize_delay_ms", &self.optimize_delay_ms)
            .field("search_delay_ms", &self.search_delay_ms)
            .field("checkout_delay_ms", &self.checkout_delay_ms)
            .field("redirect_delay_ms", &self.redirect_delay_ms)
            .field("wallet_cache_path", &self.wallet_cache_path)
            .field(
                "buyer_email",
                &self.buyer_email.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
