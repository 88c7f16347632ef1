use std::sync::Arc;

use cartwise_client::{ApiClient, ClientError};
use cartwise_core::AppConfig;

use crate::store::{BudgetStore, WalletCache};

/// Everything the pages share: the backend client, configuration and the
/// wallet store. Cloning is cheap and every clone sees the same store.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub config: Arc<AppConfig>,
    pub budget: BudgetStore,
}

impl AppContext {
    /// Builds the client from `config` and attaches the wallet cache when a
    /// path is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client cannot be constructed.
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let client = ApiClient::from_config(&config)?;
        let budget = config
            .wallet_cache_path
            .as_ref()
            .map_or_else(BudgetStore::new, |path| {
                BudgetStore::with_cache(WalletCache::new(path))
            });
        Ok(Self {
            client,
            config: Arc::new(config),
            budget,
        })
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }
}
