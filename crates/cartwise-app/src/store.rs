//! Shared wallet state.
//!
//! [`BudgetStore`] is the one owner of the last known [`BudgetStatus`].
//! Pages that mutate the wallet publish the new status here; pages that
//! display it read [`BudgetStore::current`] or hold a receiver from
//! [`BudgetStore::subscribe`]. A receiver always sees the latest value, so
//! there is no window between a publish and a subscriber registering.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cartwise_client::{ApiClient, ClientError};
use cartwise_core::BudgetStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::AppError;

#[derive(Clone)]
pub struct BudgetStore {
    tx: Arc<watch::Sender<Option<BudgetStatus>>>,
    cache: Option<WalletCache>,
}

impl BudgetStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            cache: None,
        }
    }

    /// Store that also writes every published balance to `cache`.
    #[must_use]
    pub fn with_cache(cache: WalletCache) -> Self {
        Self {
            cache: Some(cache),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<BudgetStatus> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<BudgetStatus>> {
        self.tx.subscribe()
    }

    /// Replaces the known status and notifies subscribers.
    ///
    /// A failed cache write is logged and otherwise ignored. The cache file
    /// is a few hundred bytes, so it is written inline on the caller's task.
    pub fn publish(&self, status: BudgetStatus) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write(&status) {
                tracing::warn!(error = %e, "failed to write wallet cache");
            }
        }
        self.tx.send_replace(Some(status));
    }

    /// Re-fetches the status from the backend and publishes it.
    ///
    /// On failure the previously known status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] from the status request.
    pub async fn refresh(
        &self,
        client: &ApiClient,
        user_id: &str,
    ) -> Result<BudgetStatus, ClientError> {
        let status = client.budget_status(user_id).await?;
        self.publish(status.clone());
        Ok(status)
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BudgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetStore")
            .field("current", &*self.tx.borrow())
            .field("cache", &self.cache)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wallet cache
// ---------------------------------------------------------------------------

/// On-disk record of the last published balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedWallet {
    pub balance: f64,
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WalletCache {
    path: PathBuf,
}

impl WalletCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `status` as JSON, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WalletCacheIo`] if the file cannot be written.
    pub fn write(&self, status: &BudgetStatus) -> Result<(), AppError> {
        let record = CachedWallet {
            balance: status.wallet_balance,
            currency: status.currency.clone(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_vec_pretty(&record).map_err(|source| {
            AppError::WalletCacheFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        std::fs::write(&self.path, body).map_err(|source| self.io_error(source))
    }

    /// Reads the cached record. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read(&self) -> Result<Option<CachedWallet>, AppError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| AppError::WalletCacheFormat {
                path: self.path.clone(),
                source,
            })
    }

    fn io_error(&self, source: std::io::Error) -> AppError {
        AppError::WalletCacheIo {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(balance: f64) -> BudgetStatus {
        BudgetStatus {
            user_id: "demo".into(),
            budget_limit: Some(500.0),
            wallet_balance: balance,
            currency: "USD".into(),
        }
    }

    #[test]
    fn new_store_has_no_status() {
        assert!(BudgetStore::new().current().is_none());
    }

    #[test]
    fn subscriber_registered_after_publish_sees_latest() {
        let store = BudgetStore::new();
        store.publish(status(120.0));
        let rx = store.subscribe();
        let seen = rx.borrow().clone().unwrap();
        assert!((seen.wallet_balance - 120.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn subscriber_is_notified_of_publish() {
        let store = BudgetStore::new();
        let mut rx = store.subscribe();
        let publisher = store.clone();
        publisher.publish(status(80.0));

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone().unwrap();
        assert!((seen.wallet_balance - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clones_share_state() {
        let store = BudgetStore::new();
        let other = store.clone();
        other.publish(status(42.0));
        assert_eq!(store.current(), Some(status(42.0)));
    }

    #[test]
    fn publish_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WalletCache::new(dir.path().join("nested").join("wallet.json"));
        let store = BudgetStore::with_cache(cache.clone());

        store.publish(status(150.0));

        let cached = cache.read().unwrap().unwrap();
        assert!((cached.balance - 150.0).abs() < f64::EPSILON);
        assert_eq!(cached.currency, "USD");
    }

    #[test]
    fn missing_cache_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = WalletCache::new(dir.path().join("wallet.json"));
        assert!(cache.read().unwrap().is_none());
    }

    #[test]
    fn corrupt_cache_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(&path, "not json").unwrap();
        let err = WalletCache::new(&path).read().unwrap_err();
        assert!(matches!(err, AppError::WalletCacheFormat { .. }), "got {err:?}");
    }
}
