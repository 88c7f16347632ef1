use std::path::PathBuf;

use cartwise_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("wallet cache I/O failed at {path}: {source}")]
    WalletCacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wallet cache at {path} is not valid JSON: {source}")]
    WalletCacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
