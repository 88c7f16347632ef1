pub mod app_config;
pub mod budget;
pub mod card;
pub mod cart;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use budget::{BudgetStatus, ConfirmationDialog, PurchaseDecision, Quote};
pub use card::{card_type, format_card_number, format_expiry, CardFace, CardType};
pub use cart::{CartQuantities, CartSummary};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Alternative, ImageRef, Product};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
