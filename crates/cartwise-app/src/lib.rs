//! Headless page and component state for the shopping assistant.
//!
//! Each page owns its own state and talks to the backend through the shared
//! [`AppContext`]. Methods that would be button clicks in a browser are plain
//! async methods here; navigation is returned as a [`Route`] instead of
//! performed.

pub mod components;
pub mod context;
pub mod error;
pub mod nav;
pub mod notice;
pub mod pages;
pub mod store;

pub use context::AppContext;
pub use error::AppError;
pub use nav::Route;
pub use notice::{Notice, NoticeLevel};
pub use store::{BudgetStore, CachedWallet, WalletCache};
