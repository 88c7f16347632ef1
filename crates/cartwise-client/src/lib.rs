//! Typed client for the shopping assistant backend.
//!
//! [`ApiClient`] owns the HTTP plumbing; each backend resource adds its
//! operations to it from a module under `api/`.

mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ClientError;
pub use types::{
    AgentLogEntry, AutomateCheckoutRequest, AutomateCheckoutResponse, BuyerContact, CartItem,
    CartQuery, CartResponse, CartVariant, CheckoutLine, ExtractedRequirements, PinterestLogin,
    PinterestStatus, ProposeResponse, RankedProduct, RankingWeights, ScoreBreakdown,
    SearchRequest, SearchResponse, TryOnItem,
};
