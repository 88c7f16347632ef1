//! Request and response shapes for the shopping backend.
//!
//! Field names follow the backend's JSON exactly; the budget, Pinterest,
//! try-on and checkout endpoints use `snake_case`, while cart items use
//! `camelCase`.

use std::collections::BTreeMap;

use cartwise_core::{Product, PurchaseDecision};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// /api/agent
// ---------------------------------------------------------------------------

/// One step in the agent activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLogEntry {
    pub step: u32,
    pub action: String,
    pub detail: String,
    /// Elapsed time as displayed, e.g. `"0.2s"`.
    pub time: String,
}

// ---------------------------------------------------------------------------
// /api/products/search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_days: Option<f64>,
}

/// Ranked search results, grouped by category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub weights: RankingWeights,
    #[serde(default)]
    pub results: BTreeMap<String, Vec<RankedProduct>>,
}

impl SearchResponse {
    /// Highest-scoring product per category.
    #[must_use]
    pub fn top_picks(&self) -> Vec<(&str, &RankedProduct)> {
        self.results
            .iter()
            .filter_map(|(category, ranked)| {
                ranked
                    .iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
                    .map(|best| (category.as_str(), best))
            })
            .collect()
    }
}

/// How much each criterion weighed in the ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingWeights {
    pub price: f64,
    pub delivery: f64,
    pub style: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            price: 0.33,
            delivery: 0.33,
            style: 0.34,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedProduct {
    pub product: Product,
    pub score: f64,
    pub decomposition: ScoreBreakdown,
    /// Short deterministic rationale, e.g. "boosted mainly by price".
    #[serde(default)]
    pub why_local: String,
    /// Longer explanation; only the top pick of a category has one.
    #[serde(default)]
    pub llm_explanation: Option<String>,
}

impl RankedProduct {
    #[must_use]
    pub fn explanation(&self) -> &str {
        self.llm_explanation.as_deref().unwrap_or(&self.why_local)
    }
}

/// Per-criterion contributions to a product's score.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScoreBreakdown {
    pub price_contrib: f64,
    pub delivery_contrib: f64,
    pub style_contrib: f64,
}

// ---------------------------------------------------------------------------
// /api/cart
// ---------------------------------------------------------------------------

/// Optional overrides for the cart search. Unset fields fall back to the
/// backend's last extracted requirements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartQuery {
    pub budget: Option<String>,
    pub deadline: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
    pub target: Option<String>,
    pub color: Option<String>,
    pub items: Vec<String>,
}

impl CartQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let optional = [
            ("budget", &self.budget),
            ("deadline", &self.deadline),
            ("size", &self.size),
            ("style", &self.style),
            ("target", &self.target),
            ("color", &self.color),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                pairs.push((key, v.clone()));
            }
        }
        if !self.items.is_empty() {
            pairs.push(("items", self.items.join(",")));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub retailer: String,
    #[serde(default)]
    pub delivery_estimate: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub variant: CartVariant,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartVariant {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub material: String,
}

// ---------------------------------------------------------------------------
// /api/budget
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SetBudgetRequest<'a> {
    pub user_id: &'a str,
    pub budget_limit: f64,
    pub currency: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProposeRequest<'a> {
    pub user_id: &'a str,
    pub amount: f64,
    pub item_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfirmRequest<'a> {
    pub user_id: &'a str,
    pub amount: f64,
}

/// Raw answer to a purchase proposal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProposeResponse {
    pub result: String,
}

impl ProposeResponse {
    #[must_use]
    pub fn decision(&self) -> PurchaseDecision {
        PurchaseDecision::from_message(&self.result)
    }
}

// ---------------------------------------------------------------------------
// /api/checkout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomateCheckoutRequest {
    pub items: Vec<CheckoutLine>,
    pub user_data: BuyerContact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutLine {
    pub id: String,
    pub name: String,
    pub retailer: String,
    pub url: String,
    pub price: f64,
    pub size: String,
}

impl From<&Product> for CheckoutLine {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            retailer: p.retailer.clone(),
            url: p.url.clone().unwrap_or_default(),
            price: p.price,
            size: p.size.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyerContact {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// The backend starts retailer automation in the background and returns
/// immediately; `status` says whether it was started, not whether orders
/// were placed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AutomateCheckoutResponse {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// /api/pinterest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PinterestStatus {
    pub connected: bool,
    #[serde(default)]
    pub connected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PinterestLogin {
    pub oauth_url: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PinterestCallbackResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// /api/llm
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct ExtractRequest<'a> {
    pub query: &'a str,
    pub preferences: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractResponse {
    pub data: ExtractedRequirements,
}

/// Shopping requirements the backend's language model inferred from the
/// user's free-text request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtractedRequirements {
    pub budget: String,
    pub style: Vec<String>,
    pub deadline: String,
    pub colors: Vec<String>,
    pub item: String,
    pub constraints: Vec<String>,
}

// ---------------------------------------------------------------------------
// /api/tryon
// ---------------------------------------------------------------------------

/// A garment to composite onto the body photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TryOnItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// e.g. `"upper_body"`, `"lower_body"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_region: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TryOnRequest<'a> {
    pub body_image_url: &'a str,
    pub clothing_items: &'a [TryOnItem],
}

#[derive(Debug, Deserialize)]
pub(crate) struct TryOnResponse {
    pub url: String,
}
