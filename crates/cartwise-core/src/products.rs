use serde::{Deserialize, Serialize};

/// Bundled product images keyed by the short asset names the backend
/// returns for its demo catalog.
const ASSET_IMAGES: &[(&str, &str)] = &[
    ("headphones", "assets/product-headphones.jpg"),
    ("sneakers", "assets/product-sneakers.jpg"),
    ("watch", "assets/product-watch.jpg"),
    ("bag", "assets/product-bag.jpg"),
];

/// A product suggested by the shopping agent.
///
/// Fetched read-only from the backend on every page load; the only
/// client-side state attached to it is the cart quantity, which lives in
/// [`crate::CartQuantities`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    /// Pre-discount price, when the retailer lists one.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Either a bundled asset key (e.g. `"headphones"`) or an absolute URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub retailer: String,
    /// Free-text delivery estimate, e.g. `"Free · Tomorrow"`.
    #[serde(default)]
    pub delivery: String,
    /// Agent match score, 0–100.
    #[serde(default)]
    pub match_score: u8,
    /// Human-readable rationale for the suggestion.
    #[serde(default)]
    pub why_suggested: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    /// Product page on the retailer's site.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl Product {
    /// Resolves [`Product::image`] to something a renderer can load.
    #[must_use]
    pub fn image_source(&self) -> String {
        ImageRef::parse(&self.image).resolve()
    }

    /// Per-unit discount against `original_price`; never negative.
    #[must_use]
    pub fn unit_savings(&self) -> f64 {
        self.original_price
            .map_or(0.0, |original| (original - self.price).max(0.0))
    }

    #[must_use]
    pub fn alternative(&self, alt_id: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id == alt_id)
    }
}

/// Another offer for the same need, shown in the product card's
/// alternatives panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand: String,
}

/// Where a product image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote(String),
    Asset(String),
}

impl ImageRef {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Remote(raw.to_string())
        } else {
            Self::Asset(raw.to_string())
        }
    }

    /// Remote URLs are returned unchanged; known asset keys map to their
    /// bundled path and unknown keys pass through.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Asset(key) => ASSET_IMAGES
                .iter()
                .find(|(k, _)| k == key)
                .map_or_else(|| key.clone(), |(_, path)| (*path).to_string()),
        }
    }
}
