//! Per-card UI state for a suggested product.
//!
//! The card never mutates the cart itself; buttons produce a [`CardIntent`]
//! that the owning page applies.

use cartwise_core::Product;

/// What a card button asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    SetQuantity { product_id: String, quantity: u32 },
    Swap { product_id: String, alt_id: String },
    TryOn { product_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCardState {
    product_id: String,
    alternatives_open: bool,
    tooltip_visible: bool,
}

impl ProductCardState {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn alternatives_open(&self) -> bool {
        self.alternatives_open
    }

    pub fn toggle_alternatives(&mut self) {
        self.alternatives_open = !self.alternatives_open;
    }

    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// The "why suggested" tooltip follows the pointer.
    pub fn hover_match(&mut self, hovering: bool) {
        self.tooltip_visible = hovering;
    }

    #[must_use]
    pub fn remove(&self) -> CardIntent {
        self.set_quantity(0)
    }

    #[must_use]
    pub fn decrement(&self, current: u32) -> CardIntent {
        self.set_quantity(current.saturating_sub(1))
    }

    #[must_use]
    pub fn increment(&self, current: u32) -> CardIntent {
        self.set_quantity(current.saturating_add(1))
    }

    /// Picking an alternative closes the panel.
    pub fn swap(&mut self, alt_id: impl Into<String>) -> CardIntent {
        self.alternatives_open = false;
        CardIntent::Swap {
            product_id: self.product_id.clone(),
            alt_id: alt_id.into(),
        }
    }

    #[must_use]
    pub fn try_on(&self) -> CardIntent {
        CardIntent::TryOn {
            product_id: self.product_id.clone(),
        }
    }

    fn set_quantity(&self, quantity: u32) -> CardIntent {
        CardIntent::SetQuantity {
            product_id: self.product_id.clone(),
            quantity,
        }
    }
}

/// Badge text, e.g. `"97% match"`.
#[must_use]
pub fn match_label(product: &Product) -> String {
    format!("{}% match", product.match_score)
}

/// Link text for the retailer page, when the product has one.
#[must_use]
pub fn retailer_link(product: &Product) -> Option<(String, &str)> {
    product
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(|url| (format!("View on {}", product.retailer), url))
}
