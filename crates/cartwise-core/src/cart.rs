//! Cart quantity bookkeeping and totals.
//!
//! Quantities are a local overlay on the fetched product list. A quantity of
//! zero takes a product out of the totals but never out of the list itself.

use std::collections::BTreeMap;

use crate::products::Product;

/// Product id -> quantity. Ids not present read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartQuantities {
    quantities: BTreeMap<String, u32>,
}

impl CartQuantities {
    /// Starts every product at quantity 1.
    #[must_use]
    pub fn seeded(products: &[Product]) -> Self {
        Self {
            quantities: products.iter().map(|p| (p.id.clone(), 1)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: &str, quantity: u32) {
        self.quantities.insert(id.to_string(), quantity);
    }

    pub fn increment(&mut self, id: &str) -> u32 {
        let next = self.get(id).saturating_add(1);
        self.set(id, next);
        next
    }

    pub fn decrement(&mut self, id: &str) -> u32 {
        let next = self.get(id).saturating_sub(1);
        self.set(id, next);
        next
    }

    /// Sets the quantity to zero. The product stays in the rendered list.
    pub fn remove(&mut self, id: &str) {
        self.set(id, 0);
    }

    /// Seeds ids that have no entry yet, leaving user overrides intact.
    pub fn extend_seeded(&mut self, products: &[Product]) {
        for product in products {
            self.quantities.entry(product.id.clone()).or_insert(1);
        }
    }
}

/// Totals derived from the product list and the current quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary<'a> {
    /// Products with quantity > 0, in list order.
    pub active: Vec<(&'a Product, u32)>,
    pub subtotal: f64,
    pub savings: f64,
    pub item_count: u32,
}

impl<'a> CartSummary<'a> {
    #[must_use]
    pub fn compute(products: &'a [Product], quantities: &CartQuantities) -> Self {
        let active: Vec<(&Product, u32)> = products
            .iter()
            .map(|p| (p, quantities.get(&p.id)))
            .filter(|(_, qty)| *qty > 0)
            .collect();

        let subtotal = active
            .iter()
            .map(|(p, qty)| p.price * f64::from(*qty))
            .sum();
        let savings = active
            .iter()
            .map(|(p, qty)| p.unit_savings() * f64::from(*qty))
            .sum();
        let item_count = active.iter().map(|(_, qty)| qty).sum();

        Self {
            active,
            subtotal,
            savings,
            item_count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Line total for one active product, if it is active.
    #[must_use]
    pub fn line_total(&self, id: &str) -> Option<f64> {
        self.active
            .iter()
            .find(|(p, _)| p.id == id)
            .map(|(p, qty)| p.price * f64::from(*qty))
    }
}
