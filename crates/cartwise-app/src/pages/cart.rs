//! The smart cart: product grid, order summary and the budget-gated path
//! to checkout.
//!
//! ```text
//! Idle --proceed--> Proposing --approved / propose failed--> CheckingOut
//!                       |
//!                       +--needs confirmation--> Confirming --confirm--> CheckingOut
//!                                                    |
//!                                                    +--cancel--> Idle
//! ```

use std::collections::BTreeMap;

use cartwise_core::{
    BudgetStatus, CartQuantities, CartSummary, ConfirmationDialog, Product, PurchaseDecision,
};

use crate::components::{CardIntent, ProductCardState, TryOnDialog};
use crate::context::AppContext;
use crate::nav::Route;
use crate::notice::Notice;
use crate::pages::PRODUCTS_LOAD_ERROR;

#[derive(Debug, Clone, PartialEq)]
pub enum CartPhase {
    Idle,
    Proposing,
    Confirming(ConfirmationDialog),
    CheckingOut,
}

/// What the page asks the caller to do after "Proceed to checkout".
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStep {
    Navigate(Route),
    /// Show the dialog; answer with [`CartPage::confirm`] or [`CartPage::cancel`].
    Confirm(ConfirmationDialog),
}

#[derive(Debug)]
pub struct CartPage {
    ctx: AppContext,
    products: Vec<Product>,
    quantities: CartQuantities,
    cards: BTreeMap<String, ProductCardState>,
    loading: bool,
    load_error: Option<String>,
    phase: CartPhase,
    optimizing: bool,
    tryon: Option<TryOnDialog>,
    notices: Vec<Notice>,
}

impl CartPage {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            quantities: CartQuantities::default(),
            cards: BTreeMap::new(),
            loading: false,
            load_error: None,
            phase: CartPhase::Idle,
            optimizing: false,
            tryon: None,
            notices: Vec::new(),
        }
    }

    /// Loads the product list and the wallet status concurrently.
    ///
    /// A failed product load records [`PRODUCTS_LOAD_ERROR`]; a failed
    /// budget load leaves the balance unknown.
    pub async fn mount(&mut self) {
        self.loading = true;
        let client = &self.ctx.client;
        let (products, budget) = tokio::join!(
            client.list_products(),
            self.ctx.budget.refresh(client, &self.ctx.config.user_id),
        );
        self.loading = false;

        match products {
            Ok(products) => {
                tracing::debug!(count = products.len(), "cart products loaded");
                self.quantities.extend_seeded(&products);
                for product in &products {
                    self.cards
                        .entry(product.id.clone())
                        .or_insert_with(|| ProductCardState::new(product.id.clone()));
                }
                self.products = products;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load cart products");
                self.load_error = Some(PRODUCTS_LOAD_ERROR.to_string());
            }
        }

        if let Err(e) = budget {
            tracing::debug!(error = %e, "budget status unavailable");
        }
    }

    // -----------------------------------------------------------------------
    // Grid and summary
    // -----------------------------------------------------------------------

    /// Every fetched product, including those at quantity zero.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.quantities.get(id)
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        self.quantities.set(id, quantity);
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary<'_> {
        CartSummary::compute(&self.products, &self.quantities)
    }

    #[must_use]
    pub fn card(&self, id: &str) -> Option<&ProductCardState> {
        self.cards.get(id)
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut ProductCardState> {
        self.cards.get_mut(id)
    }

    /// Applies a button press from a product card.
    pub fn apply(&mut self, intent: CardIntent) {
        match intent {
            CardIntent::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(&product_id, quantity),
            CardIntent::Swap { product_id, alt_id } => self.swap(&product_id, &alt_id),
            CardIntent::TryOn { product_id } => self.open_tryon(&product_id),
        }
    }

    /// Last known wallet status, shared with every other page.
    #[must_use]
    pub fn wallet(&self) -> Option<BudgetStatus> {
        self.ctx.budget.current()
    }

    // -----------------------------------------------------------------------
    // Checkout gate
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> &CartPhase {
        &self.phase
    }

    /// Asks the budget service whether the cart can be bought.
    ///
    /// An approval navigates straight to checkout. A budget warning or a
    /// required wallet confirmation opens the confirmation dialog. A failed
    /// proposal is reported and checkout proceeds anyway.
    pub async fn proceed_to_checkout(&mut self) -> CheckoutStep {
        let (subtotal, item_count) = {
            let summary = self.summary();
            (summary.subtotal, summary.item_count)
        };
        let item_name = format!("Cart ({item_count} items)");
        self.phase = CartPhase::Proposing;

        let proposal = self
            .ctx
            .client
            .propose_purchase(subtotal, &item_name, &self.ctx.config.user_id)
            .await;

        match proposal {
            Ok(response) => {
                let decision = response.decision();
                if !decision.requires_confirmation() {
                    self.phase = CartPhase::CheckingOut;
                    return CheckoutStep::Navigate(Route::Checkout);
                }
                tracing::debug!(?decision, "purchase needs confirmation");
                let known = self.known_wallet(&decision).await;
                match ConfirmationDialog::for_decision(&decision, known.as_ref(), subtotal) {
                    Some(dialog) => {
                        self.phase = CartPhase::Confirming(dialog.clone());
                        CheckoutStep::Confirm(dialog)
                    }
                    None => {
                        self.phase = CartPhase::CheckingOut;
                        CheckoutStep::Navigate(Route::Checkout)
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, subtotal, "budget proposal failed; continuing to checkout");
                self.notices.push(Notice::error(
                    "Budget check unavailable",
                    "Continuing to checkout without a wallet check.",
                ));
                self.phase = CartPhase::CheckingOut;
                CheckoutStep::Navigate(Route::Checkout)
            }
        }
    }

    /// Wallet status for the dialog. Re-fetched when neither the quote nor
    /// the store knows the balance.
    async fn known_wallet(&self, decision: &PurchaseDecision) -> Option<BudgetStatus> {
        if let Some(status) = self.ctx.budget.current() {
            return Some(status);
        }
        let quoted = matches!(
            decision,
            PurchaseDecision::ExceedsBudget(q) | PurchaseDecision::NeedsConfirmation(q)
                if q.balance.is_some()
        );
        if quoted {
            return None;
        }
        match self
            .ctx
            .budget
            .refresh(&self.ctx.client, &self.ctx.config.user_id)
            .await
        {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::debug!(error = %e, "wallet balance still unknown");
                None
            }
        }
    }

    /// Accepts the open dialog: debits the wallet and moves on to checkout.
    ///
    /// Returns `None` when no dialog is open. A failed debit is reported but
    /// does not block checkout.
    pub async fn confirm(&mut self) -> Option<Route> {
        let CartPhase::Confirming(dialog) = &self.phase else {
            return None;
        };
        let amount = dialog.price;

        match self
            .ctx
            .client
            .confirm_purchase(amount, &self.ctx.config.user_id)
            .await
        {
            Ok(status) => {
                tracing::info!(
                    amount,
                    balance = status.wallet_balance,
                    "wallet purchase confirmed"
                );
                self.notices.push(Notice::success(
                    "Wallet updated",
                    format!(
                        "New balance: {:.2} {}",
                        status.wallet_balance, status.currency
                    ),
                ));
                self.ctx.budget.publish(status);
            }
            Err(e) => {
                tracing::warn!(error = %e, amount, "wallet confirmation failed");
                self.notices.push(Notice::error(
                    "Wallet not updated",
                    "The purchase could not be recorded against your wallet.",
                ));
            }
        }

        self.phase = CartPhase::CheckingOut;
        Some(Route::Checkout)
    }

    /// Dismisses the dialog without touching the wallet.
    pub fn cancel(&mut self) {
        if matches!(self.phase, CartPhase::Confirming(_)) {
            self.phase = CartPhase::Idle;
            self.notices.push(Notice::info(
                "Checkout cancelled",
                "Your wallet was not charged.",
            ));
        }
    }

    // -----------------------------------------------------------------------
    // Simulated actions
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn is_optimizing(&self) -> bool {
        self.optimizing
    }

    /// Simulated retailer re-optimization. No backend call is made.
    pub async fn optimize(&mut self) {
        if self.optimizing {
            return;
        }
        self.optimizing = true;
        tokio::time::sleep(self.ctx.config.optimize_delay()).await;
        self.optimizing = false;
        self.notices.push(Notice::success(
            "Cart optimized!",
            "Saved an additional $28 by switching retailers.",
        ));
    }

    /// Simulated swap to an alternative offer. The cart is left unchanged.
    pub fn swap(&mut self, product_id: &str, alt_id: &str) {
        tracing::debug!(product_id, alt_id, "alternative selected");
        self.notices.push(Notice::success(
            "Product swapped!",
            "Alternative selected for comparison.",
        ));
    }

    // -----------------------------------------------------------------------
    // Try-on
    // -----------------------------------------------------------------------

    pub fn open_tryon(&mut self, product_id: &str) {
        if let Some(product) = self.products.iter().find(|p| p.id == product_id) {
            self.tryon = Some(TryOnDialog::open_for(product));
        }
    }

    #[must_use]
    pub fn tryon(&self) -> Option<&TryOnDialog> {
        self.tryon.as_ref()
    }

    pub fn tryon_mut(&mut self) -> Option<&mut TryOnDialog> {
        self.tryon.as_mut()
    }

    pub fn close_tryon(&mut self) {
        self.tryon = None;
    }

    /// Runs generation for the open try-on dialog.
    pub async fn generate_tryon(&mut self) -> Option<String> {
        let dialog = self.tryon.as_mut()?;
        dialog.generate(&self.ctx.client).await.map(str::to_string)
    }

    // -----------------------------------------------------------------------
    // Notices
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
