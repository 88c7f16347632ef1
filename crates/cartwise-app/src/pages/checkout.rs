//! Payment form and hand-off to the retailer automation agent.

use cartwise_client::{AutomateCheckoutRequest, BuyerContact, CheckoutLine};
use cartwise_core::{format_card_number, format_expiry, CardFace, Product};

use crate::components::{CardPreview, FocusedField};
use crate::context::AppContext;
use crate::pages::PRODUCTS_LOAD_ERROR;

pub const AUTOMATION_STARTING: &str = "Initializing Personal Shopper agent...";

const DEMO_EMAIL: &str = "user@example.com";
const DEMO_ADDRESS: &str = "123 Fashion St";
const DEMO_CITY: &str = "Paris";
const DEMO_ZIP: &str = "75001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    Form,
    Automating,
    Confirmed,
}

/// Payment and shipping fields. Card inputs are stored already formatted.
/// Nothing here is validated against a payment processor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    card_number: String,
    card_name: String,
    expiry: String,
    cvc: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl PaymentForm {
    pub fn set_card_number(&mut self, raw: &str) {
        self.card_number = format_card_number(raw);
    }

    pub fn set_card_name(&mut self, raw: &str) {
        self.card_name = raw.to_string();
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = format_expiry(raw);
    }

    /// Keeps at most four digits.
    pub fn set_cvc(&mut self, raw: &str) {
        self.cvc = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    }

    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    #[must_use]
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    #[must_use]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    #[must_use]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }
}

#[derive(Debug)]
pub struct CheckoutPage {
    ctx: AppContext,
    products: Vec<Product>,
    loading: bool,
    load_error: Option<String>,
    form: PaymentForm,
    preview: CardPreview,
    phase: CheckoutPhase,
    automation_message: String,
}

impl CheckoutPage {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            loading: false,
            load_error: None,
            form: PaymentForm::default(),
            preview: CardPreview::default(),
            phase: CheckoutPhase::Form,
            automation_message: String::new(),
        }
    }

    /// Re-fetches the product list; the cart page's quantities do not carry
    /// over.
    pub async fn mount(&mut self) {
        self.loading = true;
        match self.ctx.client.list_products().await {
            Ok(products) => {
                self.products = products;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load checkout products");
                self.load_error = Some(PRODUCTS_LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

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

    /// One of each listed product.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    #[must_use]
    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PaymentForm {
        &mut self.form
    }

    pub fn focus(&mut self, field: FocusedField) {
        self.preview.focus(field);
    }

    pub fn blur(&mut self) {
        self.preview.blur();
    }

    #[must_use]
    pub fn card_face(&self) -> CardFace {
        self.preview.face(
            &self.form.card_number,
            &self.form.card_name,
            &self.form.expiry,
            &self.form.cvc,
        )
    }

    #[must_use]
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Latest status line from the automation agent.
    #[must_use]
    pub fn automation_message(&self) -> &str {
        &self.automation_message
    }

    /// Hands the order to the automation agent, then shows the confirmation
    /// after the configured delay.
    ///
    /// The page reaches [`CheckoutPhase::Confirmed`] even when the
    /// automation request fails; the failure is only logged. Calls after
    /// the first are ignored.
    pub async fn submit(&mut self) -> CheckoutPhase {
        if self.phase != CheckoutPhase::Form {
            return self.phase;
        }
        self.phase = CheckoutPhase::Automating;
        self.automation_message = AUTOMATION_STARTING.to_string();

        let request = self.automation_request();
        match self.ctx.client.automate_checkout(&request).await {
            Ok(response) => {
                tracing::info!(status = %response.status, items = request.items.len(), "checkout automation started");
                self.automation_message = response.message;
            }
            Err(e) => {
                tracing::warn!(error = %e, "checkout automation failed; showing confirmation anyway");
            }
        }

        tokio::time::sleep(self.ctx.config.checkout_delay()).await;
        self.phase = CheckoutPhase::Confirmed;
        self.phase
    }

    fn automation_request(&self) -> AutomateCheckoutRequest {
        let or_demo = |value: &str, demo: &str| {
            let value = value.trim();
            if value.is_empty() {
                demo.to_string()
            } else {
                value.to_string()
            }
        };
        let email_fallback = self.ctx.config.buyer_email.as_deref().unwrap_or(DEMO_EMAIL);

        AutomateCheckoutRequest {
            items: self.products.iter().map(CheckoutLine::from).collect(),
            user_data: BuyerContact {
                name: self.form.card_name.clone(),
                email: or_demo(&self.form.email, email_fallback),
                address: Some(or_demo(&self.form.address, DEMO_ADDRESS)),
                city: Some(or_demo(&self.form.city, DEMO_CITY)),
                zip: Some(or_demo(&self.form.zip, DEMO_ZIP)),
            },
        }
    }
}
