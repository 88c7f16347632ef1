pub mod cart;
pub mod checkout;
pub mod landing;
pub mod pinterest_callback;

pub use cart::{CartPage, CartPhase, CheckoutStep};
pub use checkout::{CheckoutPage, CheckoutPhase, PaymentForm};
pub use landing::LandingPage;
pub use pinterest_callback::{CallbackQuery, PinterestCallbackPage};

pub const PRODUCTS_LOAD_ERROR: &str = "Failed to load products. Is the backend running?";
