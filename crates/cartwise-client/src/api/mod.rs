//! Per-resource operations on [`crate::ApiClient`].
//!
//! Each module adds one `impl ApiClient` block mapping backend endpoints to
//! typed requests and responses. No logic lives here beyond building paths,
//! query strings and bodies.

mod agent;
mod budget;
mod cart;
mod checkout;
mod llm;
mod pinterest;
mod products;
mod tryon;
