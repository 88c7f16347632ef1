use cartwise_app::pages::{CheckoutPage, CheckoutPhase};
use cartwise_app::AppContext;
use clap::Args;

use crate::fmt_money;

/// Payment and shipping details. Blank shipping fields fall back to the
/// demo address.
#[derive(Debug, Args)]
pub struct PaymentArgs {
    /// Cardholder name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub card_number: String,
    /// Expiry as MMYY or MM/YY
    #[arg(long)]
    pub expiry: String,
    #[arg(long)]
    pub cvc: String,
    /// Contact email; defaults to `CARTWISE_BUYER_EMAIL`
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
}

pub(crate) async fn run_checkout(ctx: &AppContext, payment: PaymentArgs) -> anyhow::Result<()> {
    let mut page = CheckoutPage::new(ctx.clone());
    page.mount().await;
    if let Some(err) = page.load_error() {
        anyhow::bail!("{err}");
    }

    let form = page.form_mut();
    form.set_card_name(&payment.name);
    form.set_card_number(&payment.card_number);
    form.set_expiry(&payment.expiry);
    form.set_cvc(&payment.cvc);
    form.email = payment.email.unwrap_or_default();
    form.address = payment.address.unwrap_or_default();
    form.city = payment.city.unwrap_or_default();
    form.zip = payment.zip.unwrap_or_default();

    let card = page.card_face();
    println!("{} {} ({})", card.brand_label, card.number, card.holder);
    println!(
        "Paying {} for {} item(s)",
        fmt_money(page.subtotal(), &ctx.config.currency),
        page.products().len()
    );

    let phase = page.submit().await;
    println!("{}", page.automation_message());
    if phase == CheckoutPhase::Confirmed {
        println!("Order Confirmed!");
    }
    Ok(())
}
