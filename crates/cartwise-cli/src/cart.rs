//! The smart cart and its budget-gated path to checkout.

use std::io::{BufRead, Write};

use cartwise_app::pages::{CartPage, CheckoutStep};
use cartwise_app::{AppContext, Notice, NoticeLevel};
use cartwise_core::ConfirmationDialog;

use crate::{fmt_money, truncate};

/// Parses `ID=QTY` for `--qty`.
pub(crate) fn parse_quantity(raw: &str) -> Result<(String, u32), String> {
    let (id, qty) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    let qty = qty
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{raw}': {e}"))?;
    Ok((id.to_string(), qty))
}

pub(crate) async fn run_cart(
    ctx: &AppContext,
    quantities: &[(String, u32)],
    checkout: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let mut page = CartPage::new(ctx.clone());
    page.mount().await;
    if let Some(err) = page.load_error() {
        anyhow::bail!("{err}");
    }

    for (id, qty) in quantities {
        if !page.products().iter().any(|p| &p.id == id) {
            eprintln!("warning: no product with id '{id}' in the cart");
        }
        page.set_quantity(id, *qty);
    }

    print_summary(&page, &ctx.config.currency);

    if !checkout {
        return Ok(());
    }

    let next = match page.proceed_to_checkout().await {
        CheckoutStep::Navigate(route) => Some(route),
        CheckoutStep::Confirm(dialog) => {
            print_dialog(&dialog);
            if yes || prompt_yes_no("Confirm purchase? [y/N] ")? {
                page.confirm().await
            } else {
                page.cancel();
                None
            }
        }
    };
    print_notices(&page.drain_notices());

    match next {
        Some(route) => println!("continue at {route}: run `cartwise checkout --help`"),
        None => println!("checkout cancelled"),
    }
    Ok(())
}

fn print_summary(page: &CartPage, currency: &str) {
    let summary = page.summary();
    println!(
        "{:<6}{:<32}{:<6}{:<16}",
        "ID", "NAME", "QTY", "LINE TOTAL"
    );
    for p in page.products() {
        let qty = page.quantity(&p.id);
        let line = summary
            .line_total(&p.id)
            .map_or_else(|| "-".to_string(), |t| fmt_money(t, currency));
        println!("{:<6}{:<32}{:<6}{line}", p.id, truncate(&p.name, 28), qty);
    }
    println!();
    println!("Items:    {}", summary.item_count);
    println!("Subtotal: {}", fmt_money(summary.subtotal, currency));
    if summary.savings > 0.0 {
        println!("Savings:  {}", fmt_money(summary.savings, currency));
    }
    if let Some(wallet) = page.wallet() {
        println!(
            "Wallet:   {}",
            fmt_money(wallet.wallet_balance, &wallet.currency)
        );
    }
}

fn print_dialog(dialog: &ConfirmationDialog) {
    println!();
    println!("{}", dialog.title);
    println!("{}", dialog.message);
    let money = |value: Option<f64>| {
        value.map_or_else(|| "unknown".to_string(), |v| fmt_money(v, &dialog.currency))
    };
    println!("  before: {}", money(dialog.before));
    println!("  price:  {}", fmt_money(dialog.price, &dialog.currency));
    println!("  after:  {}", money(dialog.after));
}

pub(crate) fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        };
        println!("[{tag}] {}: {}", notice.title, notice.description);
    }
}

fn prompt_yes_no(question: &str) -> anyhow::Result<bool> {
    print!("{question}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
