//! Agent-facing commands: requirement extraction, search hand-off, cart
//! assembly, try-on and the activity log.

use cartwise_app::components::{AgentLogView, SearchSidebar, TryOnDialog};
use cartwise_app::AppContext;
use cartwise_client::{CartQuery, ExtractedRequirements, TryOnItem};
use clap::Args;

use crate::{fmt_money, truncate};

/// Overrides for `suggest`. Anything left unset falls back to the
/// requirements the backend extracted last.
#[derive(Debug, Args)]
pub struct SuggestArgs {
    #[arg(long)]
    pub budget: Option<String>,
    /// e.g. "3 days"
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub style: Option<String>,
    /// Who the items are for, e.g. "women"
    #[arg(long)]
    pub target: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    /// Item to include; repeatable
    #[arg(long = "item")]
    pub items: Vec<String>,
}

impl From<SuggestArgs> for CartQuery {
    fn from(args: SuggestArgs) -> Self {
        Self {
            budget: args.budget,
            deadline: args.deadline,
            size: args.size,
            style: args.style,
            target: args.target,
            color: args.color,
            items: args.items,
        }
    }
}

pub(crate) async fn run_extract(
    ctx: &AppContext,
    query: &str,
    preferences: &[String],
) -> anyhow::Result<()> {
    let requirements = ctx.client.extract_requirements(query, preferences).await?;
    print_requirements(&requirements);
    Ok(())
}

/// Mirrors the sidebar: extraction failures are not fatal.
pub(crate) async fn run_shop(ctx: &AppContext, query: &str, preferences: &[String]) {
    let mut sidebar = SearchSidebar::new(ctx.clone());
    sidebar.mount().await;
    sidebar.set_query(query);
    for pref in preferences {
        sidebar.toggle_preference(pref);
    }

    let route = sidebar.start_shopping().await;
    match sidebar.finish_extraction().await {
        Some(requirements) => print_requirements(requirements),
        None => println!("the agent could not extract requirements; showing the default cart"),
    }
    println!("continue at {route}: run `cartwise cart`");
}

pub(crate) async fn run_suggest(ctx: &AppContext, overrides: SuggestArgs) -> anyhow::Result<()> {
    let cart = ctx.client.get_cart(&overrides.into()).await?;
    if cart.items.is_empty() {
        println!("the agent found nothing matching these requirements");
        return Ok(());
    }

    println!(
        "{:<10}{:<36}{:<16}{:<14}DELIVERY",
        "ID", "TITLE", "PRICE", "RETAILER"
    );
    for item in &cart.items {
        println!(
            "{:<10}{:<36}{:<16}{:<14}{}",
            truncate(&item.id, 8),
            truncate(&item.title, 32),
            fmt_money(
                item.price,
                item.currency.as_deref().unwrap_or(&ctx.config.currency)
            ),
            truncate(&item.retailer, 12),
            item.delivery_estimate.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("Total: {}", fmt_money(cart.total_price, &ctx.config.currency));
    Ok(())
}

pub(crate) async fn run_tryon(
    ctx: &AppContext,
    photo: &str,
    items: &[String],
    category: Option<&str>,
) -> anyhow::Result<()> {
    let mut dialog = TryOnDialog::default();
    for url in items {
        dialog.add_garment(TryOnItem {
            image_url: Some(url.clone()),
            category: category.map(str::to_string),
            ..TryOnItem::default()
        });
    }
    if !dialog.set_body_photo(photo) {
        anyhow::bail!("{}", dialog.error().unwrap_or("invalid photo"));
    }

    let generated = dialog.generate(&ctx.client).await.map(str::to_string);
    match generated {
        Some(url) => println!("{url}"),
        None => anyhow::bail!("{}", dialog.error().unwrap_or("try-on failed")),
    }
    Ok(())
}

pub(crate) async fn run_logs(ctx: &AppContext) {
    let view = AgentLogView::load(&ctx.client).await;
    if view.entries().is_empty() {
        println!("no agent activity yet");
        return;
    }
    for entry in view.entries() {
        println!("{:>2}. {:<28}{:>6}  {}", entry.step, entry.action, entry.time, entry.detail);
    }
}

fn print_requirements(r: &ExtractedRequirements) {
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    let list = |v: &[String]| if v.is_empty() { "-".to_string() } else { v.join(", ") };

    println!("Item:        {}", or_dash(&r.item));
    println!("Budget:      {}", or_dash(&r.budget));
    println!("Deadline:    {}", or_dash(&r.deadline));
    println!("Style:       {}", list(&r.style));
    println!("Colors:      {}", list(&r.colors));
    println!("Constraints: {}", list(&r.constraints));
}
