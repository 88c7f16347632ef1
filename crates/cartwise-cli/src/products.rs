//! Catalog commands.

use cartwise_app::components::product_card::{match_label, retailer_link};
use cartwise_app::AppContext;
use cartwise_client::SearchRequest;
use clap::Subcommand;

use crate::{fmt_money, truncate};

/// Sub-commands available under `products`.
#[derive(Debug, Subcommand)]
pub enum ProductsCommands {
    /// List every suggested product
    List,
    /// Show one product with its alternatives
    Show { id: String },
    /// Rank products for a free-text request
    Search {
        query: String,
        /// Preference tag, e.g. "Budget"; repeatable
        #[arg(long = "pref")]
        preferences: Vec<String>,
        /// Maximum price per item
        #[arg(long)]
        budget: Option<f64>,
        /// Latest acceptable delivery, in days
        #[arg(long = "max-days")]
        max_delivery_days: Option<f64>,
    },
}

pub(crate) async fn run(ctx: &AppContext, command: ProductsCommands) -> anyhow::Result<()> {
    match command {
        ProductsCommands::List => run_list(ctx).await,
        ProductsCommands::Show { id } => run_show(ctx, &id).await,
        ProductsCommands::Search {
            query,
            preferences,
            budget,
            max_delivery_days,
        } => {
            let request = SearchRequest {
                query,
                preferences,
                budget,
                max_delivery_days,
            };
            run_search(ctx, &request).await
        }
    }
}

async fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    let products = ctx.client.list_products().await?;
    if products.is_empty() {
        println!("no products suggested yet; try `cartwise shop <request>` first");
        return Ok(());
    }

    let currency = &ctx.config.currency;
    println!(
        "{:<6}{:<32}{:<16}{:<14}MATCH",
        "ID", "NAME", "PRICE", "RETAILER"
    );
    for p in &products {
        println!(
            "{:<6}{:<32}{:<16}{:<14}{}",
            p.id,
            truncate(&p.name, 28),
            fmt_money(p.price, currency),
            truncate(&p.retailer, 12),
            match_label(p)
        );
    }
    Ok(())
}

async fn run_show(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let p = ctx.client.get_product(id).await?;
    let currency = &ctx.config.currency;

    println!("{} ({})", p.name, p.brand);
    println!("Price:    {}", fmt_money(p.price, currency));
    if p.unit_savings() > 0.0 {
        println!("Savings:  {}", fmt_money(p.unit_savings(), currency));
    }
    println!("Retailer: {}", p.retailer);
    println!("Delivery: {}", p.delivery);
    println!("Rating:   {:.1}", p.rating);
    println!("Match:    {}", match_label(&p));
    println!("Image:    {}", p.image_source());
    if let Some((label, url)) = retailer_link(&p) {
        println!("{label}: {url}");
    }
    if !p.why_suggested.is_empty() {
        println!();
        println!("{}", p.why_suggested);
    }
    if !p.alternatives.is_empty() {
        println!();
        println!("Alternatives:");
        for alt in &p.alternatives {
            println!(
                "  {:<6}{:<32}{}",
                alt.id,
                truncate(&alt.name, 28),
                fmt_money(alt.price, currency)
            );
        }
    }
    Ok(())
}

async fn run_search(ctx: &AppContext, request: &SearchRequest) -> anyhow::Result<()> {
    let response = ctx.client.search_products(request).await?;
    let picks = response.top_picks();
    if picks.is_empty() {
        println!("no matches for \"{}\"", request.query);
        return Ok(());
    }

    let w = &response.weights;
    println!(
        "weights: price {:.2}, delivery {:.2}, style {:.2}",
        w.price, w.delivery, w.style
    );
    println!();
    for (category, ranked) in picks {
        println!(
            "[{category}] {} - {} (score {:.2})",
            ranked.product.name,
            fmt_money(ranked.product.price, &ctx.config.currency),
            ranked.score
        );
        println!("    {}", ranked.explanation());
    }
    Ok(())
}
