mod assistant;
mod budget;
mod cart;
mod checkout;
mod pinterest;
mod products;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::budget::BudgetCommands;
use crate::pinterest::PinterestCommands;
use crate::products::ProductsCommands;

#[derive(Debug, Parser)]
#[command(name = "cartwise")]
#[command(about = "Terminal front end for the agentic shopping assistant")]
struct Cli {
    /// Backend base URL (overrides `CARTWISE_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and search the product catalog
    Products {
        #[command(subcommand)]
        command: ProductsCommands,
    },
    /// Show the smart cart and optionally proceed to checkout
    Cart {
        /// Override a quantity, e.g. `--qty 2=3`; repeatable
        #[arg(long = "qty", value_parser = cart::parse_quantity)]
        quantities: Vec<(String, u32)>,
        /// Run the budget check and continue to checkout
        #[arg(long)]
        checkout: bool,
        /// Accept a wallet confirmation without prompting
        #[arg(long)]
        yes: bool,
    },
    /// Ask the agent to assemble a cart from the last extracted requirements
    Suggest {
        #[command(flatten)]
        overrides: assistant::SuggestArgs,
    },
    /// Wallet balance and budget limit
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Pay and hand the order to the retailer automation agent
    Checkout {
        #[command(flatten)]
        payment: checkout::PaymentArgs,
    },
    /// Pinterest account connection
    Pinterest {
        #[command(subcommand)]
        command: PinterestCommands,
    },
    /// Extract structured requirements from a shopping request
    Extract {
        query: String,
        /// Preference tag, e.g. "Fast Delivery"; repeatable
        #[arg(long = "pref")]
        preferences: Vec<String>,
    },
    /// Generate a virtual try-on image
    Tryon {
        /// Body photo as a `data:image/...` URL
        #[arg(long)]
        photo: String,
        /// Garment image URL; repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        /// Garment category applied to every item, e.g. "tops"
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the agent activity log
    Logs,
    /// Send a shopping request the way the search sidebar does
    Shop {
        query: String,
        /// Preference tag, e.g. "Budget"; repeatable
        #[arg(long = "pref")]
        preferences: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = cartwise_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }
    tracing::debug!(?config, "configuration loaded");
    let ctx = cartwise_app::AppContext::new(config)?;

    match cli.command {
        Some(Commands::Products { command }) => products::run(&ctx, command).await?,
        Some(Commands::Cart {
            quantities,
            checkout,
            yes,
        }) => cart::run_cart(&ctx, &quantities, checkout, yes).await?,
        Some(Commands::Suggest { overrides }) => assistant::run_suggest(&ctx, overrides).await?,
        Some(Commands::Budget { command }) => budget::run(&ctx, command).await?,
        Some(Commands::Checkout { payment }) => checkout::run_checkout(&ctx, payment).await?,
        Some(Commands::Pinterest { command }) => pinterest::run(&ctx, command).await?,
        Some(Commands::Extract { query, preferences }) => {
            assistant::run_extract(&ctx, &query, &preferences).await?;
        }
        Some(Commands::Tryon {
            photo,
            items,
            category,
        }) => assistant::run_tryon(&ctx, &photo, &items, category.as_deref()).await?,
        Some(Commands::Logs) => assistant::run_logs(&ctx).await,
        Some(Commands::Shop { query, preferences }) => {
            assistant::run_shop(&ctx, &query, &preferences).await;
        }
        None => println!("no command given; run `cartwise --help` for usage"),
    }

    Ok(())
}

/// Format a money amount for display, e.g. `349.00 USD`.
fn fmt_money(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

/// Truncate `text` to `max` characters, appending `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests;
