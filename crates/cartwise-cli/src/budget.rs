use cartwise_app::AppContext;
use cartwise_core::BudgetStatus;
use clap::Subcommand;

use crate::fmt_money;

/// Sub-commands available under `budget`.
#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Show the wallet balance and budget limit
    Status,
    /// Set a new budget limit; the wallet balance resets to it
    Set {
        limit: f64,
        /// Currency code; defaults to `CARTWISE_CURRENCY`
        #[arg(long)]
        currency: Option<String>,
    },
}

pub(crate) async fn run(ctx: &AppContext, command: BudgetCommands) -> anyhow::Result<()> {
    match command {
        BudgetCommands::Status => {
            let status = ctx.budget.refresh(&ctx.client, ctx.user_id()).await?;
            print_status(&status);
        }
        BudgetCommands::Set { limit, currency } => {
            if !limit.is_finite() || limit < 0.0 {
                anyhow::bail!("budget limit must be a non-negative number, got {limit}");
            }
            let currency = currency.map_or_else(|| ctx.config.currency.clone(), |c| c.to_uppercase());
            let status = ctx
                .client
                .set_budget(limit, &currency, ctx.user_id())
                .await?;
            ctx.budget.publish(status.clone());
            print_status(&status);
        }
    }
    Ok(())
}

fn print_status(status: &BudgetStatus) {
    println!("User:    {}", status.user_id);
    println!(
        "Balance: {}",
        fmt_money(status.wallet_balance, &status.currency)
    );
    match status.budget_limit {
        Some(limit) => println!("Limit:   {}", fmt_money(limit, &status.currency)),
        None => println!("Limit:   none"),
    }
}
