use cartwise_app::components::SearchSidebar;
use cartwise_app::pages::PinterestCallbackPage;
use cartwise_app::{AppContext, Route};
use clap::Subcommand;

/// Sub-commands available under `pinterest`.
#[derive(Debug, Subcommand)]
pub enum PinterestCommands {
    /// Show whether a Pinterest account is connected
    Status,
    /// Print the authorization URL to open in a browser
    Connect,
    /// Finish the OAuth flow with the redirect URL or its query string
    Callback { url: String },
}

pub(crate) async fn run(ctx: &AppContext, command: PinterestCommands) -> anyhow::Result<()> {
    match command {
        PinterestCommands::Status => {
            let status = ctx.client.pinterest_status().await?;
            match (status.connected, status.connected_at) {
                (true, Some(at)) => println!("connected since {}", at.format("%Y-%m-%d %H:%M UTC")),
                (true, None) => println!("connected"),
                (false, _) => println!("not connected; run `cartwise pinterest connect`"),
            }
        }
        PinterestCommands::Connect => {
            let mut sidebar = SearchSidebar::new(ctx.clone());
            match sidebar.connect_pinterest().await {
                Some(Route::External(url)) => println!("open this URL to authorize:\n{url}"),
                Some(other) => println!("continue at {other}"),
                None => anyhow::bail!(
                    "{}",
                    sidebar.pinterest_error().unwrap_or("Pinterest connection failed")
                ),
            }
        }
        PinterestCommands::Callback { url } => {
            let mut page = PinterestCallbackPage::new(ctx.clone());
            let route = page.run(&url).await;
            println!("{}", page.message());
            if route.is_none() {
                anyhow::bail!("Pinterest was not connected");
            }
        }
    }
    Ok(())
}
