use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["cartwise"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.api_url.is_none());
}

#[test]
fn parses_products_list() {
    let cli = Cli::try_parse_from(["cartwise", "products", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            command: ProductsCommands::List
        })
    ));
}

#[test]
fn parses_products_search_with_filters() {
    let cli = Cli::try_parse_from([
        "cartwise", "products", "search", "linen shirt", "--pref", "Budget", "--pref",
        "Fast Delivery", "--budget", "80", "--max-days", "3",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Products {
        command:
            ProductsCommands::Search {
                query,
                preferences,
                budget,
                max_delivery_days,
            },
    }) = cli.command
    else {
        panic!("expected products search");
    };
    assert_eq!(query, "linen shirt");
    assert_eq!(preferences, vec!["Budget", "Fast Delivery"]);
    assert_eq!(budget, Some(80.0));
    assert_eq!(max_delivery_days, Some(3.0));
}

#[test]
fn parses_cart_quantities_and_checkout() {
    let cli = Cli::try_parse_from([
        "cartwise", "cart", "--qty", "1=0", "--qty", "2=3", "--checkout", "--yes",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Cart {
        quantities,
        checkout,
        yes,
    }) = cli.command
    else {
        panic!("expected cart");
    };
    assert_eq!(quantities, vec![("1".to_string(), 0), ("2".to_string(), 3)]);
    assert!(checkout);
    assert!(yes);
}

#[test]
fn rejects_malformed_quantity() {
    assert!(Cli::try_parse_from(["cartwise", "cart", "--qty", "2"]).is_err());
    assert!(Cli::try_parse_from(["cartwise", "cart", "--qty", "=2"]).is_err());
    assert!(Cli::try_parse_from(["cartwise", "cart", "--qty", "2=-1"]).is_err());
}

#[test]
fn parses_budget_set_with_currency() {
    let cli = Cli::try_parse_from(["cartwise", "budget", "set", "250", "--currency", "eur"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Budget {
            command: BudgetCommands::Set { limit, currency: Some(ref c) }
        }) if (limit - 250.0).abs() < f64::EPSILON && c == "eur"
    ));
}

#[test]
fn checkout_requires_card_fields() {
    assert!(Cli::try_parse_from(["cartwise", "checkout", "--name", "Ada"]).is_err());

    let cli = Cli::try_parse_from([
        "cartwise",
        "checkout",
        "--name",
        "Ada Lovelace",
        "--card-number",
        "4242424242424242",
        "--expiry",
        "12/30",
        "--cvc",
        "123",
        "--city",
        "Lyon",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Checkout { payment }) = cli.command else {
        panic!("expected checkout");
    };
    assert_eq!(payment.name, "Ada Lovelace");
    assert_eq!(payment.city.as_deref(), Some("Lyon"));
    assert!(payment.email.is_none());
}

#[test]
fn parses_pinterest_callback_url() {
    let cli = Cli::try_parse_from([
        "cartwise",
        "pinterest",
        "callback",
        "http://localhost:8080/pinterest/callback?code=abc&state=s1",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Pinterest {
            command: PinterestCommands::Callback { ref url }
        }) if url.ends_with("state=s1")
    ));
}

#[test]
fn tryon_requires_an_item() {
    assert!(Cli::try_parse_from(["cartwise", "tryon", "--photo", "data:image/png;base64,AA"]).is_err());

    let cli = Cli::try_parse_from([
        "cartwise",
        "tryon",
        "--photo",
        "data:image/png;base64,AA",
        "--item",
        "https://cdn.example/shirt.jpg",
        "--category",
        "tops",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Tryon { ref items, category: Some(ref c), .. }) if items.len() == 1 && c == "tops"
    ));
}

#[test]
fn parses_suggest_overrides() {
    let cli = Cli::try_parse_from([
        "cartwise", "suggest", "--budget", "300", "--item", "jacket", "--item", "boots",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Suggest { overrides }) = cli.command else {
        panic!("expected suggest");
    };
    let query: cartwise_client::CartQuery = overrides.into();
    assert_eq!(query.budget.as_deref(), Some("300"));
    assert_eq!(query.items, vec!["jacket", "boots"]);
    assert!(query.deadline.is_none());
}

#[test]
fn api_url_is_global() {
    let cli = Cli::try_parse_from(["cartwise", "logs", "--api-url", "http://10.0.0.5:3001"])
        .expect("expected valid cli args");
    assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:3001"));
    assert!(matches!(cli.command, Some(Commands::Logs)));
}

#[test]
fn shop_collects_preferences() {
    let cli = Cli::try_parse_from(["cartwise", "shop", "ski trip", "--pref", "Trending"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Shop { ref query, ref preferences }) if query == "ski trip" && preferences == &["Trending"]
    ));
}

#[test]
fn fmt_money_uses_two_decimals() {
    assert_eq!(fmt_money(349.0, "USD"), "349.00 USD");
}

#[test]
fn truncate_appends_ellipsis() {
    assert_eq!(truncate("abcdef", 3), "abc...");
    assert_eq!(truncate("abc", 3), "abc");
}
