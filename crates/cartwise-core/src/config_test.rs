use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CARTWISE_ENV"));
}

#[test]
fn empty_env_uses_local_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:3001");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.user_id, "demo");
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.optimize_delay_ms, 1500);
    assert_eq!(cfg.search_delay_ms, 2000);
    assert_eq!(cfg.checkout_delay_ms, 2000);
    assert_eq!(cfg.redirect_delay_ms, 800);
    assert!(cfg.buyer_email.is_none());
}

#[test]
fn api_url_override() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_API_URL", "https://shop.example.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://shop.example.com");
}

#[test]
fn api_url_without_scheme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_API_URL", "localhost:3001");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CARTWISE_API_URL"),
        "expected InvalidEnvVar(CARTWISE_API_URL), got: {result:?}"
    );
}

#[test]
fn currency_is_uppercased() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_CURRENCY", "eur");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.currency, "EUR");
}

#[test]
fn checkout_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_CHECKOUT_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CARTWISE_CHECKOUT_DELAY_MS"),
        "expected InvalidEnvVar(CARTWISE_CHECKOUT_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn blank_buyer_email_is_ignored() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_BUYER_EMAIL", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.buyer_email.is_none());
}

#[test]
fn debug_redacts_buyer_email() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_BUYER_EMAIL", "shopper@example.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("shopper@example.com"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn delay_accessors_convert_millis() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_REDIRECT_DELAY_MS", "250");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.redirect_delay(), std::time::Duration::from_millis(250));
}

#[test]
fn wallet_cache_defaults_to_dot_dir() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.wallet_cache_path.as_deref(),
        Some(std::path::Path::new("./.cartwise/wallet.json"))
    );
}

#[test]
fn empty_wallet_cache_path_disables_cache() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_WALLET_CACHE_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.wallet_cache_path.is_none());
}

#[test]
fn production_defaults_to_warn_logging() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn explicit_log_level_wins_over_environment() {
    let mut map = HashMap::new();
    map.insert("CARTWISE_ENV", "production");
    map.insert("CARTWISE_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
