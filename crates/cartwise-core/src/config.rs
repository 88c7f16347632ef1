use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config
/// pointed at the local development backend.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = or_default("CARTWISE_API_URL", DEFAULT_API_URL);
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CARTWISE_API_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base_url}'"),
        });
    }

    let env = parse_environment(&or_default("CARTWISE_ENV", "development"))?;
    let log_level = or_default("CARTWISE_LOG_LEVEL", default_log_level(&env));
    let user_id = or_default("CARTWISE_USER_ID", "demo");
    let currency = or_default("CARTWISE_CURRENCY", "USD").to_uppercase();

    let request_timeout_secs = parse_u64("CARTWISE_REQUEST_TIMEOUT_SECS", "30")?;
    let optimize_delay_ms = parse_u64("CARTWISE_OPTIMIZE_DELAY_MS", "1500")?;
    let search_delay_ms = parse_u64("CARTWISE_SEARCH_DELAY_MS", "2000")?;
    let checkout_delay_ms = parse_u64("CARTWISE_CHECKOUT_DELAY_MS", "2000")?;
    let redirect_delay_ms = parse_u64("CARTWISE_REDIRECT_DELAY_MS", "800")?;

    // An explicitly empty value turns the wallet cache off.
    let wallet_cache_path = Some(or_default(
        "CARTWISE_WALLET_CACHE_PATH",
        "./.cartwise/wallet.json",
    ))
    .filter(|p| !p.trim().is_empty())
    .map(PathBuf::from);
    let buyer_email = lookup("CARTWISE_BUYER_EMAIL")
        .ok()
        .filter(|v| !v.trim().is_empty());

    Ok(AppConfig {
        api_base_url,
        env,
        log_level,
        user_id,
        currency,
        request_timeout_secs,
        optimize_delay_ms,
        search_delay_ms,
        checkout_delay_ms,
        redirect_delay_ms,
        wallet_cache_path,
        buyer_email,
    })
}

/// Production runs quieter unless `CARTWISE_LOG_LEVEL` says otherwise.
fn default_log_level(env: &Environment) -> &'static str {
    match env {
        Environment::Production => "warn",
        Environment::Development | Environment::Test => "info",
    }
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CARTWISE_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
