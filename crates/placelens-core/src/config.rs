use crate::app_config::{AppConfig, Environment, FallbackOrder};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PLACELENS_ENV", "development"));
    let bind_addr = parse_addr("PLACELENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PLACELENS_LOG_LEVEL", "info");

    // Empty string counts as absent: hosted platforms often inject blank vars.
    let openai_api_key = lookup("OPENAI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let report_base_url = or_default("PLACELENS_REPORT_BASE_URL", "https://api.openai.com");
    let report_model = or_default("PLACELENS_REPORT_MODEL", "gpt-4.1-mini");
    let report_timeout_secs = parse_u64("PLACELENS_REPORT_TIMEOUT_SECS", "30")?;

    let fetch_timeout_secs = parse_u64("PLACELENS_FETCH_TIMEOUT_SECS", "9")?;
    let fetch_min_body_bytes = parse_usize("PLACELENS_FETCH_MIN_BODY_BYTES", "500")?;
    let fetch_fallback_order = parse_fallback_order(
        "PLACELENS_FETCH_FALLBACK_ORDER",
        &or_default("PLACELENS_FETCH_FALLBACK_ORDER", "desktop-first"),
    )?;
    let keyword_cap = parse_usize("PLACELENS_KEYWORD_CAP", "12")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        openai_api_key,
        report_base_url,
        report_model,
        report_timeout_secs,
        fetch_timeout_secs,
        fetch_min_body_bytes,
        fetch_fallback_order,
        keyword_cap,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_fallback_order(var: &str, s: &str) -> Result<FallbackOrder, ConfigError> {
    match s {
        "desktop-first" => Ok(FallbackOrder::DesktopFirst),
        "mobile-first" => Ok(FallbackOrder::MobileFirst),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected \"desktop-first\" or \"mobile-first\", got \"{other}\""),
        }),
    }
}
