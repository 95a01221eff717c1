//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `FORMGUEST_FORM_ID` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. A file without an access token picks it up from the environment
//!
//! ## Environment Variables
//! - `FORMGUEST_FORM_ID`: Active form id (required)
//! - `FORMGUEST_ACCESS_TOKEN`: Bearer token for the Google APIs
//! - `FORMGUEST_BIND_ADDR`: HTTP listen address
//! - `FORMGUEST_DB_PATH`: Database file path
//! - `FORMGUEST_DB_POOL_SIZE`: Connection pool size
//! - `FORMGUEST_TIME_ZONE`: IANA zone used to render event times
//! - `FORMGUEST_HTTP_TIMEOUT_SECS`: Optional outbound request timeout
//! - `FORMGUEST_CALENDAR_API_BASE` / `FORMGUEST_FORMS_API_BASE`: API roots
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./formguest.json` or `./formguest.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use formguest_domain::{
    Config, DatabaseConfig, DisplayConfig, FormGuestError, GoogleConfig, HttpConfig, Result,
    ServerConfig,
};

const ACCESS_TOKEN_VAR: &str = "FORMGUEST_ACCESS_TOKEN";
const FORM_ID_VAR: &str = "FORMGUEST_FORM_ID";

/// Load configuration with automatic fallback strategy
///
/// The environment wins when `FORMGUEST_FORM_ID` is set; any other invalid
/// variable is then reported as-is. Without it, config files are probed.
///
/// # Errors
/// Returns `FormGuestError::Config` if the chosen source does not yield a
/// valid configuration.
pub fn load() -> Result<Config> {
    if env_opt(FORM_ID_VAR).is_none() {
        tracing::debug!("{FORM_ID_VAR} not set, loading configuration from file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `FORMGUEST_FORM_ID` is required; every other setting falls back to
/// its default.
///
/// # Errors
/// Returns `FormGuestError::Config` if the form id is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let form_id = env_var(FORM_ID_VAR)?;

    let mut google = GoogleConfig::new(form_id, env_opt(ACCESS_TOKEN_VAR));
    if let Some(base) = env_opt("FORMGUEST_CALENDAR_API_BASE") {
        google.calendar_api_base = base;
    }
    if let Some(base) = env_opt("FORMGUEST_FORMS_API_BASE") {
        google.forms_api_base = base;
    }

    let server = ServerConfig {
        bind_addr: env_opt("FORMGUEST_BIND_ADDR")
            .unwrap_or_else(|| ServerConfig::default().bind_addr),
    };

    let defaults = DatabaseConfig::default();
    let database = DatabaseConfig {
        path: env_opt("FORMGUEST_DB_PATH").unwrap_or(defaults.path),
        pool_size: env_parse("FORMGUEST_DB_POOL_SIZE", "pool size")?.unwrap_or(defaults.pool_size),
    };

    let display = DisplayConfig {
        time_zone: env_opt("FORMGUEST_TIME_ZONE")
            .unwrap_or_else(|| DisplayConfig::default().time_zone),
    };

    let http = HttpConfig { timeout_secs: env_parse("FORMGUEST_HTTP_TIMEOUT_SECS", "timeout")? };

    Ok(Config { server, database, google, display, http })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `FormGuestError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FormGuestError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FormGuestError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FormGuestError::Config(format!("Failed to read config file: {}", e)))?;

    let mut config = parse_config(&contents, &config_path)?;
    if config.google.access_token.is_none() {
        config.google.access_token = env_opt(ACCESS_TOKEN_VAR);
    }
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FormGuestError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FormGuestError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(FormGuestError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "formguest.json",
        "formguest.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        FormGuestError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| FormGuestError::Config(format!("Invalid {what} in {key}: {e}")))
        })
        .transpose()
}
