//! Configuration resolution for promobar-admin
//!
//! Each key resolves environment variable → TOML config file → compiled
//! default. Required keys (shop domain, admin token) fail resolution
//! with a message listing every way to supply the value. A missing or
//! malformed TOML file never terminates startup.

use promobar_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default listen address
const DEFAULT_LISTEN: &str = "127.0.0.1:5860";

/// Default Admin API version used for store calls
const DEFAULT_API_VERSION: &str = "2024-10";

/// TOML file schema (~/.config/promobar/promobar-admin.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub listen: Option<String>,
    pub shop_domain: Option<String>,
    pub admin_token: Option<String>,
    pub api_version: Option<String>,
}

impl TomlConfig {
    /// Default config file path for the platform
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("promobar").join("promobar-admin.toml"))
    }

    /// Load from a TOML file; missing or unreadable files yield the
    /// empty config with a warning rather than an error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Address the HTTP server binds
    pub listen: SocketAddr,
    /// Shop domain the store client targets (e.g. my-store.myshopify.com)
    pub shop_domain: String,
    /// Admin API access token sent with every store call
    pub admin_token: String,
    /// Admin API version segment of the store endpoint
    pub api_version: String,
}

impl AdminConfig {
    /// Resolve the full configuration from environment and TOML
    pub fn resolve() -> Result<Self> {
        let toml_path = TomlConfig::default_path();
        let toml_config = TomlConfig::load(toml_path.as_deref());
        Self::from_sources(&toml_config)
    }

    /// Resolve each key: environment, then TOML, then compiled default
    /// (or a Config error for required keys)
    pub fn from_sources(toml_config: &TomlConfig) -> Result<Self> {
        let listen_raw = resolve_optional(
            "PROMOBAR_LISTEN",
            toml_config.listen.as_deref(),
            DEFAULT_LISTEN,
        );
        let listen: SocketAddr = listen_raw
            .parse()
            .map_err(|_| Error::Config(format!("Invalid listen address: {listen_raw}")))?;

        let shop_domain = resolve_required(
            "PROMOBAR_SHOP_DOMAIN",
            toml_config.shop_domain.as_deref(),
            "shop_domain",
            "shop domain (e.g. my-store.myshopify.com)",
        )?;
        let admin_token = resolve_required(
            "PROMOBAR_ADMIN_TOKEN",
            toml_config.admin_token.as_deref(),
            "admin_token",
            "Admin API access token",
        )?;
        let api_version = resolve_optional(
            "PROMOBAR_API_VERSION",
            toml_config.api_version.as_deref(),
            DEFAULT_API_VERSION,
        );

        Ok(Self {
            listen,
            shop_domain,
            admin_token,
            api_version,
        })
    }
}

/// Non-empty, non-whitespace check applied to every resolved value
pub fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty()
}

fn resolve_optional(env_name: &str, toml_value: Option<&str>, default: &str) -> String {
    if let Ok(value) = std::env::var(env_name) {
        if is_valid_value(&value) {
            return value;
        }
    }
    if let Some(value) = toml_value {
        if is_valid_value(value) {
            return value.to_string();
        }
    }
    default.to_string()
}

fn resolve_required(
    env_name: &str,
    toml_value: Option<&str>,
    toml_key: &str,
    what: &str,
) -> Result<String> {
    let env_value = std::env::var(env_name).ok().filter(|v| is_valid_value(v));
    let toml_val = toml_value
        .filter(|v| is_valid_value(v))
        .map(str::to_string);

    if env_value.is_some() && toml_val.is_some() {
        warn!(
            "{} found in both environment and TOML config. Using environment (highest priority).",
            env_name
        );
    }

    env_value.or(toml_val).ok_or_else(|| {
        Error::Config(format!(
            "Missing {what}. Configure using one of:\n\
             1. Environment: {env_name}=...\n\
             2. TOML config: ~/.config/promobar/promobar-admin.toml ({toml_key} = \"...\")"
        ))
    })
}

// ============================================================================
// Tests
// ============================================================================
