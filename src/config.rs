//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the site directory; a missing
//! file means "all defaults".
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Sansar Sharma"   # Suffix of every page <title>
//!
//! [server]
//! address = "127.0.0.1:8080" # Listen address for `portfolio serve`
//!
//! [relay]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! timeout_secs = 15          # Give up on the relay after this many seconds
//!
//! [colors.light]
//! background = "#f7f7fb"
//! surface = "#ffffff"
//! text = "#1c1c28"
//! text_muted = "#5c5c70"    # Durations, captions, sidebar labels
//! border = "#e2e2ea"
//! accent = "#4f46e5"
//! accent_hover = "#3730a3"
//!
//! [colors.dark]
//! background = "#0f0f17"
//! surface = "#1a1a26"
//! text = "#ececf4"
//! text_muted = "#9a9ab0"
//! border = "#2c2c3c"
//! accent = "#818cf8"
//! accent_hover = "#a5b4fc"
//! ```
//!
//! Relay credentials are not part of the config; they are read from the
//! environment (see [`crate::relay`]).
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page titles and other site-wide text.
    pub site: SiteMeta,
    /// Listen address for the built-in server.
    pub server: ServerConfig,
    /// Email relay endpoint and timeout.
    pub relay: RelayConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.server.address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.address '{}' is not a socket address (host:port)",
                self.server.address
            )));
        }
        if !(self.relay.endpoint.starts_with("https://")
            || self.relay.endpoint.starts_with("http://"))
        {
            return Err(ConfigError::Validation(
                "relay.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.relay.timeout_secs == 0 || self.relay.timeout_secs > MAX_RELAY_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "relay.timeout_secs must be 1-{MAX_RELAY_TIMEOUT_SECS}"
            )));
        }
        Ok(())
    }
}

pub const MAX_RELAY_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Appended to every page title: `"Projects | {title}"`.
    pub title: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Sansar Sharma".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// `host:port` to bind.
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// EmailJS `email/send` URL.
    pub endpoint: String,
    /// Whole-request timeout. A timed-out submit is a failed submit.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and sidebar background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (durations, captions, sidebar labels).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Buttons, active nav item, tags.
    pub accent: String,
    /// Accent on hover.
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f7f7fb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1c1c28".to_string(),
            text_muted: "#5c5c70".to_string(),
            border: "#e2e2ea".to_string(),
            accent: "#4f46e5".to_string(),
            accent_hover: "#3730a3".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f0f17".to_string(),
            surface: "#1a1a26".to_string(),
            text: "#ececf4".to_string(),
            text_muted: "#9a9ab0".to_string(),
            border: "#2c2c3c".to_string(),
            accent: "#818cf8".to_string(),
            accent_hover: "#a5b4fc".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <site-dir>/config.toml (default: site/config.toml).
# Unknown keys will cause an error.
#
# The email relay credentials are NOT configured here. Export them instead:
#   EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Appended to every page title, e.g. "Projects | Sansar Sharma".
title = "Sansar Sharma"

# ---------------------------------------------------------------------------
# Server (`portfolio serve`)
# ---------------------------------------------------------------------------
[server]
# host:port to listen on. Use 0.0.0.0 to accept outside connections.
address = "127.0.0.1:8080"

# ---------------------------------------------------------------------------
# Contact form relay
# ---------------------------------------------------------------------------
[relay]
# EmailJS REST endpoint.
endpoint = "https://api.emailjs.com/api/v1.0/email/send"

# Seconds to wait for the relay before reporting a failed submit (1-120).
timeout_secs = 15

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f7f7fb"
surface = "#ffffff"
text = "#1c1c28"
text_muted = "#5c5c70"    # Durations, captions, sidebar labels
border = "#e2e2ea"
accent = "#4f46e5"        # Buttons, active nav item, tags
accent_hover = "#3730a3"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f0f17"
surface = "#1a1a26"
text = "#ececf4"
text_muted = "#9a9ab0"
border = "#2c2c3c"
accent = "#818cf8"
accent_hover = "#a5b4fc"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, "    "),
        dark = scheme_properties(&colors.dark, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-accent-hover", &scheme.accent_hover),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Sansar Sharma");
        assert_eq!(config.server.address, "127.0.0.1:8080");
        assert_eq!(config.relay.timeout_secs, 15);
        assert!(config.relay.endpoint.contains("api.emailjs.com"));
        assert_eq!(config.colors.light.background, "#f7f7fb");
        assert_eq!(config.colors.dark.background, "#0f0f17");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
accent = "#ff0066"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.accent, "#ff0066");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#1c1c28");
        assert_eq!(config.colors.dark.background, "#0f0f17");
        assert_eq!(config.relay.timeout_secs, 15);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0;"));
        assert!(css.contains("--color-bg: #1a1a1a;"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg",
            "--color-surface",
            "--color-text",
            "--color-text-muted",
            "--color-border",
            "--color-accent",
            "--color-accent-hover",
        ] {
            assert_eq!(css.matches(&format!("{var}:")).count(), 2, "{var}");
        }
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.server.address, "127.0.0.1:8080");
        assert_eq!(config.colors.light.background, "#f7f7fb");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[server]
address = "0.0.0.0:3000"

[relay]
timeout_secs = 30
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.server.address, "0.0.0.0:3000");
        assert_eq!(config.relay.timeout_secs, 30);
        // Unspecified values should be defaults
        assert!(config.relay.endpoint.contains("api.emailjs.com"));
        assert_eq!(config.site.title, "Sansar Sharma");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[relay]\ntimeout_secs = 0\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[server]
adress = "127.0.0.1:1"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[analytics]\nid = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn credentials_not_accepted_in_config() {
        let result: Result<SiteConfig, _> =
            toml::from_str("[relay]\nservice_id = \"service_abc\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site]\ntitel = \"x\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_bad_address() {
        let mut config = SiteConfig::default();
        config.server.address = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_endpoint_scheme() {
        let mut config = SiteConfig::default();
        config.relay.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_timeout_bounds() {
        let mut config = SiteConfig::default();
        config.relay.timeout_secs = MAX_RELAY_TIMEOUT_SECS;
        assert!(config.validate().is_ok());
        config.relay.timeout_secs = MAX_RELAY_TIMEOUT_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1").unwrap();
        let overlay: toml::Value = toml::from_str("a = 2").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("[t]\na = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\nb = 3").unwrap();
        let merged = merge_toml(base, overlay);
        let table = merged.get("t").unwrap();
        assert_eq!(table.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(table.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn stock_config_toml_is_valid_and_matches_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.server.address, defaults.server.address);
        assert_eq!(config.relay.endpoint, defaults.relay.endpoint);
        assert_eq!(config.relay.timeout_secs, defaults.relay.timeout_secs);
        assert_eq!(config.colors.light.accent, defaults.colors.light.accent);
        assert_eq!(config.colors.dark.surface, defaults.colors.dark.surface);
    }
}
