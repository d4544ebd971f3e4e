//! Application configuration: product copy, shell geometry, login timing, and theme palette.
//!
//! `crm.config.toml` is validated by the build script and embedded as JSON. The decoded
//! [`AppConfig`] is handed to the view tree once through [`provide_app_config`]; components read
//! it with [`use_app_config`] instead of consulting a global theme object.

use std::sync::OnceLock;
use std::time::Duration;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/app_config_generated.rs"));

/// Config schema version this build understands.
pub const APP_CONFIG_SCHEMA_VERSION: u32 = 1;
/// Login submit delay used when no config overrides it.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
/// Side drawer width used when no config overrides it.
pub const DEFAULT_SIDEBAR_WIDTH_PX: u16 = 240;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an embedded or supplied config payload is rejected.
pub enum ConfigError {
    /// The JSON payload did not match the config shape.
    #[error("config decode failed: {0}")]
    Decode(String),
    /// The payload declares a schema this build does not understand.
    #[error("unsupported config schema version {found}")]
    UnsupportedSchema {
        /// Version found in the payload.
        found: u32,
    },
    /// The product title is blank.
    #[error("product title must not be empty")]
    EmptyTitle,
    /// The side drawer would have no width.
    #[error("sidebar width must be positive")]
    InvalidSidebarWidth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One palette role with its tint variants.
pub struct PaletteColor {
    pub main: String,
    #[serde(default)]
    pub lighter: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
}

impl PaletteColor {
    fn main(main: &str) -> Self {
        Self {
            main: main.to_string(),
            lighter: None,
            light: None,
            dark: None,
        }
    }

    fn with_lighter(mut self, lighter: &str) -> Self {
        self.lighter = Some(lighter.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub success: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
}

impl Palette {
    fn roles(&self) -> [(&'static str, &PaletteColor); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("warning", &self.warning),
            ("info", &self.info),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub font_family: String,
    pub palette: Palette,
}

impl ThemeConfig {
    /// Renders the palette and typography as CSS custom properties for the root element.
    pub fn css_variables(&self) -> String {
        let mut css = format!("--crm-font-family:{};", self.font_family);
        for (role, color) in self.palette.roles() {
            css.push_str(&format!("--crm-{role}-main:{};", color.main));
            let variants = [
                ("lighter", &color.lighter),
                ("light", &color.light),
                ("dark", &color.dark),
            ];
            for (variant, value) in variants {
                if let Some(value) = value {
                    css.push_str(&format!("--crm-{role}-{variant}:{value};"));
                }
            }
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Simulated submission latency.
    pub submit_delay_ms: u64,
}

impl LoginConfig {
    pub fn submit_delay(self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Startup configuration passed into the rendering context.
pub struct AppConfig {
    pub schema_version: u32,
    /// Title shown in the top app bar and the document title.
    pub product_title: String,
    /// Short brand label at the top of the side drawer.
    pub sidebar_title: String,
    pub sidebar_width_px: u16,
    pub login: LoginConfig,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: APP_CONFIG_SCHEMA_VERSION,
            product_title: "CRM Dashboard".to_string(),
            sidebar_title: "CRM".to_string(),
            sidebar_width_px: DEFAULT_SIDEBAR_WIDTH_PX,
            login: LoginConfig {
                submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            },
            theme: ThemeConfig {
                mode: ThemeMode::Light,
                font_family: r#""Roboto", "Helvetica", "Arial", sans-serif"#.to_string(),
                palette: Palette {
                    primary: PaletteColor::main("#1976d2").with_lighter("#e3f2fd"),
                    secondary: PaletteColor::main("#dc004e"),
                    success: PaletteColor::main("#2e7d32").with_lighter("#e8f5e9"),
                    warning: PaletteColor::main("#ed6c02").with_lighter("#fff3e0"),
                    info: PaletteColor {
                        main: "#0288d1".to_string(),
                        lighter: Some("#e1f5fe".to_string()),
                        light: Some("#4fc3f7".to_string()),
                        dark: Some("#01579b".to_string()),
                    },
                },
            },
        }
    }
}

impl AppConfig {
    /// Decodes and validates a JSON config payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload does not decode or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Decode(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the shell relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != APP_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedSchema {
                found: self.schema_version,
            });
        }
        if self.product_title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if self.sidebar_width_px == 0 {
            return Err(ConfigError::InvalidSidebarWidth);
        }
        Ok(())
    }

    /// The config embedded at build time, decoded once.
    ///
    /// Falls back to [`AppConfig::default`] with a warning if the embedded payload is rejected.
    pub fn builtin() -> &'static AppConfig {
        static CONFIG: OnceLock<AppConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            Self::from_json(APP_CONFIG_JSON).unwrap_or_else(|err| {
                logging::warn!("embedded app config rejected, using defaults: {err}");
                Self::default()
            })
        })
    }
}

/// Makes `config` available to every descendant component.
pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Returns the [`AppConfig`] supplied at startup.
///
/// # Panics
///
/// Panics if called outside a tree that ran [`provide_app_config`].
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let decoded = AppConfig::from_json(APP_CONFIG_JSON).expect("embedded config decodes");
        assert_eq!(decoded, AppConfig::default());
        assert_eq!(AppConfig::builtin(), &decoded);
    }

    #[test]
    fn submit_delay_converts_to_duration() {
        let config = AppConfig::default();
        assert_eq!(config.login.submit_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn validation_rejects_unknown_schema_blank_title_and_zero_width() {
        let mut config = AppConfig::default();
        config.schema_version = 2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedSchema { found: 2 })
        );

        let mut config = AppConfig::default();
        config.product_title = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyTitle));

        let mut config = AppConfig::default();
        config.sidebar_width_px = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSidebarWidth));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            AppConfig::from_json("{\"schema_version\":1}"),
            Err(ConfigError::Decode(_))
        ));
    }

    #[test]
    fn css_variables_include_only_present_variants() {
        let css = AppConfig::default().theme.css_variables();
        assert!(css.contains("--crm-primary-main:#1976d2;"));
        assert!(css.contains("--crm-primary-lighter:#e3f2fd;"));
        assert!(css.contains("--crm-info-dark:#01579b;"));
        assert!(!css.contains("--crm-secondary-lighter"));
        assert!(css.starts_with("--crm-font-family:"));
    }
}
