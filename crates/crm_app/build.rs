use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaletteColor {
    main: String,
    lighter: Option<String>,
    light: Option<String>,
    dark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Palette {
    primary: PaletteColor,
    secondary: PaletteColor,
    success: PaletteColor,
    warning: PaletteColor,
    info: PaletteColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeConfig {
    mode: String,
    font_family: String,
    palette: Palette,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginConfig {
    submit_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppConfig {
    schema_version: u32,
    product_title: String,
    sidebar_title: String,
    sidebar_width_px: u16,
    login: LoginConfig,
    theme: ThemeConfig,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("crm.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: AppConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }
    if config.product_title.trim().is_empty() {
        panic!("product_title must not be empty in {}", path.display());
    }
    if config.sidebar_width_px == 0 {
        panic!("sidebar_width_px must be positive in {}", path.display());
    }
    if !matches!(config.theme.mode.as_str(), "light" | "dark") {
        panic!(
            "theme.mode must be `light` or `dark` in {}, found `{}`",
            path.display(),
            config.theme.mode
        );
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize app config");
    let generated = format!(
        "/// Build-time generated application config JSON.\n\
pub const APP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
