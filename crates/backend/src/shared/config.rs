use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

use contracts::projections::p900_carta::dto::DEFAULT_RESTAURANT_NAME;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub menu: MenuConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// Путь к CSV-файлу или URL опубликованной таблицы
    pub source: String,
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    pub dist_dir: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dist_dir: "crates/frontend/dist".to_string(),
        }
    }
}

fn default_restaurant_name() -> String {
    DEFAULT_RESTAURANT_NAME.to_string()
}

/// Where the dish rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    File(PathBuf),
    Url(String),
}

impl MenuConfig {
    pub fn source(&self) -> MenuSource {
        let source = self.source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            MenuSource::Url(source.to_string())
        } else {
            MenuSource::File(PathBuf::from(source))
        }
    }

    /// Logo reference, empty string counts as absent.
    pub fn logo_url(&self) -> Option<String> {
        self.logo_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[menu]
source = "data/carta.csv"
restaurant_name = "Nuestra Carta"

[frontend]
dist_dir = "crates/frontend/dist"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Makes the configuration available to request handlers. Only the first call wins.
pub fn init(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("configuration is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.menu.restaurant_name, "Nuestra Carta");
        assert_eq!(config.menu.logo_url(), None);
        assert_eq!(
            config.menu.source(),
            MenuSource::File(PathBuf::from("data/carta.csv"))
        );
        assert_eq!(config.frontend.dist_dir, "crates/frontend/dist");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse_config(
            r#"
            [menu]
            source = "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
            logo_url = "  "
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.menu.restaurant_name, DEFAULT_RESTAURANT_NAME);
        assert_eq!(config.menu.logo_url(), None);
        assert!(matches!(config.menu.source(), MenuSource::Url(_)));
    }

    #[test]
    fn test_menu_section_is_required() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }
}
