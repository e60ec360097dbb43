use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub locales: LocalesConfig,
    pub dashboard: DashboardConfig,
    pub dataset: DatasetConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalesConfig {
    /// Supported locale identifiers, in server preference order.
    pub supported: Vec<String>,
    pub default: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub mount_prefix: String,
    #[serde(default)]
    pub stylesheets: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Stylesheet files bundled at startup, in order.
    #[serde(default)]
    pub stylesheets: Vec<String>,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 9090

        [locales]
        supported = ["pt", "en"]
        default = "pt"

        [dashboard]
        mount_prefix = "/dashapp"

        [dataset]
        path = "data/equity.csv"

        [assets]
        stylesheets = ["assets/css/base.css"]
    "#;

    fn sample_config() -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(SAMPLE, config::FileFormat::Toml))
            .build()
            .expect("sample config should build")
            .try_deserialize()
            .expect("sample config should deserialize")
    }

    #[test]
    fn test_sections_deserialize() {
        let config = sample_config();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.locales.supported, ["pt", "en"]);
        assert_eq!(config.dashboard.mount_prefix, "/dashapp");
        assert_eq!(config.dataset.path, "data/equity.csv");
        assert_eq!(config.assets.stylesheets.len(), 1);
    }

    #[test]
    fn test_missing_stylesheets_default_to_empty() {
        let config = sample_config();
        assert!(config.dashboard.stylesheets.is_empty());
    }

    #[test]
    fn test_locales_keep_server_preference_order() {
        let config = sample_config();
        assert_eq!(config.locales.supported[0], config.locales.default);
    }
}
