//! Client configuration
//!
//! Resolves the backend base URL and default projection rates from, in
//! increasing precedence: built-in defaults, an optional TOML file under the
//! platform config directory, the `CARTEIRA_API_URL` environment variable,
//! and the `--api-url` flag. The resolved value is injected into
//! [`crate::api::ApiClient`] at construction; call sites never read the
//! environment themselves.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Fully resolved configuration handed to the API client and dispatchers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    /// Annual CDI rate (%) assumed by fixed income projections unless
    /// overridden on the command line.
    pub cdi_rate: Decimal,
    /// Annual IPCA rate (%) assumed by fixed income projections.
    pub ipca_rate: Decimal,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            // 13.75% CDI / 4.5% IPCA, the tracker's stock assumptions
            cdi_rate: Decimal::new(1375, 2),
            ipca_rate: Decimal::new(45, 1),
        }
    }
}

/// On-disk shape; every field optional so a partial file is valid.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    cdi_rate: Option<Decimal>,
    ipca_rate: Option<Decimal>,
}

impl ClientConfig {
    /// Load configuration, layering the default file location, environment
    /// and the optional CLI override.
    pub fn load(cli_api_url: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = default_config_path() {
            if path.exists() {
                config.apply_file(&path)?;
            }
        }

        if let Ok(url) = std::env::var("CARTEIRA_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        if let Some(url) = cli_api_url {
            config.api_url = url.to_string();
        }

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(rate) = file.cdi_rate {
            self.cdi_rate = rate;
        }
        if let Some(rate) = file.ipca_rate {
            self.ipca_rate = rate;
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join("carteira").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cdi_rate, dec!(13.75));
        assert_eq!(config.ipca_rate, dec!(4.5));
    }

    #[test]
    fn test_partial_file_overrides_only_present_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"http://tracker.local:9000\"").unwrap();

        let mut config = ClientConfig::default();
        config.apply_file(file.path()).unwrap();
        assert_eq!(config.api_url, "http://tracker.local:9000");
        assert_eq!(config.cdi_rate, dec!(13.75));
    }

    #[test]
    fn test_file_rates_parse_as_decimals() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cdi_rate = 11.25").unwrap();
        writeln!(file, "ipca_rate = 3.9").unwrap();

        let mut config = ClientConfig::default();
        config.apply_file(file.path()).unwrap();
        assert_eq!(config.cdi_rate, dec!(11.25));
        assert_eq!(config.ipca_rate, dec!(3.9));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = [not valid").unwrap();

        let mut config = ClientConfig::default();
        let err = config.apply_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
