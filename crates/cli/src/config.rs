use std::{env, path::PathBuf};

/// Default `tracing` filter when neither `RUST_LOG` nor `RISINGGEN_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "risinggen_cli=info";

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to a JSON catalog file. The built-in sample catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Log filter directives (default: "risinggen_cli=info")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RISINGGEN_CATALOG` - Path to a JSON catalog file (default: built-in sample)
    /// - `RISINGGEN_LOG` - Log filter directives (default: "risinggen_cli=info")
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("RISINGGEN_CATALOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            log_filter: env::var("RISINGGEN_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Overrides the catalog path when one is given on the command line.
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_catalog_path_overrides() {
        let config = Config::default().with_catalog_path(Some(PathBuf::from("events.json")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_with_catalog_path_keeps_existing() {
        let config = Config {
            catalog_path: Some(PathBuf::from("from-env.json")),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
        .with_catalog_path(None);

        assert_eq!(config.catalog_path, Some(PathBuf::from("from-env.json")));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_filter, "risinggen_cli=info");
    }

    #[test]
    fn test_default_log_filter_is_valid_directive() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
