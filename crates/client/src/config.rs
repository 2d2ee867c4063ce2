//! Runtime configuration read from the environment

use std::path::PathBuf;

/// Filter used when neither `RUST_LOG` nor `GCMS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "gcms_client=info";

pub const STORAGE_PATH_VAR: &str = "GCMS_STORAGE_PATH";
pub const LOG_FILTER_VAR: &str = "GCMS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Storage file for the desktop backend; `None` means the platform config dir
    pub storage_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load `.env` if present, then read the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// The browser has no process environment.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            storage_path: read(STORAGE_PATH_VAR).map(PathBuf::from),
            log_filter: read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.log_filter, "gcms_client=info");
    }

    #[test]
    fn test_reads_both_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GCMS_STORAGE_PATH", "/tmp/gcms/state.json"),
            ("GCMS_LOG", "gcms_client=debug"),
        ]));

        assert_eq!(
            config.storage_path,
            Some(PathBuf::from("/tmp/gcms/state.json"))
        );
        assert_eq!(config.log_filter, "gcms_client=debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GCMS_STORAGE_PATH", "   "),
            ("GCMS_LOG", ""),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}
