use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub host: HostConfig,
    /// Attribute values used when no host document is configured.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    pub to_file: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub document: Option<String>,
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config (or `explicit`).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let overlay_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => user_config_path().filter(|path| path.exists()),
        };

        let overlay = match overlay_path {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Some(
                    fs::read_to_string(&path)
                        .with_context(|| format!("reading config {}", path.display()))?,
                )
            }
            None => None,
        };

        let mut config = Self::from_layers(overlay.as_deref())?;

        // Expand ~ in the host document path
        if let Some(document) = config.host.document.as_mut() {
            if document.starts_with('~') {
                let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
                *document = document.replacen('~', &home.to_string_lossy(), 1);
            }
        }

        Ok(config)
    }

    /// Merge an optional overlay onto the built-in defaults.
    pub fn from_layers(overlay: Option<&str>) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(DEFAULTS).context("parsing default config")?;

        if let Some(raw) = overlay {
            let user: toml::Table = toml::from_str(raw).context("parsing user config")?;
            merge_tables(&mut table, user);
        }

        let config = toml::Value::Table(table)
            .try_into()
            .context("invalid configuration")?;
        Ok(config)
    }

    pub fn document_path(&self) -> Option<PathBuf> {
        self.host.document.as_ref().map(PathBuf::from)
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "client-paths")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Later layers win; nested tables are merged key by key.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_parse() {
        let config = AppConfig::from_layers(None).unwrap();
        assert_eq!(config.logging.filter, "client_paths=info");
        assert!(!config.logging.to_file);
        assert!(config.host.document.is_none());
        assert!(config.attributes.is_empty());
    }

    #[test]
    fn overlay_merges_instead_of_replacing() {
        let overlay = r#"
            [logging]
            to_file = true

            [attributes]
            data-ws = "/ws"
        "#;
        let config = AppConfig::from_layers(Some(overlay)).unwrap();

        assert!(config.logging.to_file);
        assert_eq!(config.logging.filter, "client_paths=info");
        assert_eq!(config.attributes.get("data-ws").map(String::as_str), Some("/ws"));
    }

    #[test]
    fn malformed_overlay_is_an_error() {
        assert!(AppConfig::from_layers(Some("[logging\nfilter = 1")).is_err());
        assert!(AppConfig::from_layers(Some("[logging]\nto_file = \"yes\"")).is_err());
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[host]\ndocument = \"/srv/www/index.html\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            config.document_path(),
            Some(PathBuf::from("/srv/www/index.html"))
        );
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn merge_replaces_scalars_and_recurses_into_tables() {
        let mut base: toml::Table = toml::from_str("a = 1\n[t]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Table = toml::from_str("a = 2\n[t]\ny = 3").unwrap();
        merge_tables(&mut base, overlay);

        assert_eq!(base["a"].as_integer(), Some(2));
        assert_eq!(base["t"]["x"].as_integer(), Some(1));
        assert_eq!(base["t"]["y"].as_integer(), Some(3));
    }
}
