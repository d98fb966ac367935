//! Store configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings that shape the derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Added to the 1-based topic position to form each group id.
    #[serde(default)]
    pub static_topic_offset: u32,
    /// Width split between topics by the default allocator.
    #[serde(default = "default_total_width")]
    pub total_width: f64,
}

fn default_total_width() -> f64 {
    100.0
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            static_topic_offset: 0,
            total_width: default_total_width(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `surveykit.toml` in the current directory
/// 2. `~/.config/surveykit/config.toml`
///
/// `SURVEYKIT_TOPIC_OFFSET` overrides the topic offset.
pub fn load_config() -> Result<StoreConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("surveykit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StoreConfig::default(),
    };

    if let Ok(raw) = std::env::var("SURVEYKIT_TOPIC_OFFSET") {
        config.static_topic_offset = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid SURVEYKIT_TOPIC_OFFSET: '{raw}'"))?;
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<StoreConfig> {
    let config: StoreConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.total_width.is_finite() && config.total_width >= 0.0,
        "total_width must be a non-negative number"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("surveykit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.static_topic_offset, 0);
        assert_eq!(config.total_width, 100.0);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str("static_topic_offset = 3\n").unwrap();
        assert_eq!(config.static_topic_offset, 3);
        assert_eq!(config.total_width, 100.0);
    }

    #[test]
    fn reject_negative_width() {
        assert!(parse_config_str("total_width = -5.0\n").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surveykit.toml");
        std::fs::write(&path, "total_width = 80.0\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.total_width, 80.0);
    }
}
