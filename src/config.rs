//! Startup configuration: the seed catalog, the initial design, and the
//! canvas range for spawned copies.
//!
//! ```toml
//! catalog = ["stickers/cat.png", "stickers/dog.png", "#FDE68A"]
//! design = "bulk-select"
//!
//! [placement]
//! x = { min = 10.0, max = 90.0 }
//! y = { min = 10.0, max = 80.0 }
//! ```
//!
//! Every key is optional and falls back to [`DrawerConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::sticker::{Catalog, Design, PlacementRange};

/// Color tokens the drawer is seeded with when no catalog is configured.
pub const INITIAL_STICKERS: [&str; 9] = [
    "#FDE68A", "#A5F3FC", "#FBCFE8", "#BBF7D0", "#C4B5FD", "#FCA5A5", "#FEF3C7", "#BFDBFE",
    "#FCE7F3",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawerConfig {
    pub catalog: Vec<String>,
    pub design: Design,
    pub placement: PlacementRange,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            catalog: INITIAL_STICKERS.iter().map(|s| s.to_string()).collect(),
            design: Design::default(),
            placement: PlacementRange::default(),
        }
    }
}

impl DrawerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            stickers = config.catalog.len(),
            design = ?config.design,
            "loaded drawer config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.placement.validate()
    }

    pub fn seed_catalog(&self) -> Catalog {
        Catalog::new(self.catalog.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::AxisRange;
    use std::io::Write;

    #[test]
    fn empty_source_yields_defaults() {
        let config = DrawerConfig::from_toml_str("").unwrap();

        assert_eq!(config, DrawerConfig::default());
        assert_eq!(config.seed_catalog().len(), 9);
        assert_eq!(config.seed_catalog().get(0).map(|s| s.as_str()), Some("#FDE68A"));
    }

    #[test]
    fn parses_full_config() {
        let config = DrawerConfig::from_toml_str(
            r#"
            catalog = ["a.png", "b.png", "a.png"]
            design = "bulk-select"

            [placement]
            x = { min = 0.0, max = 50.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog, ["a.png", "b.png", "a.png"]);
        assert_eq!(config.design, Design::BulkSelect);
        assert_eq!(config.placement.x, AxisRange::new(0.0, 50.0));
        assert_eq!(config.placement.y, AxisRange::new(10.0, 80.0));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = DrawerConfig::from_toml_str("stickerz = []").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = DrawerConfig::from_toml_str(
            r#"
            [placement]
            y = { min = 80.0, max = 10.0 }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidRange { axis: "y", .. }));
        assert!(err.to_string().contains("placement range for y"));
    }

    #[test]
    fn rejects_range_too_wide_to_sample() {
        let err = DrawerConfig::from_toml_str(
            r#"
            [placement]
            x = { min = -1.0e308, max = 1.0e308 }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidRange { axis: "x", .. }));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "sticker-drawer-config-{}.toml",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "catalog = [\"only.png\"]").unwrap();
        drop(file);

        let config = DrawerConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.catalog, ["only.png"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DrawerConfig::load("/nonexistent/sticker-drawer.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sticker-drawer.toml"));
    }
}
