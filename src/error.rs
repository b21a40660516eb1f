use std::path::PathBuf;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Failures while loading or validating a [`DrawerConfig`](crate::DrawerConfig).
///
/// Drawer operations themselves are total and never fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read drawer config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed drawer config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("placement range for {axis} is invalid (min {min}, max {max})")]
    InvalidRange { axis: &'static str, min: f64, max: f64 },
}
