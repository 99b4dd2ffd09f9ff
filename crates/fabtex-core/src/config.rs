use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per download (including the first).
    pub max_attempts: u32,
    /// Backoff factor: delay before attempt N+1 is `backoff_base ^ N` seconds.
    pub backoff_base: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: 1.5,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff_base: self.backoff_base,
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/fabtex/config.toml`.
///
/// The defaults reproduce the values that used to be hardcoded in the
/// original tooling; installations that relied on them get identical
/// on-disk paths and asset names without a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabtexConfig {
    /// Base URL of the remote image service.
    pub image_host: String,
    /// Manufacturer/vendor namespace segment under the content roots.
    pub vendor: String,
    /// Texture tree location relative to the project root.
    pub texture_subdir: String,
    /// Material asset tree location relative to the project root.
    pub material_subdir: String,
    /// Logical package root in the content tool.
    pub package_root: String,
    /// Object path of the parent material every generated instance derives from.
    pub parent_material: String,
    /// Directory name that marks the scripts folder when resolving the project root.
    pub scripts_dir_name: String,
    /// Conventional catalog filenames probed during discovery, in order.
    pub catalog_filenames: Vec<String>,
    /// Extra absolute catalog paths to probe before the conventional ones.
    #[serde(default)]
    pub catalog_candidates: Vec<PathBuf>,
    /// Per-attempt network timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for FabtexConfig {
    fn default() -> Self {
        Self {
            image_host: "https://images.mayerfabrics.com".to_string(),
            vendor: "MayerFabrics".to_string(),
            texture_subdir: "Content/Texture".to_string(),
            material_subdir: "Content/Materials".to_string(),
            package_root: "/Game/Materials".to_string(),
            parent_material: "/Game/Materials/MI_Sample.MI_Sample".to_string(),
            scripts_dir_name: "Python".to_string(),
            catalog_filenames: vec![
                "collections.json".to_string(),
                "okcollections.json".to_string(),
            ],
            catalog_candidates: Vec::new(),
            request_timeout_secs: 20,
            retry: None,
        }
    }
}

impl FabtexConfig {
    /// Effective retry policy: the `[retry]` section if present, else defaults.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .clone()
            .unwrap_or_default()
            .to_policy()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fabtex")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FabtexConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FabtexConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FabtexConfig = toml::from_str(&data)?;
    Ok(cfg)
}
