//! Application directory resolution (settings file, log file)
//!
//! Priority:
//! 1. CLI `--config-dir`
//! 2. `TILEPLAY_CONFIG_DIR` environment variable
//! 3. Current directory, IF it already holds tileplay files
//! 4. Platform directory from dirs-next (`<config|data>/tileplay`)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tileplay";
const ENV_CONFIG_DIR: &str = "TILEPLAY_CONFIG_DIR";
const LOCAL_MARKERS: &[&str] = &["tileplay.json", "tileplay.log"];

/// Overrides for default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// CLI argument wins over the environment variable
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(ENV_CONFIG_DIR).ok().map(PathBuf::from));
        Self { config_dir }
    }
}

#[derive(Clone, Copy)]
enum DirKind {
    Config,
    Data,
}

/// Path of a configuration file (settings)
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    app_dir(DirKind::Config, config).join(name)
}

/// Path of a data file (logs)
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    app_dir(DirKind::Data, config).join(name)
}

/// Create config and data directories if missing
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    for kind in [DirKind::Config, DirKind::Data] {
        let dir = app_dir(kind, config);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }
    Ok(())
}

fn has_local_files(dir: &Path) -> bool {
    LOCAL_MARKERS.iter().any(|f| dir.join(f).exists())
}

fn app_dir(kind: DirKind, config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Ok(current_dir) = std::env::current_dir() {
        if has_local_files(&current_dir) {
            return current_dir;
        }
    }

    let platform = match kind {
        DirKind::Config => dirs_next::config_dir(),
        DirKind::Data => dirs_next::data_dir(),
    };
    platform
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
