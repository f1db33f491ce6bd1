use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the data directory holding exports and config:
/// 1. Explicit `--data-dir` (with tilde expansion)
/// 2. TAVLE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.tavle (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TAVLE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tavle"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tavle"));
    }

    bail!("could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Per-record-type export file overrides. Relative paths are resolved
/// against the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    #[serde(default)]
    pub offers: Option<PathBuf>,
    #[serde(default)]
    pub projects: Option<PathBuf>,
    #[serde(default)]
    pub activities: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Company applied when a list command gives no --company.
    #[serde(default)]
    pub default_company: Option<String>,
    #[serde(default)]
    pub exports: ExportConfig,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        Ok(config)
    }
}
