use crate::config::ExportConfig;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tavle_types::{
    ActivityRecord, Offer, Project, parse_activities, parse_offers, parse_projects,
};

/// Reads backend exports from the data directory. Resolution per record
/// type: explicit --input, then the configured override, then the default
/// file name under the data dir.
pub struct RecordStore {
    data_dir: PathBuf,
    exports: ExportConfig,
}

impl RecordStore {
    pub fn new(data_dir: PathBuf, exports: ExportConfig) -> Self {
        Self { data_dir, exports }
    }

    pub fn load_offers(&self, input: Option<&Path>) -> Result<Vec<Offer>> {
        let path = self.resolve(input, self.exports.offers.as_ref(), "offers.json");
        let bytes = read_export(&path)?;
        parse_offers(&bytes).with_context(|| format!("invalid offer export: {}", path.display()))
    }

    pub fn load_projects(&self, input: Option<&Path>) -> Result<Vec<Project>> {
        let path = self.resolve(input, self.exports.projects.as_ref(), "projects.json");
        let bytes = read_export(&path)?;
        parse_projects(&bytes)
            .with_context(|| format!("invalid project export: {}", path.display()))
    }

    pub fn load_activities(&self, input: Option<&Path>) -> Result<Vec<ActivityRecord>> {
        let path = self.resolve(input, self.exports.activities.as_ref(), "activities.json");
        let bytes = read_export(&path)?;
        parse_activities(&bytes)
            .with_context(|| format!("invalid activity export: {}", path.display()))
    }

    fn resolve(
        &self,
        input: Option<&Path>,
        configured: Option<&PathBuf>,
        default_name: &str,
    ) -> PathBuf {
        if let Some(path) = input {
            return path.to_path_buf();
        }
        match configured {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.data_dir.join(path),
            None => self.data_dir.join(default_name),
        }
    }
}

fn read_export(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!(
            "no export found at {} (fetch one from the backend or pass --input)",
            path.display()
        );
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
