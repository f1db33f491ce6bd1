pub mod activity_feed;
pub mod offer_list;
pub mod offer_summary;
pub mod project_list;

use crate::config::Config;
use anyhow::{Result, bail};
use tavle_types::CompanyId;

/// Sentinel accepted on the command line for "no constraint".
const ALL: &str = "all";

/// Turn a --company selection into a filter value, falling back to the
/// configured default company when nothing was given.
pub(crate) fn resolve_company(
    selection: Option<String>,
    config: &Config,
) -> Result<Option<CompanyId>> {
    let selection = selection.or_else(|| config.default_company.clone());
    match selection.as_deref() {
        None => Ok(None),
        Some(key) if key == ALL => Ok(None),
        Some(key) => match CompanyId::from_key(key) {
            Some(company) => Ok(Some(company)),
            None => {
                let known: Vec<&str> = CompanyId::ALL.iter().map(|c| c.as_key()).collect();
                bail!("unknown company '{}' (expected one of: {})", key, known.join(", "))
            }
        },
    }
}

/// Validate a --phase selection against the known phase keys.
pub(crate) fn resolve_phase(selection: Option<String>, known: &[&str]) -> Result<Option<String>> {
    match selection.as_deref() {
        None => Ok(None),
        Some(key) if key == ALL => Ok(None),
        Some(key) if known.contains(&key) => Ok(Some(key.to_string())),
        Some(key) => bail!("unknown phase '{}' (expected one of: {})", key, known.join(", ")),
    }
}
