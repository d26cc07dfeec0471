use crate::error::{MatchError, Result};
use crate::types::config::MatchConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repomatch.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repomatch/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repomatch/config.toml";

/// Loads the merged configuration for `root`.
///
/// Layers apply in order: global file under `$HOME`, then the project file
/// (`explicit` when given, else `repomatch.toml` in `root`), then the local
/// override. Missing layers are skipped; with no layers at all the defaults
/// are returned.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<MatchConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<MatchConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(MatchError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let project = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    merge_file_if_exists(&mut merged, &project)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: MatchConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MatchError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::debug!(weights = ?cfg.weights(), "configuration loaded");
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MatchError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
