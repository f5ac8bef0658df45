//! Config file upgrades: detect keys added in newer versions and fill them in
//! with their defaults, leaving every value the user already set untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_yaml(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

fn defaults_yaml() -> AppResult<Value> {
    serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))
}

/// Walk `defaults` and collect the dotted paths absent from `current`.
/// When `fill` is set the missing entries are copied into `current`.
fn merge_missing(current: &mut Mapping, defaults: &Mapping, prefix: &str, fill: bool) -> Vec<String> {
    let mut missing = Vec::new();

    for (key, default_val) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        if !current.contains_key(key) {
            missing.push(name);
            if fill {
                current.insert(key.clone(), default_val.clone());
            }
            continue;
        }

        if let (Some(Value::Mapping(sub)), Value::Mapping(sub_defaults)) =
            (current.get_mut(key), default_val)
        {
            missing.extend(merge_missing(sub, sub_defaults, &name, fill));
        }
    }

    missing
}

fn as_mapping(value: Value, path: &Path) -> AppResult<Mapping> {
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

/// Keys present in the default configuration but missing from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = as_mapping(read_yaml(path)?, path)?;
    let defaults = as_mapping(defaults_yaml()?, path)?;

    Ok(merge_missing(&mut current, &defaults, "", false))
}

/// Add every missing key with its default value and rewrite the file.
/// Returns the keys that were added (empty → file untouched).
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = as_mapping(read_yaml(path)?, path)?;
    let defaults = as_mapping(defaults_yaml()?, path)?;

    let added = merge_missing(&mut current, &defaults, "", true);

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
