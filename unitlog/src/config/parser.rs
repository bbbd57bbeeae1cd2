//! INI parsing logic for converting `Ini` → `LogConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigError;
use super::settings::LogConfig;
use crate::sink::Sink;

const SECTION: &str = "logging";

/// Parse an `Ini` object into a `LogConfig`.
///
/// Starts from `LogConfig::default()` and overlays any values found in the
/// `[logging]` section. Level names are not validated here.
pub(super) fn parse_ini(ini: &Ini) -> Result<LogConfig, ConfigError> {
    let mut config = LogConfig::default();

    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(config);
    };

    if let Some(v) = section.get("level") {
        let v = v.trim();
        if !v.is_empty() {
            config.min_level = Some(v.to_string());
        }
    }
    if let Some(v) = section.get("levels") {
        config.levels = parse_list(v);
    }
    if let Some(v) = section.get("format") {
        config.format = v
            .parse()
            .map_err(|_| invalid("format", v, "must be one of: plain, json, console"))?;
    }
    if let Some(v) = section.get("human_friendly") {
        config.human_friendly = parse_bool("human_friendly", v)?;
    }
    if let Some(v) = section.get("timestamps") {
        config.timestamps = parse_bool("timestamps", v)?;
    }
    if let Some(v) = section.get("ansi") {
        config.ansi = Some(parse_bool("ansi", v)?);
    }
    if let Some(v) = section.get("file") {
        let v = v.trim();
        if !v.is_empty() {
            config.sink = Sink::File(PathBuf::from(v));
        }
    }

    Ok(config)
}

/// Split a comma separated list, dropping blanks. `None` when nothing is left.
pub(super) fn parse_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

pub(super) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "must be true/false, yes/no, 1/0, or on/off")),
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: SECTION.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
