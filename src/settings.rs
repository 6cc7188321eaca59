//! Run settings: defaults, JSON settings file, environment and flag overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use fill_engine::FillConfig;
use serde::Deserialize;

/// On-disk settings file; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub passes: Option<u32>,
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

/// Resolve the effective fill configuration.
///
/// Precedence, lowest to highest: built-in defaults, settings file,
/// `INSTAFILL_PASSES` / `INSTAFILL_INTERVAL_MS` environment variables,
/// command-line flags.
pub fn load_config(
    file: Option<&Path>,
    passes_flag: Option<u32>,
    interval_flag: Option<Duration>,
) -> Result<FillConfig> {
    let mut config = FillConfig::default();

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: SettingsFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        if let Some(passes) = settings.passes {
            config.max_passes = passes;
        }
        if let Some(ms) = settings.interval_ms {
            config.pass_interval = Duration::from_millis(ms);
        }
    }

    if let Ok(raw) = std::env::var("INSTAFILL_PASSES") {
        if let Ok(passes) = raw.parse() {
            config.max_passes = passes;
        }
    }
    if let Ok(raw) = std::env::var("INSTAFILL_INTERVAL_MS") {
        if let Ok(ms) = raw.parse() {
            config.pass_interval = Duration::from_millis(ms);
        }
    }

    if let Some(passes) = passes_flag {
        config.max_passes = passes;
    }
    if let Some(interval) = interval_flag {
        config.pass_interval = interval;
    }

    Ok(config)
}
