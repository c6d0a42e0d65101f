use std::env;

use encoding::InputBase;

/// Environment variable supplying the default input base.
pub const BASE_ENV: &str = "SHASTEP_BASE";

/// Environment variable supplying the default playback interval in milliseconds.
pub const INTERVAL_ENV: &str = "SHASTEP_INTERVAL_MS";

/// Reads the default input base from [`BASE_ENV`].
///
/// An unset or blank variable yields `Ok(None)`; anything else must name a
/// base.
pub(crate) fn env_base_default() -> Result<Option<InputBase>, String> {
    let Some(value) = env::var_os(BASE_ENV) else {
        return Ok(None);
    };

    let normalized = value.to_string_lossy();
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<InputBase>()
        .map(Some)
        .map_err(|error| format!("invalid {BASE_ENV} value '{trimmed}': {error}"))
}

/// Reads the default playback interval from [`INTERVAL_ENV`].
pub(crate) fn env_interval_default() -> Result<Option<u64>, String> {
    let Some(value) = env::var_os(INTERVAL_ENV) else {
        return Ok(None);
    };

    let normalized = value.to_string_lossy();
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| format!("invalid {INTERVAL_ENV} value '{trimmed}': expected milliseconds"))
}
