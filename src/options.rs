use anyhow::{Context, Result};

/// Extract an explicit `featured` override from the free-text `options` field.
///
/// The field is a comma-separated list of bare flags and `key=value` pairs.
/// The first mention of `featured` wins and scanning stops there; a bare
/// `featured` flag means `true`. Returns `None` when the field never mentions
/// it. A value that is not a boolean is an error for the caller to report;
/// it must not fail the entry.
pub fn featured_override(options: &str) -> Result<Option<bool>> {
    for option in options.split(',') {
        if let Some((key, value)) = option.split_once('=') {
            if key.trim() == "featured" {
                let value = value.trim();
                let parsed = value
                    .parse::<bool>()
                    .with_context(|| format!("invalid boolean `{value}`"))?;
                return Ok(Some(parsed));
            }
        } else if option.trim() == "featured" {
            return Ok(Some(true));
        }
    }
    Ok(None)
}
