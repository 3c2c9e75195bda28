use std::path::Path;

use crate::foundation::core::DEFAULT_RUNTIME;
use crate::foundation::error::{SceneError, SceneResult};

/// Scene-wide execution settings.
///
/// Every field has a default, so an empty JSON object (`{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Duration (seconds) of a tunable block whose anchor has no explicit runtime.
    pub default_runtime: f64,
    /// Append an implicit wait before grouping so the final state holds on screen.
    pub trailing_wait: bool,
    /// Runtime of the trailing wait; `None` uses `default_runtime`.
    pub trailing_wait_runtime: Option<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_runtime: DEFAULT_RUNTIME,
            trailing_wait: true,
            trailing_wait_runtime: None,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| SceneError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            SceneError::Other(anyhow::Error::new(e).context(format!(
                "read scene config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Check numeric ranges.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.default_runtime.is_finite() || self.default_runtime <= 0.0 {
            return Err(SceneError::validation(
                "default_runtime must be finite and > 0",
            ));
        }
        if let Some(r) = self.trailing_wait_runtime
            && (!r.is_finite() || r <= 0.0)
        {
            return Err(SceneError::validation(
                "trailing_wait_runtime must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub(crate) fn effective_trailing_wait(&self) -> f64 {
        self.trailing_wait_runtime.unwrap_or(self.default_runtime)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
