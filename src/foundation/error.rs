/// Convenience result type used across sceneplay.
pub type SceneResult<T> = Result<T, SceneError>;

/// Fatal error taxonomy.
///
/// Invalid customization requests are not errors: they log a warning and become no-ops.
/// Everything here aborts the current run.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A pipeline phase was entered out of order, re-entered, or entered after a failure.
    #[error("phase error: {0}")]
    Phase(String),

    /// An action pair index outside the recorded list.
    #[error("index error: index {index} is out of bounds for {len} action pairs")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the action pair list at the time of the request.
        len: usize,
    },

    /// Invalid configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The rendering engine rejected a block. Blocks before `block` were already executed.
    #[error("render error in block {block}: {source}")]
    Render {
        /// Index of the failing block.
        block: usize,
        /// Error reported by the rendering engine.
        source: anyhow::Error,
    },

    /// Wrapped lower-level error from dependencies, IO or caller code.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Phase`] value.
    pub fn phase(msg: impl Into<String>) -> Self {
        Self::Phase(msg.into())
    }

    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SceneError::IndexOutOfBounds`] value.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
