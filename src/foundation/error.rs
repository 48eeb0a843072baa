use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type ComedianResult<T> = Result<T, ComedianError>;

/// Error taxonomy for asset generation. Drawing itself never fails; only data checks,
/// encoding and the filesystem do.
#[derive(thiserror::Error, Debug)]
pub enum ComedianError {
    /// Invalid input data, such as a zero frame count or a malformed joke list.
    #[error("validation error: {0}")]
    Validation(String),

    /// The PNG encoder rejected a canvas.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A filesystem operation failed at `path`.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ComedianError {
    /// Build a [`ComedianError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ComedianError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ComedianError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ComedianError::Io`] value for a failure at `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
