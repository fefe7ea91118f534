//! Crate-level error type.

#[cfg(feature = "config")]
use std::path::PathBuf;

use thiserror::Error;

use crate::host::InvokeError;

#[derive(Debug, Error)]
pub enum Error {
    /// A discovery function failed while a sequence was being drained.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[cfg(feature = "config")]
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "config")]
    #[error("failed to read configuration `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "config")]
    #[error("unsupported configuration format `{}`", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
