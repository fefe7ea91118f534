//! # Layer 1: Configuration
//!
//! - [`RawConfig`]: what the caller wrote (optionally loaded from TOML / JSON)
//! - [`validate`]: the one-shot sanitizing pass
//! - [`Config`]: what the collector runs on

pub mod map;
pub mod raw;
pub mod validate;

pub use map::{DiscoveryMap, Functions};
pub use raw::{RawConfig, RawDiscovery};
pub use validate::{descriptor_rejection, is_discovery_source, validate, Rejection, ValidationReport};

use crate::Ident;

/// Validated configuration: every name resolves, every function is a
/// well-formed discovery source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) capabilities: Vec<Ident>,
    pub(crate) discovery: DiscoveryMap,
    pub(crate) auto_reset: bool,
}

impl Config {
    /// Capability list, highest priority first.
    pub fn capabilities(&self) -> &[Ident] {
        &self.capabilities
    }

    pub fn discovery(&self) -> &DiscoveryMap {
        &self.discovery
    }

    pub fn auto_reset(&self) -> bool {
        self.auto_reset
    }
}
