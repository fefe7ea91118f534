//! # tola-collect
//!
//! Runtime discovery of the types that satisfy a capability list, by following
//! **discovery functions**: zero-argument, type-level functions registered on a
//! capability that each return more candidate types to examine.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Host                                                    |
//! |  - TypeOracle (exists / satisfies), Invoke, FunctionCatalog       |
//! |  - FunctionDescriptor, Universe (in-memory host)                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Configuration                                           |
//! |  - RawConfig (TOML / JSON), validate -> Config + ValidationReport |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Traversal                                               |
//! |  - Collector (Session: visited + yielded), Collect (lazy cursor)  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## The Walk
//!
//! Each seed is visited once. A visited type is emitted if it satisfies one of
//! the listed capabilities (first match wins), then expanded: every discovery
//! function registered on a capability it satisfies is called, each result
//! that satisfies one of the function's targets is emitted, and every result
//! is walked in turn. Nothing is emitted twice per session; cycles end at the
//! visited set.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_collect::prelude::*;
//!
//! struct Dog;
//!
//! #[host_functions]
//! impl Dog {
//!     pub fn siblings() -> Vec<&'static str> {
//!         vec!["Cat", "Fish"]
//!     }
//! }
//!
//! let universe = Universe::builder()
//!     .interface("Animal", |t| t.function(FunctionDescriptor::declared("siblings")))
//!     .interface("Pet", |t| t)
//!     .class("Dog", |t| t.implements(["Pet", "Animal"]).functions_of::<Dog>())
//!     .class("Cat", |t| t.implements(["Animal"]).function(FunctionDescriptor::discovery("siblings", Vec::<&str>::new)))
//!     .class("Fish", |t| t)
//!     .build();
//!
//! let raw = RawConfig::new(
//!     discovery_map! { "Animal" => { "siblings" => ["Animal"] } },
//!     ["Pet", "Animal"],
//! );
//!
//! let mut collector = Collector::new(&universe, &raw);
//! assert_eq!(collector.collect_all(["Dog"])?, ["Dog", "Cat"]);
//! ```

// Allow `::tola_collect` paths emitted by the macros to work inside the crate itself
extern crate self as tola_collect;

// Re-export indexmap for discovery_map!
pub use indexmap;

mod ident;
pub mod error;

// =============================================================================
// Layer 0: Host collaborators
// =============================================================================
pub mod host;

// =============================================================================
// Layer 1: Configuration
// =============================================================================
pub mod config;

// =============================================================================
// Layer 2: Traversal
// =============================================================================
pub mod collect;

// Syntax macros (discovery_map!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use ident::Ident;
pub use error::{Error, Result};
pub use host::{
    BoxError, FunctionCatalog, FunctionDescriptor, HostFunctions, Invoke, InvokeError, Receiver,
    ReturnShape, Thunk, TypeKind, TypeOracle, Universe, Visibility,
};
pub use config::{Config, DiscoveryMap, RawConfig, RawDiscovery, Rejection, ValidationReport};
pub use collect::{Collect, Collector, Pending, Session};

// Re-export proc-macros
pub use macros::host_functions;

/// Common items for building a host and collecting from it.
pub mod prelude {
    pub use crate::collect::{Collector, Session};
    pub use crate::config::RawConfig;
    pub use crate::host::{
        FunctionDescriptor, HostFunctions, Invoke, TypeOracle, Universe,
    };
    pub use crate::Ident;
    pub use macros::host_functions;
    // Note: discovery_map! is #[macro_export] so it's at crate root
    pub use crate::discovery_map;
}
