//! # Layer 0: Host Collaborators
//!
//! Everything the collector needs to know about the host type system, behind
//! three small traits:
//!
//! - [`TypeOracle`]: does a name resolve, and does it satisfy a capability?
//! - [`Invoke`]: call a zero-argument type-level function.
//! - [`FunctionCatalog`]: look up a function's [`FunctionDescriptor`].
//!
//! [`Universe`] implements all three in memory.

pub mod descriptor;
pub mod invoke;
pub mod oracle;
pub mod universe;

pub use descriptor::{
    BoxError, FunctionCatalog, FunctionDescriptor, HostFunctions, Receiver, ReturnShape, Thunk,
    Visibility,
};
pub use invoke::{Invoke, InvokeError};
pub use oracle::{TypeKind, TypeOracle};
pub use universe::{TypeDef, Universe, UniverseBuilder};
