//! Invocation of discovery functions on host types.

use std::sync::Arc;

use thiserror::Error;

use super::descriptor::BoxError;
use crate::Ident;

/// Failure raised while calling a discovery function.
///
/// The collector never recovers from these: they are handed to whoever is
/// pulling the sequence.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("unknown type `{0}`")]
    UnknownType(Ident),

    #[error("type `{ident}` has no function `{function}`")]
    UnknownFunction { ident: Ident, function: Ident },

    #[error("function `{ident}::{function}` has no invocable body")]
    NotInvocable { ident: Ident, function: Ident },

    #[error("discovery function `{ident}::{function}` failed: {source}")]
    Failed {
        ident: Ident,
        function: Ident,
        #[source]
        source: BoxError,
    },
}

/// Calls a named zero-argument, type-level function on a host type.
pub trait Invoke {
    /// Call `function` as resolved on `ident` and return the identifiers it
    /// produced, in order.
    fn invoke(&self, ident: &str, function: &str) -> Result<Vec<Ident>, InvokeError>;
}

impl<T: Invoke + ?Sized> Invoke for &T {
    fn invoke(&self, ident: &str, function: &str) -> Result<Vec<Ident>, InvokeError> {
        (**self).invoke(ident, function)
    }
}

impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    fn invoke(&self, ident: &str, function: &str) -> Result<Vec<Ident>, InvokeError> {
        (**self).invoke(ident, function)
    }
}
