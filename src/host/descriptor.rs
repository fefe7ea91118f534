//! # Function Descriptors
//!
//! Declared metadata for the functions a host type exposes. Validation works
//! on these descriptors instead of introspecting live values, so every check
//! (visibility, receiver, arity, return shape) is a plain predicate.
//!
//! Descriptors are usually produced by `#[host_functions]` on an `impl`
//! block, but can be written by hand:
//!
//! ```ignore
//! use tola_collect::{FunctionDescriptor, ReturnShape};
//!
//! // Ready-to-call discovery source
//! let siblings = FunctionDescriptor::discovery("siblings", || ["Cat", "Fish"]);
//!
//! // Declaration only (e.g. on an interface)
//! let decl = FunctionDescriptor::declared("siblings");
//!
//! // Anything else
//! let helper = FunctionDescriptor::new("name")
//!     .with_required_params(1)
//!     .with_returns(ReturnShape::Other("String".into()));
//! ```

use core::fmt;
use std::sync::Arc;

use crate::Ident;

/// Boxed error returned by fallible host functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type ThunkFn = dyn Fn() -> Result<Vec<Ident>, BoxError> + Send + Sync;

/// Type-erased body of a zero-argument host function.
#[derive(Clone)]
pub struct Thunk(Arc<ThunkFn>);

impl Thunk {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<Vec<Ident>, BoxError> + Send + Sync + 'static,
    {
        Thunk(Arc::new(f))
    }

    /// Wrap a function returning any iterable of identifier-like items.
    pub fn infallible<F, I>(f: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        Thunk::new(move || Ok(f().into_iter().map(Into::into).collect()))
    }

    /// Wrap a function returning `Result<iterable, E>`.
    pub fn fallible<F, I, E>(f: F) -> Self
    where
        F: Fn() -> Result<I, E> + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Ident>,
        E: Into<BoxError>,
    {
        Thunk::new(move || match f() {
            Ok(items) => Ok(items.into_iter().map(Into::into).collect()),
            Err(err) => Err(err.into()),
        })
    }

    pub fn call(&self) -> Result<Vec<Ident>, BoxError> {
        (self.0)()
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Whether a function is called on the type itself or needs an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Static,
    Instance,
}

/// Declared return type of a host function, reduced to what validation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// A materialized collection (`Vec`, array, slice, set).
    Sequence,
    /// A lazy iterator (`impl Iterator`, `Box<dyn Iterator>`).
    Iterator,
    /// `Result` around another shape.
    Fallible(Box<ReturnShape>),
    /// No value.
    Unit,
    /// Anything else, by its written type.
    Other(String),
}

impl ReturnShape {
    /// Can the result be iterated as a sequence of identifiers?
    pub fn is_iterable(&self) -> bool {
        match self {
            ReturnShape::Sequence | ReturnShape::Iterator => true,
            ReturnShape::Fallible(inner) => inner.is_iterable(),
            ReturnShape::Unit | ReturnShape::Other(_) => false,
        }
    }

    pub fn is_fallible(&self) -> bool {
        matches!(self, ReturnShape::Fallible(_))
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnShape::Sequence => f.write_str("sequence"),
            ReturnShape::Iterator => f.write_str("iterator"),
            ReturnShape::Fallible(inner) => write!(f, "fallible {}", inner),
            ReturnShape::Unit => f.write_str("()"),
            ReturnShape::Other(ty) => f.write_str(ty),
        }
    }
}

/// Metadata (and optionally the body) of one function on a host type.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    name: Ident,
    visibility: Visibility,
    receiver: Receiver,
    required_params: usize,
    returns: ReturnShape,
    thunk: Option<Thunk>,
}

impl FunctionDescriptor {
    /// A public, static, zero-parameter function returning `()`, with no body.
    pub fn new(name: impl Into<Ident>) -> Self {
        FunctionDescriptor {
            name: name.into(),
            visibility: Visibility::Public,
            receiver: Receiver::Static,
            required_params: 0,
            returns: ReturnShape::Unit,
            thunk: None,
        }
    }

    /// A well-formed discovery source with a body.
    pub fn discovery<F, I>(name: impl Into<Ident>, f: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        FunctionDescriptor::new(name)
            .with_returns(ReturnShape::Sequence)
            .with_thunk(Thunk::infallible(f))
    }

    /// A discovery source whose body may fail.
    pub fn fallible<F, I, E>(name: impl Into<Ident>, f: F) -> Self
    where
        F: Fn() -> Result<I, E> + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Ident>,
        E: Into<BoxError>,
    {
        FunctionDescriptor::new(name)
            .with_returns(ReturnShape::Fallible(Box::new(ReturnShape::Sequence)))
            .with_thunk(Thunk::fallible(f))
    }

    /// A discovery source signature without a body, as declared on an interface.
    pub fn declared(name: impl Into<Ident>) -> Self {
        FunctionDescriptor::new(name).with_returns(ReturnShape::Sequence)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn with_required_params(mut self, required_params: usize) -> Self {
        self.required_params = required_params;
        self
    }

    pub fn with_returns(mut self, returns: ReturnShape) -> Self {
        self.returns = returns;
        self
    }

    pub fn with_thunk(mut self, thunk: Thunk) -> Self {
        self.thunk = Some(thunk);
        self
    }

    pub fn private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    pub fn instance(self) -> Self {
        self.with_receiver(Receiver::Instance)
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    pub fn required_params(&self) -> usize {
        self.required_params
    }

    pub fn returns(&self) -> &ReturnShape {
        &self.returns
    }

    pub fn thunk(&self) -> Option<&Thunk> {
        self.thunk.as_ref()
    }
}

/// Types that can describe their own host functions.
///
/// Implemented by `#[host_functions]`.
pub trait HostFunctions {
    fn host_functions() -> Vec<FunctionDescriptor>;
}

/// Lookup of function descriptors, including inherited ones.
pub trait FunctionCatalog {
    /// The descriptor `owner` resolves `function` to: its own declaration
    /// first, then its supertypes depth-first in declaration order.
    fn function(&self, owner: &str, function: &str) -> Option<&FunctionDescriptor>;
}

impl<T: FunctionCatalog + ?Sized> FunctionCatalog for &T {
    fn function(&self, owner: &str, function: &str) -> Option<&FunctionDescriptor> {
        (**self).function(owner, function)
    }
}

impl<T: FunctionCatalog + ?Sized> FunctionCatalog for Arc<T> {
    fn function(&self, owner: &str, function: &str) -> Option<&FunctionDescriptor> {
        (**self).function(owner, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterable_shapes() {
        assert!(ReturnShape::Sequence.is_iterable());
        assert!(ReturnShape::Iterator.is_iterable());
        assert!(ReturnShape::Fallible(Box::new(ReturnShape::Iterator)).is_iterable());
        assert!(!ReturnShape::Fallible(Box::new(ReturnShape::Unit)).is_iterable());
        assert!(!ReturnShape::Other("String".into()).is_iterable());
        assert!(!ReturnShape::Unit.is_iterable());
    }

    #[test]
    fn test_thunk_converts_items() {
        let thunk = Thunk::infallible(|| vec!["Cat", "Fish"]);
        let out = thunk.call().unwrap();
        assert_eq!(out, vec![Ident::from("Cat"), Ident::from("Fish")]);
    }

    #[test]
    fn test_fallible_thunk_surfaces_error() {
        let thunk = Thunk::fallible(|| Err::<Vec<&str>, _>("kennel closed"));
        let err = thunk.call().unwrap_err();
        assert_eq!(err.to_string(), "kennel closed");
    }

    #[test]
    fn test_discovery_constructor() {
        let desc = FunctionDescriptor::discovery("siblings", || ["Cat"]);
        assert_eq!(desc.visibility(), Visibility::Public);
        assert_eq!(desc.receiver(), Receiver::Static);
        assert_eq!(desc.required_params(), 0);
        assert_eq!(desc.returns(), &ReturnShape::Sequence);
        assert!(desc.thunk().is_some());

        let decl = FunctionDescriptor::declared("siblings");
        assert!(decl.returns().is_iterable());
        assert!(decl.thunk().is_none());
    }
}
