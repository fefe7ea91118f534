//! Type existence and compatibility queries against the host type system.

use std::sync::Arc;

/// What a name resolves to in the host universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A concrete type. Only classes are walked by the collector.
    Class,
    /// An abstract capability. Usable as a tag, never walked itself.
    Interface,
}

/// The host's type-compatibility oracle.
///
/// Implementations must be pure for the lifetime of a collector: the same
/// inputs always give the same answer. Names that do not resolve answer
/// `None` / `false`, never an error.
pub trait TypeOracle {
    /// Resolve `ident` to its kind, if it names a type at all.
    fn kind(&self, ident: &str) -> Option<TypeKind>;

    /// Does `ident` satisfy the capability `tag`?
    ///
    /// Reflexive: every type satisfies itself.
    fn satisfies(&self, ident: &str, tag: &str) -> bool;

    /// Does `ident` name a concrete type that can be walked?
    fn exists(&self, ident: &str) -> bool {
        matches!(self.kind(ident), Some(TypeKind::Class))
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn kind(&self, ident: &str) -> Option<TypeKind> {
        (**self).kind(ident)
    }

    fn satisfies(&self, ident: &str, tag: &str) -> bool {
        (**self).satisfies(ident, tag)
    }

    fn exists(&self, ident: &str) -> bool {
        (**self).exists(ident)
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for Arc<T> {
    fn kind(&self, ident: &str) -> Option<TypeKind> {
        (**self).kind(ident)
    }

    fn satisfies(&self, ident: &str, tag: &str) -> bool {
        (**self).satisfies(ident, tag)
    }

    fn exists(&self, ident: &str) -> bool {
        (**self).exists(ident)
    }
}
