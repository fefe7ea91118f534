//! # Universe
//!
//! In-memory host type system: named classes and interfaces, their declared
//! supertypes, and the functions they carry.
//!
//! ```ignore
//! use tola_collect::{FunctionDescriptor, Universe};
//!
//! let universe = Universe::builder()
//!     .interface("Animal", |t| t.function(FunctionDescriptor::declared("siblings")))
//!     .interface("Pet", |t| t)
//!     .class("Dog", |t| {
//!         t.implements(["Pet", "Animal"])
//!             .function(FunctionDescriptor::discovery("siblings", || ["Cat", "Fish"]))
//!     })
//!     .build();
//!
//! assert!(universe.satisfies("Dog", "Pet"));
//! ```
//!
//! `satisfies` follows the full supertype closure (reflexive, transitive).
//! Function lookup walks the type itself first, then its direct supertypes
//! depth-first in the order they were declared.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use super::descriptor::{FunctionCatalog, FunctionDescriptor, HostFunctions};
use super::invoke::{Invoke, InvokeError};
use super::oracle::{TypeKind, TypeOracle};
use crate::Ident;

/// Declaration of one type, filled in by the closures passed to
/// [`UniverseBuilder::class`] and [`UniverseBuilder::interface`].
#[derive(Debug)]
pub struct TypeDef {
    kind: TypeKind,
    supertypes: Vec<Ident>,
    functions: IndexMap<Ident, FunctionDescriptor>,
}

impl TypeDef {
    fn new(kind: TypeKind) -> Self {
        TypeDef {
            kind,
            supertypes: Vec::new(),
            functions: IndexMap::new(),
        }
    }

    /// Declare parent types.
    pub fn extends<I>(mut self, parents: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        self.supertypes.extend(parents.into_iter().map(Into::into));
        self
    }

    /// Declare implemented interfaces. Same effect as [`TypeDef::extends`].
    pub fn implements<I>(self, interfaces: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        self.extends(interfaces)
    }

    /// Attach a function. A later function with the same name replaces it.
    pub fn function(mut self, descriptor: FunctionDescriptor) -> Self {
        self.functions.insert(descriptor.name().clone(), descriptor);
        self
    }

    /// Attach every function described by `T`.
    pub fn functions_of<T: HostFunctions>(self) -> Self {
        T::host_functions()
            .into_iter()
            .fold(self, TypeDef::function)
    }
}

#[derive(Debug, Default)]
pub struct UniverseBuilder {
    defs: IndexMap<Ident, TypeDef>,
}

impl UniverseBuilder {
    pub fn class<F>(self, name: impl Into<Ident>, declare: F) -> Self
    where
        F: FnOnce(TypeDef) -> TypeDef,
    {
        self.declare(name.into(), declare(TypeDef::new(TypeKind::Class)))
    }

    pub fn interface<F>(self, name: impl Into<Ident>, declare: F) -> Self
    where
        F: FnOnce(TypeDef) -> TypeDef,
    {
        self.declare(name.into(), declare(TypeDef::new(TypeKind::Interface)))
    }

    fn declare(mut self, name: Ident, def: TypeDef) -> Self {
        if self.defs.contains_key(&name) {
            warn!(ident = %name, "type redeclared, keeping the latest declaration");
        }
        self.defs.insert(name, def);
        self
    }

    pub fn build(self) -> Universe {
        let mut types = IndexMap::with_capacity(self.defs.len());

        for (name, def) in &self.defs {
            for parent in &def.supertypes {
                if !self.defs.contains_key(parent) {
                    warn!(ident = %name, supertype = %parent, "ignoring unknown supertype");
                }
            }
        }

        for (name, def) in &self.defs {
            let closure = supertype_closure(name, &self.defs);
            types.insert(
                name.clone(),
                TypeEntry {
                    kind: def.kind,
                    supertypes: def
                        .supertypes
                        .iter()
                        .filter(|parent| self.defs.contains_key(*parent))
                        .cloned()
                        .collect(),
                    closure,
                    functions: IndexMap::new(),
                },
            );
        }

        for (name, def) in self.defs {
            if let Some(entry) = types.get_mut(&name) {
                entry.functions = def.functions;
            }
        }

        Universe { types }
    }
}

// Reflexive, transitive set of known supertypes. Cycles in the declarations
// are cut by the visited set.
fn supertype_closure(name: &Ident, defs: &IndexMap<Ident, TypeDef>) -> IndexSet<Ident> {
    let mut closure = IndexSet::new();
    let mut stack = vec![name.clone()];

    while let Some(current) = stack.pop() {
        let Some(def) = defs.get(&current) else { continue };
        if !closure.insert(current) {
            continue;
        }
        stack.extend(def.supertypes.iter().rev().cloned());
    }

    closure
}

#[derive(Debug)]
struct TypeEntry {
    kind: TypeKind,
    supertypes: Vec<Ident>,
    closure: IndexSet<Ident>,
    functions: IndexMap<Ident, FunctionDescriptor>,
}

/// A fully resolved, immutable host type system.
#[derive(Debug, Default)]
pub struct Universe {
    types: IndexMap<Ident, TypeEntry>,
}

impl Universe {
    pub fn builder() -> UniverseBuilder {
        UniverseBuilder::default()
    }

    /// Every declared type name, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &Ident> {
        self.types.keys()
    }

    /// The reflexive, transitive supertypes of `ident`.
    pub fn supertypes(&self, ident: &str) -> Option<&IndexSet<Ident>> {
        self.types.get(ident).map(|entry| &entry.closure)
    }

    fn resolve(&self, owner: &str, function: &str) -> Option<&FunctionDescriptor> {
        let mut seen = IndexSet::new();
        let mut stack: Vec<&str> = vec![owner];

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            let Some(entry) = self.types.get(current) else { continue };
            if let Some(descriptor) = entry.functions.get(function) {
                return Some(descriptor);
            }
            stack.extend(entry.supertypes.iter().rev().map(Ident::as_str));
        }

        None
    }
}

impl TypeOracle for Universe {
    fn kind(&self, ident: &str) -> Option<TypeKind> {
        self.types.get(ident).map(|entry| entry.kind)
    }

    fn satisfies(&self, ident: &str, tag: &str) -> bool {
        self.types
            .get(ident)
            .is_some_and(|entry| entry.closure.contains(tag))
    }
}

impl FunctionCatalog for Universe {
    fn function(&self, owner: &str, function: &str) -> Option<&FunctionDescriptor> {
        self.resolve(owner, function)
    }
}

impl Invoke for Universe {
    fn invoke(&self, ident: &str, function: &str) -> Result<Vec<Ident>, InvokeError> {
        if !self.types.contains_key(ident) {
            return Err(InvokeError::UnknownType(Ident::from(ident)));
        }

        let descriptor = self
            .resolve(ident, function)
            .ok_or_else(|| InvokeError::UnknownFunction {
                ident: Ident::from(ident),
                function: Ident::from(function),
            })?;

        let thunk = descriptor.thunk().ok_or_else(|| InvokeError::NotInvocable {
            ident: Ident::from(ident),
            function: Ident::from(function),
        })?;

        thunk.call().map_err(|source| InvokeError::Failed {
            ident: Ident::from(ident),
            function: Ident::from(function),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> Universe {
        Universe::builder()
            .interface("Animal", |t| t.function(FunctionDescriptor::declared("siblings")))
            .interface("Pet", |t| t.extends(["Animal"]))
            .class("Dog", |t| {
                t.implements(["Pet"])
                    .function(FunctionDescriptor::discovery("siblings", || ["Cat"]))
            })
            .class("Puppy", |t| t.extends(["Dog"]))
            .class("Rock", |t| t.implements(["Mineral"]))
            .build()
    }

    #[test]
    fn test_satisfies_is_reflexive_and_transitive() {
        let universe = zoo();
        assert!(universe.satisfies("Dog", "Dog"));
        assert!(universe.satisfies("Dog", "Pet"));
        assert!(universe.satisfies("Dog", "Animal"));
        assert!(universe.satisfies("Puppy", "Animal"));
        assert!(!universe.satisfies("Animal", "Dog"));
        assert!(!universe.satisfies("Rock", "Mineral"));
        assert!(!universe.satisfies("Nothing", "Nothing"));
    }

    #[test]
    fn test_only_classes_exist_as_walkable() {
        let universe = zoo();
        assert!(universe.exists("Dog"));
        assert!(!universe.exists("Animal"));
        assert_eq!(universe.kind("Animal"), Some(TypeKind::Interface));
        assert_eq!(universe.kind("Mineral"), None);
    }

    #[test]
    fn test_inherited_function_resolution() {
        let universe = zoo();
        assert_eq!(universe.invoke("Puppy", "siblings").unwrap(), vec![Ident::from("Cat")]);
        assert!(universe.function("Pet", "siblings").is_some());
    }

    #[test]
    fn test_invoke_errors() {
        let universe = zoo();
        assert!(matches!(
            universe.invoke("Unicorn", "siblings"),
            Err(InvokeError::UnknownType(_))
        ));
        assert!(matches!(
            universe.invoke("Dog", "parents"),
            Err(InvokeError::UnknownFunction { .. })
        ));
        assert!(matches!(
            universe.invoke("Rock", "siblings"),
            Err(InvokeError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_cyclic_declarations_terminate() {
        let universe = Universe::builder()
            .interface("A", |t| t.extends(["B"]))
            .interface("B", |t| t.extends(["A"]))
            .build();
        assert!(universe.satisfies("A", "B"));
        assert!(universe.satisfies("B", "A"));
        assert!(universe.function("A", "missing").is_none());
    }
}
