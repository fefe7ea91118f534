//! Validated discovery map.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::Ident;

/// function name -> target capabilities.
pub type Functions = IndexMap<Ident, Arc<[Ident]>>;

/// capability -> function name -> target capabilities.
///
/// Insertion order is kept at both levels; it decides the order in which an
/// identifier's discovery functions run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryMap {
    entries: IndexMap<Ident, Functions>,
}

impl DiscoveryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under `capability`, replacing a previous entry of
    /// the same name but keeping its position.
    pub fn insert<I>(&mut self, capability: impl Into<Ident>, function: impl Into<Ident>, targets: I)
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        let targets: Arc<[Ident]> = targets.into_iter().map(Into::into).collect();
        self.entries
            .entry(capability.into())
            .or_default()
            .insert(function.into(), targets);
    }

    pub(crate) fn insert_functions(&mut self, capability: Ident, functions: Functions) {
        self.entries.insert(capability, functions);
    }

    pub fn functions(&self, capability: &str) -> Option<&Functions> {
        self.entries.get(capability)
    }

    pub fn targets(&self, capability: &str, function: &str) -> Option<&[Ident]> {
        self.functions(capability)
            .and_then(|functions| functions.get(function))
            .map(|targets| &**targets)
    }

    pub fn capabilities(&self) -> impl Iterator<Item = &Ident> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Functions)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
