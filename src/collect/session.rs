//! Visited / yielded bookkeeping shared by every cursor of one collector.

use indexmap::IndexSet;

use crate::Ident;

/// The two membership sets a traversal maintains.
///
/// Both only grow while a cursor is drained and are cleared together. They
/// are independent: an identifier can be visited without being yielded, and
/// yielded by a discovery result before it is visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    visited: IndexSet<Ident>,
    yielded: IndexSet<Ident>,
}

impl Session {
    /// Identifiers that were expanded, in visiting order.
    pub fn visited(&self) -> &IndexSet<Ident> {
        &self.visited
    }

    /// Identifiers that were emitted, in emission order.
    pub fn yielded(&self) -> &IndexSet<Ident> {
        &self.yielded
    }

    pub fn is_visited(&self, ident: &str) -> bool {
        self.visited.contains(ident)
    }

    pub fn is_yielded(&self, ident: &str) -> bool {
        self.yielded.contains(ident)
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.yielded.is_empty()
    }

    pub fn clear(&mut self) {
        self.visited.clear();
        self.yielded.clear();
    }

    /// Returns `false` if `ident` was already visited.
    pub(crate) fn visit(&mut self, ident: &Ident) -> bool {
        self.visited.insert(ident.clone())
    }

    /// Returns `false` if `ident` was already yielded.
    pub(crate) fn mark_yielded(&mut self, ident: &Ident) -> bool {
        self.yielded.insert(ident.clone())
    }
}
