//! Work stack frames.
//!
//! The depth-first walk is a LIFO stack of these. Each frame is one level of
//! what would otherwise be a recursive call:
//!
//! ```text
//! Seeds    identifiers still to visit at this level
//!   Calls    discovery functions still to run for the visited identifier
//!     Results  identifiers one call returned, still to test and descend into
//!       Seeds    [result]  (the descent)
//! ```

use std::sync::Arc;
use std::vec;

use crate::Ident;

pub(crate) enum Frame {
    Seeds(vec::IntoIter<Ident>),
    Calls {
        ident: Ident,
        calls: vec::IntoIter<(Ident, Arc<[Ident]>)>,
    },
    Results {
        targets: Arc<[Ident]>,
        results: vec::IntoIter<Ident>,
    },
}

/// Read-only view of one pending frame, innermost last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending<'a> {
    /// Identifiers not yet considered at this level.
    Seeds(&'a [Ident]),
    /// Discovery functions not yet called for `ident`.
    Calls { ident: &'a Ident, remaining: usize },
    /// Results of a call not yet tested.
    Results {
        targets: &'a [Ident],
        remaining: &'a [Ident],
    },
}

impl Frame {
    pub(crate) fn seed(ident: Ident) -> Self {
        Frame::Seeds(vec![ident].into_iter())
    }

    pub(crate) fn view(&self) -> Pending<'_> {
        match self {
            Frame::Seeds(ids) => Pending::Seeds(ids.as_slice()),
            Frame::Calls { ident, calls } => Pending::Calls {
                ident,
                remaining: calls.len(),
            },
            Frame::Results { targets, results } => Pending::Results {
                targets,
                remaining: results.as_slice(),
            },
        }
    }
}
