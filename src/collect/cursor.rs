//! # The Lazy Walk
//!
//! [`Collect`] is the cursor returned by [`Collector::collect`]. Every call
//! to `next` runs the walk until the next emission and suspends there.
//!
//! For each identifier taken from a `Seeds` frame (skipping unknown and
//! already visited ones):
//!
//! 1. mark it visited
//! 2. **direct match**: emit it for the first capability in the list it
//!    satisfies, unless it was already yielded
//! 3. **expansion**: for every discovery capability it satisfies, call each
//!    registered function; for every result not yet yielded, emit it if it
//!    satisfies any of the function's targets, then descend into it
//!
//! Emission order is part of the contract: depth-first, seed order, then
//! discovery map order, then result order.
//!
//! [`Collector::collect`]: super::Collector::collect

use core::iter::FusedIterator;

use tracing::{debug, trace};

use super::frame::{Frame, Pending};
use super::session::Session;
use crate::config::Config;
use crate::error::Result;
use crate::host::{Invoke, TypeOracle};
use crate::Ident;

/// Lazy sequence of collected identifiers.
///
/// Holds the collector mutably, so no second walk can run on the same
/// collector until this one is dropped. Dropping it early leaves the
/// session as it is at that point.
pub struct Collect<'a, H> {
    host: &'a H,
    config: &'a Config,
    session: &'a mut Session,
    stack: Vec<Frame>,
}

impl<'a, H> Collect<'a, H>
where
    H: TypeOracle + Invoke,
{
    pub(crate) fn new(host: &'a H, config: &'a Config, session: &'a mut Session, seeds: Vec<Ident>) -> Self {
        Collect {
            host,
            config,
            session,
            stack: vec![Frame::Seeds(seeds.into_iter())],
        }
    }

    /// Work still queued, outermost frame first.
    pub fn pending(&self) -> impl Iterator<Item = Pending<'_>> {
        self.stack.iter().map(Frame::view)
    }

    /// Current descent depth; `0` once the walk is finished.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Visited / yielded state as of the last emission.
    pub fn session(&self) -> &Session {
        &*self.session
    }

    fn direct_match(&self, ident: &Ident) -> Option<Ident> {
        if self.session.is_yielded(ident) {
            return None;
        }
        self.config
            .capabilities
            .iter()
            .find(|capability| self.host.satisfies(ident, capability))
            .cloned()
    }

    fn plan_calls(&self, ident: &Ident) -> Frame {
        let calls: Vec<_> = self
            .config
            .discovery
            .iter()
            .filter(|(capability, _)| self.host.satisfies(ident, capability))
            .flat_map(|(_, functions)| functions.iter())
            .map(|(function, targets)| (function.clone(), targets.clone()))
            .collect();

        Frame::Calls {
            ident: ident.clone(),
            calls: calls.into_iter(),
        }
    }
}

impl<H> Iterator for Collect<'_, H>
where
    H: TypeOracle + Invoke,
{
    type Item = Result<Ident>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            match frame {
                Frame::Seeds(ids) => {
                    let Some(ident) = ids.next() else {
                        self.stack.pop();
                        continue;
                    };
                    if !self.host.exists(&ident) {
                        trace!(%ident, "skipping unresolvable identifier");
                        continue;
                    }
                    if !self.session.visit(&ident) {
                        trace!(%ident, "already visited");
                        continue;
                    }

                    let matched = self.direct_match(&ident);
                    let calls = self.plan_calls(&ident);
                    self.stack.push(calls);

                    if let Some(capability) = matched {
                        self.session.mark_yielded(&ident);
                        trace!(%ident, %capability, "direct match");
                        return Some(Ok(ident));
                    }
                }

                Frame::Calls { ident, calls } => {
                    let Some((function, targets)) = calls.next() else {
                        self.stack.pop();
                        continue;
                    };
                    let ident = ident.clone();

                    debug!(%ident, %function, "calling discovery function");
                    match self.host.invoke(&ident, &function) {
                        Ok(results) => self.stack.push(Frame::Results {
                            targets,
                            results: results.into_iter(),
                        }),
                        Err(err) => {
                            self.stack.clear();
                            return Some(Err(err.into()));
                        }
                    }
                }

                Frame::Results { targets, results } => {
                    let Some(result) = results.next() else {
                        self.stack.pop();
                        continue;
                    };
                    if self.session.is_yielded(&result) {
                        trace!(%result, "already yielded, not descending");
                        continue;
                    }

                    let matched = targets
                        .iter()
                        .any(|target| self.host.satisfies(&result, target));
                    self.stack.push(Frame::seed(result.clone()));

                    if matched && self.session.mark_yielded(&result) {
                        trace!(%result, "discovered");
                        return Some(Ok(result));
                    }
                }
            }
        }
    }
}

impl<H> FusedIterator for Collect<'_, H> where H: TypeOracle + Invoke {}
