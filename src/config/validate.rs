//! # Configuration Validation
//!
//! One pass, at construction, that turns a [`RawConfig`] into a [`Config`]:
//!
//! - capability list: keep classes and interfaces, first occurrence wins
//! - discovery keys: keep interfaces only
//! - functions: resolved on the capability, must pass [`is_discovery_source`]
//! - targets: keep classes and interfaces, drop entries left without any
//! - capabilities left without functions are dropped
//!
//! Nothing here fails. Every dropped entry becomes a [`Rejection`] in the
//! [`ValidationReport`] and a `debug` event.

use indexmap::IndexSet;
use thiserror::Error;
use tracing::debug;

use super::map::{DiscoveryMap, Functions};
use super::raw::RawConfig;
use super::Config;
use crate::host::{FunctionCatalog, FunctionDescriptor, Receiver, ReturnShape, TypeKind, TypeOracle, Visibility};
use crate::Ident;

/// Why a configuration entry was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("capability `{0}` does not name a type")]
    UnknownCapability(Ident),

    #[error("capability `{0}` is listed more than once")]
    DuplicateCapability(Ident),

    #[error("discovery key `{0}` is not an interface")]
    NotAnInterface(Ident),

    #[error("`{capability}` has no function `{function}`")]
    UnknownFunction { capability: Ident, function: Ident },

    #[error("`{capability}::{function}` is not public")]
    NotPublic { capability: Ident, function: Ident },

    #[error("`{capability}::{function}` needs an instance")]
    NotStatic { capability: Ident, function: Ident },

    #[error("`{capability}::{function}` requires {required} argument(s)")]
    RequiresArguments {
        capability: Ident,
        function: Ident,
        required: usize,
    },

    #[error("`{capability}::{function}` returns {returns}, not an iterable")]
    NotIterable {
        capability: Ident,
        function: Ident,
        returns: ReturnShape,
    },

    #[error("target `{target}` of `{capability}::{function}` does not name a type")]
    UnknownTarget {
        capability: Ident,
        function: Ident,
        target: Ident,
    },

    #[error("`{capability}::{function}` has no valid targets")]
    NoTargets { capability: Ident, function: Ident },

    #[error("capability `{0}` has no valid discovery functions")]
    NoFunctions(Ident),
}

/// Everything validation dropped, in the order it was encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    rejections: Vec<Rejection>,
}

impl ValidationReport {
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    fn reject(&mut self, rejection: Rejection) {
        debug!(%rejection, "dropped configuration entry");
        self.rejections.push(rejection);
    }
}

/// Is `descriptor` usable as a discovery source?
pub fn is_discovery_source(descriptor: &FunctionDescriptor) -> bool {
    descriptor.visibility() == Visibility::Public
        && descriptor.receiver() == Receiver::Static
        && descriptor.required_params() == 0
        && descriptor.returns().is_iterable()
}

/// The first reason `descriptor` is not a discovery source, if any.
pub fn descriptor_rejection(capability: &Ident, descriptor: &FunctionDescriptor) -> Option<Rejection> {
    let function = descriptor.name().clone();
    let capability = capability.clone();

    if descriptor.visibility() != Visibility::Public {
        return Some(Rejection::NotPublic { capability, function });
    }
    if descriptor.receiver() != Receiver::Static {
        return Some(Rejection::NotStatic { capability, function });
    }
    if descriptor.required_params() != 0 {
        return Some(Rejection::RequiresArguments {
            capability,
            function,
            required: descriptor.required_params(),
        });
    }
    if !descriptor.returns().is_iterable() {
        return Some(Rejection::NotIterable {
            capability,
            function,
            returns: descriptor.returns().clone(),
        });
    }
    None
}

/// Validate `raw` against `host`.
pub fn validate<H>(host: &H, raw: &RawConfig) -> (Config, ValidationReport)
where
    H: TypeOracle + FunctionCatalog + ?Sized,
{
    let mut report = ValidationReport::default();
    let discovery = validate_discovery(host, raw, &mut report);
    let capabilities = validate_capabilities(host, raw, &mut report);

    let config = Config {
        capabilities,
        discovery,
        auto_reset: raw.auto_reset,
    };
    (config, report)
}

fn validate_capabilities<H>(host: &H, raw: &RawConfig, report: &mut ValidationReport) -> Vec<Ident>
where
    H: TypeOracle + ?Sized,
{
    let mut kept = IndexSet::with_capacity(raw.capabilities.len());

    for name in &raw.capabilities {
        let capability = Ident::from(name);
        if host.kind(&capability).is_none() {
            report.reject(Rejection::UnknownCapability(capability));
        } else if kept.contains(&capability) {
            report.reject(Rejection::DuplicateCapability(capability));
        } else {
            kept.insert(capability);
        }
    }

    kept.into_iter().collect()
}

fn validate_discovery<H>(host: &H, raw: &RawConfig, report: &mut ValidationReport) -> DiscoveryMap
where
    H: TypeOracle + FunctionCatalog + ?Sized,
{
    let mut discovery = DiscoveryMap::new();

    for (name, functions) in &raw.discovery {
        let capability = Ident::from(name);
        match host.kind(&capability) {
            Some(TypeKind::Interface) => {}
            Some(TypeKind::Class) => {
                report.reject(Rejection::NotAnInterface(capability));
                continue;
            }
            None => {
                report.reject(Rejection::UnknownCapability(capability));
                continue;
            }
        }

        let mut kept = Functions::new();
        for (function, targets) in functions {
            let function = Ident::from(function);
            let Some(descriptor) = host.function(&capability, &function) else {
                report.reject(Rejection::UnknownFunction {
                    capability: capability.clone(),
                    function,
                });
                continue;
            };
            if let Some(rejection) = descriptor_rejection(&capability, descriptor) {
                report.reject(rejection);
                continue;
            }

            let mut valid = Vec::with_capacity(targets.len());
            for target in targets {
                let target = Ident::from(target);
                if host.kind(&target).is_some() {
                    valid.push(target);
                } else {
                    report.reject(Rejection::UnknownTarget {
                        capability: capability.clone(),
                        function: function.clone(),
                        target,
                    });
                }
            }

            if valid.is_empty() {
                report.reject(Rejection::NoTargets {
                    capability: capability.clone(),
                    function,
                });
                continue;
            }
            kept.insert(function, valid.into());
        }

        if kept.is_empty() {
            report.reject(Rejection::NoFunctions(capability));
            continue;
        }
        discovery.insert_functions(capability, kept);
    }

    discovery
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capability() -> Ident {
        Ident::from("Animal")
    }

    #[test]
    fn test_discovery_source_predicate() {
        assert!(is_discovery_source(&FunctionDescriptor::declared("siblings")));
        assert!(!is_discovery_source(&FunctionDescriptor::new("siblings")));
        assert!(!is_discovery_source(&FunctionDescriptor::declared("siblings").private()));
        assert!(!is_discovery_source(&FunctionDescriptor::declared("siblings").instance()));
        assert!(!is_discovery_source(
            &FunctionDescriptor::declared("siblings").with_required_params(1)
        ));
    }

    #[test]
    fn test_rejection_order() {
        let desc = FunctionDescriptor::new("siblings").private().with_required_params(2);
        assert_eq!(
            descriptor_rejection(&capability(), &desc),
            Some(Rejection::NotPublic {
                capability: capability(),
                function: Ident::from("siblings"),
            })
        );

        let desc = FunctionDescriptor::new("siblings").with_required_params(2);
        assert_eq!(
            descriptor_rejection(&capability(), &desc),
            Some(Rejection::RequiresArguments {
                capability: capability(),
                function: Ident::from("siblings"),
                required: 2,
            })
        );

        let desc = FunctionDescriptor::new("siblings").with_returns(ReturnShape::Other("u32".into()));
        let rejection = descriptor_rejection(&capability(), &desc).unwrap();
        assert_eq!(rejection.to_string(), "`Animal::siblings` returns u32, not an iterable");
    }
}
