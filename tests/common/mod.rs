//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tola_collect::{discovery_map, FunctionDescriptor, RawConfig, Universe};

/// Install a test-friendly subscriber once; `RUST_LOG=tola_collect=trace`
/// shows the walk.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn none() -> Vec<&'static str> {
    Vec::new()
}

/// Dog: {Pet, Animal}, Cat: {Animal}, Fish: {}.
/// `Dog::siblings = [Cat, Fish]`, the others return nothing.
pub fn pets() -> Universe {
    Universe::builder()
        .interface("Animal", |t| t.function(FunctionDescriptor::declared("siblings")))
        .interface("Pet", |t| t)
        .class("Dog", |t| {
            t.implements(["Pet", "Animal"])
                .function(FunctionDescriptor::discovery("siblings", || ["Cat", "Fish"]))
        })
        .class("Cat", |t| {
            t.implements(["Animal"])
                .function(FunctionDescriptor::discovery("siblings", none))
        })
        .class("Fish", |t| t.function(FunctionDescriptor::discovery("siblings", none)))
        .class("Hamster", |t| t.implements(["Pet"]))
        .build()
}

pub fn pets_config() -> RawConfig {
    RawConfig::new(
        discovery_map! { "Animal" => { "siblings" => ["Animal"] } },
        ["Pet", "Animal"],
    )
}

/// A graph of `Node` classes where `edges[i] = (name, next)` and every
/// node's `next` returns its targets. Each call bumps `calls`.
pub fn graph(edges: &[(&str, &[&str])], calls: &Arc<AtomicUsize>) -> Universe {
    edges
        .iter()
        .fold(
            Universe::builder().interface("Node", |t| t.function(FunctionDescriptor::declared("next"))),
            |builder, (name, next)| {
                let next: Vec<String> = next.iter().map(|s| s.to_string()).collect();
                let calls = Arc::clone(calls);
                builder.class(*name, move |t| {
                    t.implements(["Node"]).function(FunctionDescriptor::discovery("next", move || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        next.clone()
                    }))
                })
            },
        )
        .build()
}

pub fn graph_config() -> RawConfig {
    RawConfig::new(discovery_map! { "Node" => { "next" => ["Node"] } }, ["Node"])
}
