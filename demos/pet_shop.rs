//! Pet Shop Discovery Demonstration
//!
//! Builds a small universe of animals, loads a discovery configuration from
//! TOML and walks it lazily, with and without auto-reset.
//!
//! Run with `RUST_LOG=tola_collect=trace` to watch the walk.

use tola_collect::prelude::*;

// =============================================================================
// Host Types
// =============================================================================

struct Dog;

#[host_functions]
impl Dog {
    pub fn siblings() -> Vec<&'static str> {
        vec!["Cat", "Fish", "Wolf"]
    }
}

struct Cat;

#[host_functions]
impl Cat {
    pub fn siblings() -> impl Iterator<Item = &'static str> {
        ["Dog", "Lion"].into_iter()
    }
}

struct Lion;

#[host_functions]
impl Lion {
    pub fn siblings() -> [&'static str; 1] {
        ["Cat"]
    }
}

const CONFIG: &str = r#"
capabilities = ["Pet", "Animal"]

[discovery.Animal]
siblings = ["Animal"]
"#;

fn universe() -> Universe {
    Universe::builder()
        .interface("Animal", |t| t.function(FunctionDescriptor::declared("siblings")))
        .interface("Pet", |t| t)
        .class("Dog", |t| t.implements(["Pet", "Animal"]).functions_of::<Dog>())
        .class("Cat", |t| t.implements(["Pet", "Animal"]).functions_of::<Cat>())
        .class("Lion", |t| t.implements(["Animal"]).functions_of::<Lion>())
        .class("Fish", |t| t)
        .build()
}

fn main() -> tola_collect::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let universe = universe();
    let raw = RawConfig::from_toml_str(CONFIG)?;

    // -------------------------------------------------------------------------
    // Lazy walk: stop as soon as something satisfies Pet
    // -------------------------------------------------------------------------
    let mut collector = Collector::new(&universe, &raw);
    for rejection in collector.report().rejections() {
        println!("dropped: {rejection}");
    }

    let first_pet = collector
        .collect(["Lion"])
        .find(|found| matches!(found, Ok(ident) if universe.satisfies(ident, "Pet")))
        .transpose()?;
    println!("first pet reachable from Lion: {first_pet:?}");

    // -------------------------------------------------------------------------
    // Full walks
    // -------------------------------------------------------------------------
    println!("from Dog: {:?}", collector.collect_all(["Dog"])?);
    println!("from Dog again: {:?}", collector.collect_all(["Dog"])?);

    collector.set_auto_reset(false);
    collector.reset();
    println!("session, Lion: {:?}", collector.collect_all(["Lion"])?);
    println!("session, Dog: {:?}", collector.collect_all(["Dog"])?);
    println!("visited: {:?}", collector.session().visited());

    Ok(())
}
