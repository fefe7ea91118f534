//! Session state across `collect` calls: auto-reset, accumulation,
//! partial drains and cursor inspection.

mod common;

use pretty_assertions::assert_eq;

use common::{pets, pets_config};
use tola_collect::{Collector, Ident, Pending};

// =============================================================================
// 1. Auto-reset
// =============================================================================

#[test]
fn test_auto_reset_makes_collect_idempotent() {
    let mut collector = Collector::new(pets(), &pets_config());
    assert!(collector.auto_reset());

    let first = collector.collect_all(["Dog"]).unwrap();
    let second = collector.collect_all(["Dog"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, ["Dog", "Cat"]);
}

#[test]
fn test_auto_reset_clears_before_first_pull() {
    let mut collector = Collector::new(pets(), &pets_config());
    collector.collect_all(["Dog"]).unwrap();
    assert!(!collector.session().is_empty());

    let cursor = collector.collect(["Hamster"]);
    assert!(cursor.session().is_empty());
    drop(cursor);
    assert!(collector.session().is_empty());
}

#[test]
fn test_partial_drain_with_auto_reset() {
    let mut collector = Collector::new(pets(), &pets_config());
    {
        let mut cursor = collector.collect(["Dog"]);
        assert_eq!(cursor.next().unwrap().unwrap(), "Dog");
    }
    assert_eq!(collector.collect_all(["Dog"]).unwrap(), ["Dog", "Cat"]);
}

// =============================================================================
// 2. Accumulation
// =============================================================================

#[test]
fn test_without_reset_state_accumulates() {
    let raw = pets_config().with_auto_reset(false);
    let mut collector = Collector::new(pets(), &raw);
    assert!(!collector.auto_reset());

    assert_eq!(collector.collect_all(["Dog"]).unwrap(), ["Dog", "Cat"]);
    assert!(collector.collect_all(["Dog"]).unwrap().is_empty());
    assert!(collector.collect_all(["Cat", "Fish"]).unwrap().is_empty());
    assert_eq!(collector.collect_all(["Hamster", "Dog"]).unwrap(), ["Hamster"]);

    let yielded: Vec<_> = collector.session().yielded().iter().map(Ident::as_str).collect();
    assert_eq!(yielded, vec!["Dog", "Cat", "Hamster"]);
}

#[test]
fn test_partial_drain_without_reset() {
    let raw = pets_config().with_auto_reset(false);
    let mut collector = Collector::new(pets(), &raw);
    {
        let mut cursor = collector.collect(["Dog"]);
        assert_eq!(cursor.next().unwrap().unwrap(), "Dog");
    }

    // Dog was visited before its siblings ran, so it is not expanded again.
    assert!(collector.collect_all(["Dog"]).unwrap().is_empty());
    assert!(!collector.session().is_visited("Cat"));
    assert_eq!(collector.collect_all(["Cat"]).unwrap(), ["Cat"]);
}

#[test]
fn test_manual_reset_and_toggle() {
    let mut collector = Collector::new(pets(), &pets_config());
    collector.set_auto_reset(false);

    assert_eq!(collector.collect_all(["Dog"]).unwrap(), ["Dog", "Cat"]);
    assert!(collector.collect_all(["Dog"]).unwrap().is_empty());

    collector.reset();
    assert!(collector.session().is_empty());
    assert_eq!(collector.collect_all(["Dog"]).unwrap(), ["Dog", "Cat"]);

    collector.set_auto_reset(true);
    assert_eq!(collector.collect_all(["Dog"]).unwrap(), ["Dog", "Cat"]);
}

// =============================================================================
// 3. Cursor inspection
// =============================================================================

#[test]
fn test_pending_frames_follow_the_walk() {
    let mut collector = Collector::new(pets(), &pets_config());
    let mut cursor = collector.collect(["Dog", "Hamster"]);

    let dog = Ident::from("Dog");
    let hamster = [Ident::from("Hamster")];
    let pending: Vec<_> = cursor.pending().collect();
    assert_eq!(pending, vec![Pending::Seeds(&[dog.clone(), hamster[0].clone()])]);

    // Dog is emitted before its discovery functions run.
    assert_eq!(cursor.next().unwrap().unwrap(), "Dog");
    assert_eq!(cursor.depth(), 2);
    let pending: Vec<_> = cursor.pending().collect();
    assert_eq!(
        pending,
        vec![
            Pending::Seeds(&hamster),
            Pending::Calls { ident: &dog, remaining: 1 },
        ]
    );

    // Cat is emitted from the results of `siblings`, before it is walked.
    assert_eq!(cursor.next().unwrap().unwrap(), "Cat");
    let targets = [Ident::from("Animal")];
    let fish = [Ident::from("Fish")];
    let cat = [Ident::from("Cat")];
    let pending: Vec<_> = cursor.pending().collect();
    assert_eq!(
        pending,
        vec![
            Pending::Seeds(&hamster),
            Pending::Calls { ident: &dog, remaining: 0 },
            Pending::Results { targets: &targets, remaining: &fish },
            Pending::Seeds(&cat),
        ]
    );
    assert!(cursor.session().is_yielded("Cat"));
    assert!(!cursor.session().is_visited("Cat"));

    assert_eq!(cursor.next().unwrap().unwrap(), "Hamster");
    assert!(cursor.next().is_none());
    assert_eq!(cursor.depth(), 0);
}
