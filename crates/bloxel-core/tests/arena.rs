//! Arena generational handle tests.
//!
//! These tests verify correct behavior of the generational arena,
//! including generation counter increments, stale handle detection,
//! and slot reuse.

use bloxel_core::alloc::{Arena, SlotId};

#[test]
fn test_insert_and_get() {
    let mut arena = Arena::new();

    let id = arena.insert(42);
    assert_eq!(arena.get(id), Some(&42));

    let id2 = arena.insert(100);
    assert_eq!(arena.get(id2), Some(&100));

    // Original value should still be accessible
    assert_eq!(arena.get(id), Some(&42));
}

#[test]
fn test_insert_returns_sequential_indices() {
    let mut arena = Arena::<i32>::new();

    let id0 = arena.insert(0);
    assert_eq!(id0.index(), 0);
    assert_eq!(id0.generation(), 0);

    let id1 = arena.insert(1);
    assert_eq!(id1.index(), 1);
    assert_eq!(id1.generation(), 0);
}

#[test]
fn test_get_mut() {
    let mut arena = Arena::new();

    let id = arena.insert(42);
    if let Some(value) = arena.get_mut(id) {
        *value = 100;
    }

    assert_eq!(arena.get(id), Some(&100));
}

#[test]
fn test_out_of_range_returns_none() {
    let arena = Arena::<i32>::new();
    assert_eq!(arena.get(SlotId::new(0, 999)), None);
}

#[test]
fn test_double_remove_is_none() {
    let mut arena = Arena::new();
    let id = arena.insert("panel");

    assert_eq!(arena.remove(id), Some("panel"));
    assert_eq!(arena.remove(id), None);
    assert!(arena.is_empty());
}

#[test]
fn test_stale_handle_does_not_alias_reused_slot() {
    let mut arena = Arena::new();
    let old = arena.insert("button");
    arena.remove(old);

    let new = arena.insert("textbox");
    assert_eq!(old.index(), new.index());
    assert!(!arena.contains(old));
    assert_eq!(arena.get(new), Some(&"textbox"));
}

#[test]
fn test_iter_yields_live_ids() {
    let mut arena = Arena::new();
    let a = arena.insert('a');
    let b = arena.insert('b');
    let c = arena.insert('c');
    arena.remove(b);

    let ids: Vec<SlotId> = arena.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, c]);
}
