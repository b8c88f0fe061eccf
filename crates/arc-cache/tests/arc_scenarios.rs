//! End-to-end scenarios from SPEC_FULL.md Section 8, exercised against the
//! public `CacheFacade` API.
#![allow(clippy::unwrap_used, clippy::panic)]

use arc_cache::{CacheFacade, DebugValue, DebugWhich};

fn new_cache() -> CacheFacade<u64, &'static str> {
    CacheFacade::new()
}

#[test]
fn basic_hit() {
    let cache = new_cache();
    let handle = cache.create("basic-hit", 10).unwrap();

    cache.put(handle, 1, "a").unwrap();
    assert_eq!(cache.get(handle, &1, true).unwrap(), Some("a"));

    assert_eq!(
        cache.debug(handle, DebugWhich::T1).unwrap(),
        DebugValue::Resident(vec![])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::T2).unwrap(),
        DebugValue::Resident(vec![(1, "a")])
    );
}

#[test]
fn touch_promotion() {
    let cache = new_cache();
    let handle = cache.create("touch-promotion", 10).unwrap();

    cache.put(handle, 1, "a").unwrap();
    cache.put(handle, 2, "b").unwrap();
    cache.get(handle, &1, true).unwrap();
    cache.get(handle, &2, true).unwrap();

    assert_eq!(
        cache.debug(handle, DebugWhich::T1).unwrap(),
        DebugValue::Resident(vec![])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::T2).unwrap(),
        DebugValue::Resident(vec![(1, "a"), (2, "b")])
    );
}

#[test]
fn overwrite_is_a_t1_hit() {
    let cache = new_cache();
    let handle = cache.create("overwrite", 10).unwrap();

    cache.put(handle, 1, "a").unwrap();
    cache.put(handle, 1, "b").unwrap();

    assert_eq!(
        cache.debug(handle, DebugWhich::T1).unwrap(),
        DebugValue::Resident(vec![])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::T2).unwrap(),
        DebugValue::Resident(vec![(1, "b")])
    );
}

#[test]
fn update_no_touch_stays_in_t1() {
    let cache = new_cache();
    let handle = cache.create("update-no-touch", 10).unwrap();

    cache.put(handle, 1, "a").unwrap();
    cache.put(handle, 2, "b").unwrap();
    assert!(cache.update(handle, &1, "a2", false).unwrap());

    assert_eq!(
        cache.debug(handle, DebugWhich::T1).unwrap(),
        DebugValue::Resident(vec![(1, "a2"), (2, "b")])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::T2).unwrap(),
        DebugValue::Resident(vec![])
    );
}

#[test]
fn arc_paper_recipe_576532() {
    let cache = new_cache();
    let handle = cache.create("arc-paper-recipe", 10).unwrap();

    let mut feed = |range: std::ops::RangeInclusive<u64>| {
        for k in range {
            cache.put(handle, k, "Entry").unwrap();
        }
    };

    feed(0..=19);
    feed(11..=14);
    feed(0..=19);
    feed(11..=39);
    for k in [39u64, 38, 37, 36, 35, 34, 33, 32, 16, 17, 11, 41] {
        cache.put(handle, k, "Entry").unwrap();
    }

    assert_eq!(
        cache.debug(handle, DebugWhich::T1).unwrap(),
        DebugValue::Resident(vec![(41, "Entry")])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::T2).unwrap(),
        DebugValue::Resident(vec![
            (37, "Entry"),
            (36, "Entry"),
            (35, "Entry"),
            (34, "Entry"),
            (33, "Entry"),
            (32, "Entry"),
            (16, "Entry"),
            (17, "Entry"),
            (11, "Entry"),
        ])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::B1).unwrap(),
        DebugValue::Ghost(vec![30, 31])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::B2).unwrap(),
        DebugValue::Ghost(vec![12, 13, 14, 15, 18, 19, 39, 38])
    );
    assert_eq!(
        cache.debug(handle, DebugWhich::Target).unwrap(),
        DebugValue::Target(5)
    );
}

#[test]
fn ghost_rehit_grows_target_and_restores_into_t2() {
    let cache = new_cache();
    let handle = cache.create("ghost-rehit", 4).unwrap();

    // Enough unique misses to populate B1.
    for k in 1u64..=10 {
        cache.put(handle, k, "Entry").unwrap();
    }

    let DebugValue::Ghost(b1_before) = cache.debug(handle, DebugWhich::B1).unwrap() else {
        panic!("expected a ghost list");
    };
    assert!(!b1_before.is_empty());

    let DebugValue::Target(target_before) = cache.debug(handle, DebugWhich::Target).unwrap() else {
        panic!("expected a target value");
    };

    let ghost_key = b1_before[0];
    cache.put(handle, ghost_key, "revived").unwrap();

    let DebugValue::Target(target_after) = cache.debug(handle, DebugWhich::Target).unwrap() else {
        panic!("expected a target value");
    };
    assert!(target_after >= target_before);

    let DebugValue::Resident(t2) = cache.debug(handle, DebugWhich::T2).unwrap() else {
        panic!("expected resident entries");
    };
    assert!(t2.contains(&(ghost_key, "revived")));
}

#[test]
fn closed_handle_rejects_further_operations() {
    let cache = new_cache();
    let handle = cache.create("closeable", 4).unwrap();
    cache.put(handle, 1, "a").unwrap();
    cache.close(handle).unwrap();

    assert!(cache.put(handle, 2, "b").is_err());
    assert!(cache.get(handle, &1, false).is_err());
}
