//! Store Invariant Tests
//!
//! - Every insert returns max(existing ids) + 1, or 1 when empty
//! - Ids in the collection stay unique
//! - list() length tracks inserts minus deletes
//! - Concurrent callers are serialized by the store lock

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use roster::student::{Grade, NewStudent, StoreError, StudentPatch, StudentStore};

fn student(n: u64) -> NewStudent {
    NewStudent::new(format!("Student {}", n), n as i64 % 12, "A")
}

fn max_id(store: &StudentStore) -> u64 {
    store.list().iter().map(|s| s.id).max().unwrap_or(0)
}

fn assert_unique_ids(store: &StudentStore) {
    let students = store.list();
    let ids: HashSet<u64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), students.len());
}

// =============================================================================
// Id Assignment
// =============================================================================

/// Interleaved inserts and deletes always assign max + 1.
#[test]
fn test_ids_follow_max_plus_one_across_deletes() {
    let store = StudentStore::new();
    let mut inserted = 0usize;
    let mut deleted = 0usize;

    for n in 0..60u64 {
        if n % 3 == 2 {
            // Delete the oldest remaining record
            let first = store.list()[0].id;
            store.delete(first).unwrap();
            deleted += 1;
        } else {
            let expected = max_id(&store) + 1;
            assert_eq!(store.insert(student(n)).id, expected);
            inserted += 1;
        }

        assert_unique_ids(&store);
        assert_eq!(store.len(), inserted - deleted);
    }
}

/// Removing the current maximum lets its id be handed out again.
#[test]
fn test_max_id_is_reused_after_delete() {
    let store = StudentStore::new();
    for n in 0..3 {
        store.insert(student(n));
    }

    store.delete(3).unwrap();
    assert_eq!(store.insert(student(9)).id, 3);

    store.delete(1).unwrap();
    assert_eq!(store.insert(student(10)).id, 4);
}

#[test]
fn test_emptied_store_restarts_at_one() {
    let store = StudentStore::new();
    store.insert(student(1));
    store.insert(student(2));
    store.delete(1).unwrap();
    store.delete(2).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.insert(student(3)).id, 1);
}

// =============================================================================
// Lookup And Update
// =============================================================================

#[test]
fn test_get_after_insert_is_structurally_equal() {
    let store = StudentStore::new();
    for n in 0..10 {
        let inserted = store.insert(student(n));
        assert_eq!(store.get(inserted.id).unwrap(), inserted);
    }
}

#[test]
fn test_update_touches_exactly_present_fields() {
    let store = StudentStore::new();
    let original = store.insert(NewStudent::new("Ann", 9, "A"));

    let patches = [
        StudentPatch {
            name: Some("Anne".into()),
            ..Default::default()
        },
        StudentPatch {
            grade: Some(Grade::Level(12)),
            ..Default::default()
        },
        StudentPatch {
            section: Some("C".into()),
            ..Default::default()
        },
    ];

    let mut expected = original.clone();
    for patch in patches {
        expected.apply(patch.clone());
        let updated = store.update(original.id, patch).unwrap();
        assert_eq!(updated, expected);
        assert_eq!(updated.id, original.id);
    }
}

#[test]
fn test_missing_ids_report_not_found() {
    let store = StudentStore::with_demo_records();

    assert_eq!(store.get(3), Err(StoreError::NotFound(3)));
    assert_eq!(
        store.update(3, StudentPatch::default()),
        Err(StoreError::NotFound(3))
    );
    assert_eq!(store.delete(3), Err(StoreError::NotFound(3)));
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Serialized Access
// =============================================================================

/// Concurrent inserts never hand out the same id.
#[test]
fn test_concurrent_inserts_get_unique_ids() {
    let store = Arc::new(StudentStore::new());

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..25u64)
                    .map(|n| store.insert(student(t * 100 + n)).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    assert_eq!(store.len(), 200);
    assert_eq!(ids, (1..=200).collect());
}
