//! Property-based tests for RedBlackTree.
//!
//! Every law checks the full set of red-black invariants with `validate()`
//! after each step, not only at the end.

use proptest::prelude::*;
use rbcontainers::tree::RedBlackTree;
use std::collections::BTreeSet;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for a list of keys that may contain duplicates.
fn arbitrary_keys(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500..500_i32, 0..max_size)
}

/// Strategy for a set of distinct keys together with a shuffled copy of it.
fn keys_and_removal_order(max_size: usize) -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    prop::collection::btree_set(any::<i32>(), 0..max_size).prop_flat_map(|keys| {
        let keys: Vec<i32> = keys.into_iter().collect();
        (Just(keys.clone()), Just(keys).prop_shuffle())
    })
}

fn build(keys: &[i32]) -> RedBlackTree<i32, i32> {
    keys.iter().map(|&key| (key, key.wrapping_mul(3))).collect()
}

// =============================================================================
// Insertion Laws
// =============================================================================

proptest! {
    /// Law: every insertion leaves a valid tree whose length counts the
    /// successful insertions.
    #[test]
    fn prop_insert_keeps_invariants(keys in arbitrary_keys(200)) {
        let mut tree = RedBlackTree::new();
        let mut successful = 0_usize;
        for key in keys {
            let (position, inserted) = tree.insert(key, ());
            if inserted {
                successful += 1;
            }
            prop_assert_eq!(tree.key_at(position), Some(&key));
            prop_assert!(tree.validate().is_ok());
            prop_assert_eq!(tree.len(), successful);
        }
    }

    /// Law: in-order traversal is the sorted, deduplicated input.
    #[test]
    fn prop_iteration_is_sorted_unique(keys in arbitrary_keys(200)) {
        let tree = build(&keys);
        let expected: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let actual: Vec<i32> = tree.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(actual, expected.clone());

        let mut reversed: Vec<i32> = tree.iter().rev().map(|(key, _)| *key).collect();
        reversed.reverse();
        prop_assert_eq!(reversed, expected);
    }

    /// Law: a duplicate insertion changes neither the length nor the shape.
    #[test]
    fn prop_duplicate_insert_is_noop(keys in arbitrary_keys(100).prop_filter("non-empty", |keys| !keys.is_empty()), index: prop::sample::Index) {
        let mut tree = build(&keys);
        let key = keys[index.index(keys.len())];
        let before = tree.diagram_with(|key, value| format!("{key}:{value}")).to_string();

        let (_, inserted) = tree.insert(key, 0);

        prop_assert!(!inserted);
        let after = tree.diagram_with(|key, value| format!("{key}:{value}")).to_string();
        prop_assert_eq!(before, after);
    }

    /// Law: the black height stays logarithmic.
    #[test]
    fn prop_black_height_is_logarithmic(keys in arbitrary_keys(300)) {
        let tree = build(&keys);
        let black_height = tree.validate().map_err(|error| TestCaseError::fail(error.to_string()))?;
        // A tree of black height h holds at least 2^h - 1 nodes.
        prop_assert!((1_usize << black_height) - 1 <= tree.len());
    }
}

// =============================================================================
// Erase Laws
// =============================================================================

proptest! {
    /// Law: erasing every key in a random order keeps the tree valid at each
    /// step and ends empty.
    #[test]
    fn prop_erase_all_in_random_order((keys, order) in keys_and_removal_order(150)) {
        let mut tree = build(&keys);
        let mut remaining = keys.len();
        for key in order {
            prop_assert_eq!(tree.erase(&key), 1);
            remaining -= 1;
            prop_assert_eq!(tree.len(), remaining);
            prop_assert!(!tree.contains(&key));
            prop_assert!(tree.validate().is_ok());
        }
        prop_assert!(tree.is_empty());
    }

    /// Law: erasing an absent key returns 0 and changes nothing.
    #[test]
    fn prop_erase_absent_is_noop(keys in arbitrary_keys(100), probe in 500..1000_i32) {
        let mut tree = build(&keys);
        let before = tree.clone();
        prop_assert_eq!(tree.erase(&probe), 0);
        prop_assert_eq!(tree, before);
    }

    /// Law: interleaved inserts and erases agree with a reference set.
    #[test]
    fn prop_interleaved_matches_reference(operations in prop::collection::vec((any::<bool>(), 0..64_i32), 0..300)) {
        let mut tree = RedBlackTree::new();
        let mut reference = BTreeSet::new();
        for (insert, key) in operations {
            if insert {
                prop_assert_eq!(tree.insert(key, ()).1, reference.insert(key));
            } else {
                prop_assert_eq!(tree.erase(&key) == 1, reference.remove(&key));
            }
            prop_assert!(tree.validate().is_ok());
            prop_assert_eq!(tree.len(), reference.len());
        }
        let actual: Vec<i32> = tree.iter().map(|(key, _)| *key).collect();
        let expected: Vec<i32> = reference.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Law: merge keeps every key of both sides, drops duplicates, and
    /// empties the source.
    #[test]
    fn prop_merge_union(left in arbitrary_keys(100), right in arbitrary_keys(100)) {
        let mut receiver = build(&left);
        let mut source = build(&right);
        let left_keys: BTreeSet<i32> = left.iter().copied().collect();
        let right_keys: BTreeSet<i32> = right.iter().copied().collect();
        let duplicates = left_keys.intersection(&right_keys).count();

        receiver.merge(&mut source);

        prop_assert_eq!(receiver.len(), left_keys.len() + right_keys.len() - duplicates);
        prop_assert!(source.is_empty());
        prop_assert!(receiver.validate().is_ok());
        prop_assert!(source.validate().is_ok());
        for key in left_keys.union(&right_keys) {
            prop_assert!(receiver.contains(key));
        }
    }
}

// =============================================================================
// Copy Laws
// =============================================================================

proptest! {
    /// Law: a copy is equal to its original and independent of it.
    #[test]
    fn prop_clone_is_independent(keys in arbitrary_keys(100), extra in 1000..2000_i32) {
        let original = build(&keys);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.validate(), original.validate());

        copy.insert(extra, 0);
        if let Some(&first) = keys.first() {
            copy.erase(&first);
            prop_assert!(original.contains(&first));
        }
        prop_assert!(!original.contains(&extra));
        prop_assert_eq!(original.len(), build(&keys).len());
        prop_assert!(copy.validate().is_ok());
    }
}
