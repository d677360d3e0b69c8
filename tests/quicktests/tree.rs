use binary_search_tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Flattens a key -> count map into the sorted list of keys an in-order
/// traversal should produce.
fn expected_keys<K: Clone>(counts: &BTreeMap<K, usize>) -> Vec<K> {
    counts
        .iter()
        .flat_map(|(k, count)| std::iter::repeat(k.clone()).take(*count))
        .collect()
}

/// Applies a set of operations to a tree and a multiset of key counts.
/// This way we can ensure that after a random smattering of inserts
/// and removes the tree holds the same keys as the multiset.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, counts: &mut BTreeMap<K, usize>) -> bool
where
    K: Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                *counts.entry(k.clone()).or_default() += 1;
            }
            Op::Remove(k) => {
                let expected = match counts.get_mut(k) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(k);
                        }
                        true
                    }
                    None => false,
                };
                if tree.remove(k) != expected {
                    return false;
                }
            }
            Op::Search(k) => {
                let found = tree.search(k).map(|n| n.key() == k);
                if found != counts.get(k).map(|_| true) {
                    return false;
                }
            }
            Op::Iter => {
                if tree.inorder() != expected_keys(counts) {
                    return false;
                }
            }
        }
    }

    tree.len() == counts.values().sum::<usize>()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts) && tree.inorder() == expected_keys(&counts)
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let keys = tree.inorder();

    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn traversals_have_every_key(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    let sorted_of = |mut keys: Vec<i16>| {
        keys.sort_unstable();
        keys
    };

    tree.inorder() == sorted
        && sorted_of(tree.preorder()) == sorted
        && sorted_of(tree.postorder()) == sorted
        && sorted_of(tree.levelorder()) == sorted
}

#[quickcheck]
fn levelorder_starts_at_root(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.levelorder().first() == xs.first()
        && tree.preorder().first() == xs.first()
        && tree.postorder().last() == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn search_is_idempotent(xs: Vec<i8>, key: i8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let first = tree.search(&key).map(|n| n as *const _);
    let second = tree.search(&key).map(|n| n as *const _);

    first == second
}

#[quickcheck]
fn insert_then_remove_round_trip(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != key).collect();
    let before = tree.inorder();

    tree.insert(key);
    let found = tree.contains(&key);
    let removed = tree.remove(&key);

    found && removed && !tree.contains(&key) && tree.inorder() == before
}

#[quickcheck]
fn remove_missing_is_noop(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != key).collect();
    let before = tree.preorder();

    !tree.remove(&key) && tree.preorder() == before
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    // Each remove takes out a single copy.
    let mut still_present = xs;
    for remove in &removes {
        if let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }
    still_present.sort_unstable();

    tree.inorder() == still_present
}

#[quickcheck]
fn clone_is_identical(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for remove in &removes {
        tree.remove(remove);
    }
    let cloned = tree.clone();

    cloned.len() == tree.len()
        && cloned.preorder() == tree.preorder()
        && cloned.levelorder() == tree.levelorder()
}
