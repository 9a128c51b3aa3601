use kvtree::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{build, is_ordered};

#[quickcheck]
fn in_order_is_sorted(pairs: Vec<(i16, u8)>) -> bool {
    is_ordered(&build(&pairs))
}

#[quickcheck]
fn last_insert_wins(pairs: Vec<(i8, String)>) -> bool {
    let tree = build(&pairs);
    let expected: BTreeMap<_, _> = pairs.into_iter().collect();

    tree.len() == expected.len() && expected.iter().all(|(k, v)| tree.search(k) == Some(v))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    is_ordered(&tree)
        && deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn filter_keeps_exactly_the_matching_entries(pairs: Vec<(i8, i8)>) -> bool {
    let tree = build(&pairs);
    let evens = tree.filter(|k, _| k % 2 == 0);

    let expected: Vec<_> = tree.iter().filter(|(k, _)| *k % 2 == 0).collect();
    evens.len() <= tree.len() && evens.iter().eq(expected.into_iter()) && is_ordered(&evens)
}

#[quickcheck]
fn map_with_injective_keys_preserves_entries(pairs: Vec<(i16, u8)>) -> bool {
    let tree = build(&pairs);
    let mapped = tree.map(|k, v| (i32::from(*k) * 10, u16::from(*v) + 1));

    let expected: Vec<_> = tree
        .iter()
        .map(|(k, v)| (i32::from(*k) * 10, u16::from(*v) + 1))
        .collect();
    let actual: Vec<_> = mapped.iter().map(|(k, v)| (*k, *v)).collect();
    mapped.len() == tree.len() && actual == expected
}

#[quickcheck]
fn map_collisions_match_reinsertion(pairs: Vec<(i8, i8)>) -> bool {
    let tree = build(&pairs);
    let mapped = tree.map(|k, v| (k / 4, *v));

    let mut expected = BTreeMap::new();
    for (k, v) in tree.iter() {
        expected.insert(k / 4, *v);
    }
    mapped.iter().eq(expected.iter())
}

#[quickcheck]
fn fold_over_empty_returns_init(init: Vec<u8>) -> bool {
    let tree: Tree<i8, i8> = Tree::new();
    tree.fold(init.clone(), |mut acc, _| {
        acc.push(0);
        acc
    }) == init
        && tree.reduce(|acc, _| acc).is_none()
}

#[quickcheck]
fn reduce_is_seeded_by_first_entry(pairs: Vec<(i8, i8)>) -> bool {
    let tree = build(&pairs);
    tree.reduce(|acc, _| acc) == tree.first().map(|(k, v)| (*k, *v))
}

#[quickcheck]
fn monoid_left_identity(pairs: Vec<(i8, String)>) -> bool {
    let tree = build(&pairs);
    Tree::new().concat(tree.clone()) == tree
}

#[quickcheck]
fn monoid_right_identity(pairs: Vec<(i8, String)>) -> bool {
    let tree = build(&pairs);
    tree.clone().concat(Tree::new()) == tree
}

#[quickcheck]
fn monoid_associativity(xs: Vec<(i8, u8)>, ys: Vec<(i8, u8)>, zs: Vec<(i8, u8)>) -> bool {
    let (a, b, c) = (build(&xs), build(&ys), build(&zs));

    let left = a.clone().concat(b.clone()).concat(c.clone());
    let right = a.concat(b.concat(c));
    is_ordered(&left) && is_ordered(&right) && left.same_entries(&right)
}

#[quickcheck]
fn concat_is_right_biased(xs: Vec<(i8, u8)>, ys: Vec<(i8, u8)>) -> bool {
    let merged = build(&xs).concat(build(&ys));
    let mut expected: BTreeMap<_, _> = xs.into_iter().collect();
    expected.extend(ys);

    is_ordered(&merged) && merged.len() == expected.len() && merged.iter().eq(expected.iter())
}

#[quickcheck]
fn concat_keeps_working_after_mutation(
    xs: Vec<(i8, u8)>,
    ys: Vec<(i8, u8)>,
    dels: Vec<i8>,
) -> bool {
    let mut merged = build(&xs).concat(build(&ys));
    for key in &dels {
        merged.delete(key);
    }
    merged.insert(0, 0);

    is_ordered(&merged) && merged.search(&0) == Some(&0)
}
