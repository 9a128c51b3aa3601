use kvtree::error::TreeError;
use kvtree::set::Set;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn inorder_traversal_is_sorted(xs: Vec<i32>) -> bool {
    let set: Set<_> = xs.iter().cloned().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    set.in_order().into_iter().eq(expected.iter())
}

#[quickcheck]
fn search_after_insertion(xs: Vec<i32>, key: i32) -> bool {
    let mut set: Set<_> = xs.into_iter().collect();
    set.insert(key);
    set.contains(&key)
}

#[quickcheck]
fn delete_and_search(xs: Vec<i32>, key: i32) -> bool {
    let mut set: Set<_> = xs.iter().cloned().collect();
    if xs.contains(&key) {
        set.remove(&key) == Ok(key) && !set.contains(&key)
    } else if xs.is_empty() {
        set.remove(&key) == Err(TreeError::EmptyTree)
    } else {
        set.remove(&key) == Err(TreeError::KeyNotFound)
    }
}

#[quickcheck]
fn pre_and_post_order_visit_every_value(xs: Vec<i16>) -> bool {
    let set: Set<_> = xs.into_iter().collect();
    let mut pre = set.pre_order();
    let mut post = set.post_order();

    // Both start (pre) or end (post) at the root.
    let roots_agree = pre.first() == post.last();
    pre.sort();
    post.sort();
    roots_agree && pre == set.in_order() && post == set.in_order()
}

#[quickcheck]
fn min_and_max_bound_every_value(xs: Vec<i32>) -> bool {
    let set: Set<_> = xs.iter().cloned().collect();
    set.min() == xs.iter().min() && set.max() == xs.iter().max()
}

#[quickcheck]
fn concat_is_union(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a: Set<_> = xs.iter().cloned().collect();
    let b: Set<_> = ys.iter().cloned().collect();
    let expected: Set<_> = xs.into_iter().chain(ys).collect();

    a.concat(b) == expected
}
