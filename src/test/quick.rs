use quickcheck::{Arbitrary, Gen};

/// One step of a randomly generated workload run against a tree and a
/// reference map side by side.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V into both
    Insert(K, V),
    /// Delete the K from both
    Delete(K),
    /// Look the K up in both
    Search(K),
    /// Compare the full in-order walks
    InOrder,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Inserts are weighted double so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]) {
            Some(0) => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            Some(1) => Op::Delete(K::arbitrary(g)),
            Some(2) => Op::Search(K::arbitrary(g)),
            _ => Op::InOrder,
        }
    }
}
