use std::collections::{BTreeSet, HashSet};

use trees::avl::{difference, intersection, union, Tree};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                assert_eq!(tree.delete(x), set.remove(x));
            }
        }
    }
}

/// A perfectly balanced tree of `n` values has `floor(lg n) + 1` levels and an AVL tree is at most
/// about 1.44 times taller.
fn height_is_logarithmic<T>(tree: &Tree<T>) -> bool {
    let n = tree.len() as f64;
    tree.height() as f64 <= 1.45 * (n + 2.0).log2()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree == set && height_is_logarithmic(&tree)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
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

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn to_vec_matches_sorted_dedup(xs: Vec<i32>) -> bool {
        let tree: Tree<i32> = xs.iter().copied().collect();

        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        tree.to_vec() == expected && tree.len() == expected.len()
    }
}

quickcheck::quickcheck! {
    fn split_then_concat(xs: Vec<i16>, pivot: i16, strictly_less: bool) -> bool {
        let tree: Tree<i16> = xs.into_iter().collect();

        let (mut lesser, mut greater) = tree.clone().split(&pivot, strictly_less);
        let partitioned = lesser.iter().all(|x| if strictly_less { *x < pivot } else { *x <= pivot })
            && greater.iter().all(|x| if strictly_less { *x >= pivot } else { *x > pivot });
        let balanced = height_is_logarithmic(&lesser) && height_is_logarithmic(&greater);

        let joined = lesser.concat(&mut greater).is_ok();
        partitioned && balanced && joined && greater.is_empty() && lesser == tree
    }
}

quickcheck::quickcheck! {
    fn copies_are_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let original: Tree<i8> = xs.iter().copied().collect();
        let mut copy = original.clone();
        let mut set = original.iter().copied().collect();

        do_ops(&ops, &mut copy, &mut set);

        original.eq_ordered(xs.iter().copied().collect::<BTreeSet<_>>()) && copy == set
    }
}

quickcheck::quickcheck! {
    fn set_algebra_laws(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let a: Tree<i8> = xs.into_iter().collect();
        let b: Tree<i8> = ys.into_iter().collect();

        union(&a, &b).len() == a.len() + b.len() - intersection(&a, &b).len()
            && intersection(&difference(&a, &b), &b).is_empty()
            && union(&a, &a) == a
            && intersection(&a, &Tree::new()).is_empty()
    }
}

#[test]
fn scenario_from_a_list() {
    let tree = Tree::from([5, 3, 8, 3, 1]);

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.to_vec(), vec![1, 3, 5, 8]);

    let (lesser, greater) = tree.split(&5, true);
    assert_eq!(lesser.to_vec(), vec![1, 3]);
    assert_eq!(greater.to_vec(), vec![5, 8]);

    let first = Tree::from([1, 4, 5, 8, 2]);
    let second = Tree::from([3, 7, 6, 12, 13]);
    assert_eq!(intersection(&first, &second).len(), 0);
}

#[test]
fn large_insert_then_delete() {
    let _ = pretty_env_logger::try_init();
    // Pseudo-random values from a linear congruential generator with a fixed seed.
    let values: Vec<u32> = (0..20_000u32)
        .scan(12345u32, |state, _| {
            *state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            Some(*state % 50_000)
        })
        .collect();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for x in &values {
        tree.insert(*x);
        set.insert(*x);
        assert!(tree.contains(x));
        assert_eq!(tree.len(), set.len());
    }
    assert!(height_is_logarithmic(&tree));

    for x in &values {
        tree.delete(x);
        set.remove(x);
        assert!(!tree.contains(x));
        assert_eq!(tree.len(), set.len());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}
