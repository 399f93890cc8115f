use quickcheck::TestResult;
use trees::range::RangeTree;
use trees::RangeError;

quickcheck::quickcheck! {
    fn point_updates_round_trip(xs: Vec<i32>, updates: Vec<(usize, i32)>) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let xs: Vec<i64> = xs.into_iter().map(i64::from).collect();
        let mut tree = RangeTree::new(xs.clone());
        let mut naive = xs;

        for (index, value) in updates {
            let index = index % naive.len();
            tree.set(index, i64::from(value)).unwrap();
            naive[index] = i64::from(value);

            if tree.get(index) != Ok(i64::from(value)) {
                return TestResult::failed();
            }
        }

        TestResult::from_bool(tree.sum(0, naive.len() - 1) == Ok(naive.iter().sum()))
    }
}

quickcheck::quickcheck! {
    fn range_sums_match_naive(xs: Vec<i16>, lo: usize, hi: usize) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let xs: Vec<i64> = xs.into_iter().map(i64::from).collect();
        let tree: RangeTree<i64> = xs.iter().copied().collect();
        let (lo, hi) = (lo % xs.len(), hi % xs.len());
        let (lo, hi) = (lo.min(hi), lo.max(hi));

        TestResult::from_bool(tree.sum(lo, hi) == Ok(xs[lo..=hi].iter().sum()))
    }
}

quickcheck::quickcheck! {
    fn out_of_bounds_is_reported(xs: Vec<u8>, extra: usize) -> bool {
        let len = xs.len();
        let index = len.saturating_add(extra % 1000);
        let mut tree: RangeTree<u64> = xs.into_iter().map(u64::from).collect();

        tree.set(index, 1) == Err(RangeError::IndexOutOfBounds { index, len })
            && tree.get(index) == Err(RangeError::IndexOutOfBounds { index, len })
    }
}

#[test]
fn scenario() {
    let mut tree = RangeTree::new(vec![1, 2, 3, 4]);

    assert_eq!(tree.sum(0, 3), Ok(10));
    tree.set(1, 10).unwrap();
    assert_eq!(tree.sum(0, 3), Ok(18));
    assert_eq!(tree.sum(1, 1), Ok(10));
}
