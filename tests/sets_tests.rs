//! any/all, is_equal, set operations and membership.

use arbitrage::prelude::*;

#[test]
fn test_any_all() {
    assert!(any(bools([true, false, true, false, false])).expect("any"));
    assert!(!any(bools([false, false, false])).expect("any"));
    assert!(!any(Vec::<Scalar>::new()).expect("any"));
    assert!(all(bools([true, true, true])).expect("all"));
    assert!(!all(bools([true, false, true])).expect("all"));
    assert!(all(vector![true, Scalar::Null]).expect("all"));
}

#[test]
fn test_is_equal_scalar() {
    assert_eq!(is_equal(1, 1).expect("is_equal"), bools([true]));
    assert_eq!(is_equal(1, 1.0).expect("is_equal"), bools([true]));
    assert_eq!(is_equal(1, "1").expect("is_equal"), bools([false]));
}

#[test]
fn test_is_equal_mismatched_lengths() {
    let err = is_equal(ints([1, 2]), ints([1, 2, 3])).expect_err("length");
    assert!(err.to_string().starts_with("is_equal: Incompatible lengths"));
}

#[test]
fn test_is_equal_cols() {
    let out = is_equal_cols(ints([1, 2]), ints([1, 2])).expect("cols");
    assert!(all(out).expect("all"));

    let err = is_equal_cols(ints([1, 2]), ints([1, 2, 3])).expect_err("length");
    assert!(err.to_string().starts_with("is_equal_cols: Incompatible lengths"));
}

#[test]
fn test_is_equal_cols_over_lists() {
    let a = vec![ints([1, 2]), ints([3])];
    let b = vec![ints([1, 2]), ints([4])];
    assert_eq!(is_equal_cols(a, b).expect("cols"), bools([true, false]));
}

#[test]
fn test_setdiff() {
    assert_eq!(setdiff(seq(3), seq(2)), ints([2]));
    assert_eq!(setdiff(ints([1, 2, 3]), ints([1, 2])), ints([3]));
    assert!(setdiff(ints([1, 2]), ints([1, 2, 3])).is_empty());
    assert_eq!(setdiff(ints([1, 2]), ints([3, 4])), ints([1, 2]));
}

#[test]
fn test_intersection() {
    assert_eq!(intersection(ints([1, 2, 3]), ints([1, 2])), ints([1, 2]));
    assert_eq!(intersection(ints([1, 2]), ints([1, 2, 3])), ints([1, 2]));
    assert!(intersection(ints([1, 2]), ints([3, 4])).is_empty());
}

#[test]
fn test_union() {
    assert_eq!(union(ints([1, 2, 3]), ints([1, 2])), ints([1, 2, 3]));
    assert_eq!(union(ints([1, 2]), ints([3, 4])), ints([1, 2, 3, 4]));
    assert_eq!(union(ints([1, 2]), ints([1, 2])), ints([1, 2]));
}

#[test]
fn test_within() {
    let xs = ints([1, 2, 3]);
    assert_eq!(within(ints([1, 2]), &xs), bools([true, true]));
    assert_eq!(within(ints([4, 5]), &xs), bools([false, false]));
}

#[test]
fn test_cartesian_product() {
    let out = cartesian_product(ints([1, 2]), ints([3, 4, 5]));
    let exp = vec![
        ints([1, 3]),
        ints([1, 4]),
        ints([1, 5]),
        ints([2, 3]),
        ints([2, 4]),
        ints([2, 5]),
    ];
    assert!(all(is_equal_cols(out, exp).expect("cols")).expect("all"));
}
