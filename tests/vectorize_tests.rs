//! Vectorizer and recycler behaviour across input shapes.

mod fixtures;

use arbitrage::prelude::*;

#[test]
fn test_vectorize_shapes() {
    assert_eq!(vectorize(3), ints([3]));
    assert_eq!(vectorize(ints([1, 2])), ints([1, 2]));
    assert_eq!(vectorize(vec![ints([1, 2]), ints([3])]), ints([1, 2, 3]));

    let df = Frame::from_columns(vec![ints([1, 2]), ints([3, 4])]).expect("frame");
    assert_eq!(vectorize(&df), ints([1, 2, 3, 4]));
}

#[test]
fn test_vectorize_is_idempotent() {
    let once = vectorize(vec![ints([1]), strs(["a", "b"])]);
    assert_eq!(vectorize(once.clone()), once);
}

#[test]
fn test_vectorize_record_is_one_element() {
    let rec = Record::new().with("a", 1).with("b", "x");
    assert_eq!(vectorize(rec.clone()), vec![Scalar::Record(rec)]);
}

#[test]
fn test_length_counts_columns_for_frames() {
    assert_eq!(length(7), 1);
    assert_eq!(length(ints([1, 2, 3])), 3);
    assert_eq!(length(&fixtures::pets()), 4);
}

#[test]
fn test_recycle_to_longest() {
    let out = recycle(values![ints([1, 2]), ints([1, 2, 3, 4]), 3]).expect("recycle");
    assert_eq!(
        out,
        vec![ints([1, 2, 1, 2]), ints([1, 2, 3, 4]), ints([3, 3, 3, 3])]
    );
}

#[test]
fn test_recycle_output_lengths_all_match() {
    let out = recycle(values![ints([1, 2, 3]), strs(["a", "b"]), ints(0..7)]).expect("recycle");
    assert!(out.iter().all(|v| v.len() == 7));
    assert_eq!(out[1][6], Scalar::Str("a".into()));
}

#[test]
fn test_recycle_empty_policy_from_config() {
    let lookup = |k: &str| (k == "ARBITRAGE_EMPTY_POLICY").then(|| "empty".to_string());
    let cfg = Config::from_lookup(lookup);
    assert_eq!(cfg.empty_policy, EmptyPolicy::Empty);

    let out = recycle_with(&cfg, values![ints([1, 2]), Vec::<Scalar>::new()]).expect("recycle");
    assert!(out.iter().all(Vec::is_empty));

    let err = recycle(values![ints([1, 2]), Vec::<Scalar>::new()]).expect_err("default policy");
    assert!(err.to_string().starts_with("recycle: Incompatible lengths"));
}
