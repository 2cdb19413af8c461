//! Grouping engine: partition, split, tapply and by over sequences and frames.

mod fixtures;

use arbitrage::prelude::*;
use fixtures::{pets, species, synthetic};

fn two_col(a: Vec<Scalar>, b: Vec<Scalar>) -> Frame {
    Frame::from_columns(vec![a, b]).expect("frame")
}

#[test]
fn test_partition_vector_random_order() {
    let x = ints([1, 2, 3, 4, 5, 6]);
    let parts = partition(&x, strs(["b", "c", "c", "b", "a", "c"])).expect("partition");
    assert_eq!(parts, vec![ints([1, 4]), ints([2, 3, 6]), ints([5])]);
}

#[test]
fn test_partition_preserves_total_length() {
    let x = ints(0..50);
    let key = ints((0..50).map(|i| (i * 7) % 5));
    let parts = partition(&x, &key).expect("partition");
    assert_eq!(parts.iter().map(Vec::len).sum::<usize>(), x.len());
    assert_eq!(parts.len(), unique(&key).len());

    let rebuilt = parts.concat();
    assert_eq!(sort(&rebuilt, false), sort(&x, false));
}

#[test]
fn test_partition_concatenation_is_a_permutation() {
    let x = vector![3, "b", 1.5, Scalar::Null, 3, "a"];
    let key = strs(["p", "q", "p", "r", "q", "p"]);
    let parts = partition(&x, &key).expect("partition");
    assert_eq!(parts[0], vector![3, 1.5, "a"]);

    let rebuilt = parts.concat();
    assert_eq!(rebuilt.len(), x.len());
    assert_eq!(sort(&rebuilt, false), sort(&x, false));
}

#[test]
fn test_partition_dataframe_has_no_side_effects() {
    let x = two_col(ints([1, 2, 3, 4, 5]), ints([1, 1, 2, 2, 3]));
    let before = x.fingerprint();
    let key = x.column("1").expect("key column").values.clone();

    let parts = partition(&x, &key).expect("partition");

    assert_eq!(x.nrow(), 5);
    assert_eq!(x.fingerprint(), before);
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].column("0").expect("col").values, ints([1, 2]));
    assert_eq!(parts[1].column("0").expect("col").values, ints([3, 4]));
    assert_eq!(parts[2].column("0").expect("col").values, ints([5]));
    assert_eq!(parts[1].rownames(), ints([2, 3]).as_slice());
    assert_eq!(parts[2].colnames(), x.colnames());
}

#[test]
fn test_partition_key_mismatch_errors() {
    let err = partition(&pets(), ints([1, 2])).expect_err("should fail");
    assert!(err.is_length());
}

#[test]
fn test_split_labels_groups() {
    let groups = split(&pets(), species()).expect("split");
    let labels: Vec<_> = groups.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(labels, strs(["dog", "cat", "sheep"]));
    assert_eq!(groups[0].1.nrow(), 3);
}

#[test]
fn test_tapply_vector_int_index() {
    let out = tapply(&ints([1, 2, 3, 4, 5]), ints([1, 1, 2, 2, 2]), |g| sum(g)).expect("tapply");
    assert_eq!(out, ints([3, 12]));
}

#[test]
fn test_tapply_vector_char_index() {
    let out =
        tapply(&ints([1, 2, 3, 4, 5]), strs(["a", "a", "b", "b", "b"]), |g| sum(g)).expect("tapply");
    assert_eq!(out, ints([3, 12]));
}

#[test]
fn test_tapply_mean_weight_by_species() {
    let df = pets();
    let weight = &df.column("weight").expect("weight").values;
    let means = tapply(weight, species(), |g| mean(g)).expect("tapply");
    assert_eq!(means.len(), 3);
    assert_eq!(means[2], Scalar::F64(60.0));
}

#[test]
fn test_tapply_propagates_function_errors() {
    let err = tapply(&strs(["a", "b"]), ints([1, 2]), |g| sum(g)).expect_err("strings");
    assert!(matches!(err, Error::Type { op: "sum", .. }));
}

#[test]
fn test_by_identity_returns_panels() {
    let x = two_col(ints([1, 2, 3, 4, 5]), ints([1, 1, 2, 2, 3]));
    let key = x.column("1").expect("key").values.clone();
    let panels = by(&x, &key, Ok).expect("by");
    assert_eq!(x.nrow(), 5);
    assert_eq!(panels, partition(&x, &key).expect("partition"));
}

#[test]
fn test_by_modifies_copies_only() {
    let x = two_col(ints([1, 2, 3, 4, 5]), ints([1, 1, 2, 2, 3]));
    let before = x.fingerprint();
    let key = x.column("1").expect("key").values.clone();

    let out = by(&x, &key, |mut panel| {
        let bumped = add(&panel.column("0")?.values, 1)?;
        panel.replace_column("0", bumped)?;
        Ok(panel)
    })
    .expect("by");

    assert_eq!(x.fingerprint(), before);
    assert_eq!(out[0].column("0").expect("col").values, ints([2, 3]));
    assert_eq!(out[1].column("0").expect("col").values, ints([4, 5]));
    assert_eq!(out[2].column("0").expect("col").values, ints([6]));
}

#[test]
fn test_partition_large_frame() {
    let df = synthetic(1_000, 7);
    let key = df.column("key").expect("key").values.clone();
    let parts = partition(&df, &key).expect("partition");
    assert_eq!(parts.len(), 7);
    assert_eq!(parts.iter().map(Frame::nrow).sum::<usize>(), 1_000);
    assert_eq!(parts[0].column("key").expect("key").values[0], Scalar::Str("g0".into()));
}
