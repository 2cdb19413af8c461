//! Frame construction, labels, shape, transpose and binding.

mod fixtures;

use arbitrage::prelude::*;

fn named(cols: &[&str], rows: Option<Vec<Scalar>>) -> FrameOptions {
    FrameOptions {
        colnames: Some(cols.iter().map(|c| c.to_string()).collect()),
        rownames: rows,
    }
}

#[test]
fn test_dataframe_one_col() {
    let df = dataframe(values![ints([1, 1, 2, 3])], FrameOptions::default()).expect("frame");
    assert_eq!(df.rownames(), seq(4).as_slice());
    assert_eq!(df.column("0").expect("col").values, ints([1, 1, 2, 3]));
}

#[test]
fn test_dataframe_named_rows_and_cols() {
    let df = dataframe(
        values![ints([1, 2, 3]), ints([4, 5, 6])],
        named(&["a", "b"], Some(strs(["x", "y", "z"]))),
    )
    .expect("frame");
    assert_eq!(df.column("b").expect("b").values, ints([4, 5, 6]));
    assert_eq!(df.rownames(), strs(["x", "y", "z"]).as_slice());
}

#[test]
fn test_dataframe_rejects_ragged_columns() {
    let err = dataframe(values![ints([1, 2, 3]), ints([4])], FrameOptions::default())
        .expect_err("ragged");
    assert!(err.is_length());
}

#[test]
fn test_dataframe_rejects_wrong_colname_count() {
    assert!(dataframe(values![ints([1])], named(&["a", "b"], None)).is_err());
}

#[test]
fn test_shape_queries() {
    let df = Value::from(fixtures::pets());
    assert!(is_dataframe(&df));
    assert_eq!(nrow(&df), Some(6));
    assert_eq!(ncol(&df), Some(4));

    let mat = Value::from(vec![ints([1, 2]), ints([3, 4])]);
    assert!(!is_dataframe(&mat));
    assert!(is_matrix(&mat));
    assert_eq!(nrow(&mat), Some(2));
    assert_eq!(rownames(&mat), None);

    assert!(!is_matrix(&Value::from(1)));
    assert_eq!(nrow(&Value::from(ints([1, 2, 3, 4]))), None);
    assert_eq!(colnames(&Value::from(1)), None);
}

#[test]
fn test_labels_default_to_indices() {
    let df = Value::from(
        dataframe(values![ints([1, 2]), ints([3, 4])], FrameOptions::default()).expect("frame"),
    );
    assert_eq!(rownames(&df), Some(ints([0, 1])));
    assert_eq!(colnames(&df), Some(vec!["0".to_string(), "1".to_string()]));
}

#[test]
fn test_t_matrix() {
    let m = Value::from(vec![ints([1, 2, 3]), ints([4, 5, 6])]);
    let out = t(&m).expect("t");
    let exp = vec![ints([1, 4]), ints([2, 5]), ints([3, 6])];
    assert!(all(is_equal_cols(out, exp).expect("cols")).expect("all"));
}

#[test]
fn test_t_dataframe_swaps_labels() {
    let df = dataframe(
        values![ints([1, 2]), ints([3, 4])],
        named(&["a", "b"], Some(strs(["x", "y"]))),
    )
    .expect("frame");
    let out = t(&Value::from(df)).expect("t");
    let tf = out.as_frame().expect("frame");
    assert_eq!(tf.colnames(), vec!["x", "y"]);
    assert_eq!(tf.rownames(), strs(["a", "b"]).as_slice());
    assert_eq!(tf.column("x").expect("x").values, ints([1, 3]));
}

#[test]
fn test_rbind_no_labels() {
    let a = Frame::from_columns(vec![ints([1, 2]), ints([4, 5])]).expect("a");
    let b = Frame::from_columns(vec![ints([3]), ints([6])]).expect("b");
    let out = rbind(&a, &b).expect("rbind");
    assert_eq!(a.nrow(), 2);
    assert_eq!(b.nrow(), 1);
    assert_eq!(out, Frame::from_columns(vec![ints([1, 2, 3]), ints([4, 5, 6])]).expect("exp"));
}

#[test]
fn test_rbind_requires_matching_columns() {
    let a = dataframe(values![ints([1])], named(&["a"], None)).expect("a");
    let b = dataframe(values![ints([1])], named(&["b"], None)).expect("b");
    assert!(matches!(rbind(&a, &b), Err(Error::ColumnNotFound(_))));
}

#[test]
fn test_cbind_vectors() {
    let out = cbind(values![ints([1, 2, 3]), ints([4, 5, 6])]).expect("cbind");
    assert_eq!(out.column("0").expect("0").values, ints([1, 2, 3]));
    assert_eq!(out.column("1").expect("1").values, ints([4, 5, 6]));
    assert_eq!(out.rownames(), ints([0, 1, 2]).as_slice());
}

#[test]
fn test_cbind_frames_suffixes_conflicts() {
    let a = dataframe(values![ints([1, 2])], named(&["v"], None)).expect("a");
    let b = dataframe(values![ints([3, 4])], named(&["v"], None)).expect("b");
    let out = cbind(values![a, b]).expect("cbind");
    assert_eq!(out.colnames(), vec!["v", "v_right"]);
}

#[test]
fn test_cbind_vector_before_frame() {
    let df = dataframe(values![ints([1, 2])], named(&["x"], None)).expect("df");
    let out = cbind(values![ints([9, 8]), df]).expect("cbind");
    assert_eq!(out.colnames(), vec!["0", "x"]);
    assert_eq!(out.column("0").expect("0").values, ints([9, 8]));
}

#[test]
fn test_transpose_frame_with_repeated_rows() {
    let df = dataframe(values![ints([4, 5])], named(&["x"], None)).expect("df");
    let twice = select(&df, &[0, 0]).expect("select");
    let out = t(&Value::Frame(twice)).expect("t");
    assert_eq!(colnames(&out), Some(vec!["0".to_string(), "0.1".to_string()]));
}
