//! Shared inputs for the integration tests.
#![allow(dead_code)]

use arbitrage::prelude::*;

/// The pet survey used throughout: species, sex, weight and age per animal.
pub fn pets() -> Frame {
    dataframe(
        values![
            strs(["dog", "cat", "sheep", "cat", "dog", "dog"]),
            strs(["F", "M", "F", "F", "M", "F"]),
            nums([21.5, 4.2, 60.0, 3.9, 30.1, 18.0]),
            ints([3, 5, 2, 7, 1, 4]),
        ],
        FrameOptions {
            colnames: Some(vec![
                "species".into(),
                "sex".into(),
                "weight".into(),
                "age".into(),
            ]),
            rownames: None,
        },
    )
    .expect("pets frame")
}

pub fn species() -> Vec<Scalar> {
    pets().column("species").expect("species").values.clone()
}

/// A frame with `rows` rows cycling through `groups` keys.
pub fn synthetic(rows: usize, groups: usize) -> Frame {
    let keys = (0..rows).map(|i| format!("g{}", i % groups));
    let values = (0..rows).map(|i| (i % 10) as i64);
    Frame::new(
        vec![
            Column::new("key", strs(keys)),
            Column::new("value", ints(values)),
        ],
        None,
    )
    .expect("synthetic frame")
}

/// Install a fmt subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
