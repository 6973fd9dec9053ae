use crate::common::{assert_eager_output, frame_from_rows};
use polars_transform_bench::{
    generate_table, transform_eager, transform_parallel, transform_parallel_with, Error,
};

#[test]
fn test_returns_one_frame_per_task() {
    let df = generate_table(50, 10).unwrap();
    let out = transform_parallel(&df, 25, None).unwrap();
    assert_eq!(out.len(), 25);
    let serial = transform_eager(&df).unwrap();
    for frame in &out {
        assert_eager_output(frame);
        assert!(frame.equals(&serial));
    }
}

#[test]
fn test_explicit_pool_size() {
    let df = generate_table(10, 10).unwrap();
    let out = transform_parallel(&df, 7, Some(2)).unwrap();
    assert_eq!(out.len(), 7);
}

#[test]
fn test_task_failure_fails_the_call() {
    let df = frame_from_rows(&[vec![1, 2, 3]]);
    match transform_parallel(&df, 4, Some(2)) {
        Err(Error::WorkerFailure { source, .. }) => {
            assert!(matches!(*source, Error::InvalidInput(_)));
        }
        other => panic!("expected worker failure, got {other:?}"),
    }
}

#[test]
fn test_input_frame_survives_dispatch() {
    let df = generate_table(10, 10).unwrap();
    let before = df.clone();
    let _ = transform_parallel_with(&df, 3, Some(3), 10).unwrap();
    assert!(df.equals(&before));
}
