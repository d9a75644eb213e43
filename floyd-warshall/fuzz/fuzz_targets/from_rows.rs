#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use floyd_warshall::{DistanceMatrix, Sentinel};

// Fuzz reading integer rows. Rows that form a valid matrix must convert back
// to exactly the same rows with the same sentinel.

#[derive(Arbitrary, Debug)]
struct Arguments {
    rows: Vec<Vec<i64>>,
    sentinel: i64,
}

fuzz_target!(|arguments: Arguments| {
    let sentinel = match Sentinel::new(arguments.sentinel) {
        Some(sentinel) => sentinel,
        None => return,
    };

    if let Ok(matrix) = DistanceMatrix::from_rows(&arguments.rows, sentinel) {
        assert_eq!(matrix.to_rows(sentinel).unwrap(), arguments.rows);
    }
});
