#![no_main]
use libfuzzer_sys::fuzz_target;
use floyd_warshall::{relax, solve, Distance, DistanceMatrix};

// Fuzz solving arbitrary matrices with non-negative weights and check that the
// result is a fixed point of relaxation with a zero diagonal that satisfies
// the triangle inequality.

fuzz_target!(|graph: DistanceMatrix| {
    let solved = solve(&graph);
    let n = solved.size();

    let mut resolved = solved.clone();
    assert_eq!(relax(&mut resolved), 0);
    assert_eq!(resolved, solved);

    for i in 0..n {
        assert_eq!(solved[(i, i)], Distance::ZERO);
        for j in 0..n {
            assert!(solved[(i, j)] <= graph[(i, j)]);
            for k in 0..n {
                assert!(solved[(i, j)] <= solved[(i, k)] + solved[(k, j)]);
            }
        }
    }
});
