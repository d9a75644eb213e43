//! Parallel relaxation of a distance matrix using `rayon`.
//!
//! Phases are still executed one after the other, since phase `k` depends on
//! the completed phase `k - 1`. Within a phase, each row only reads its own
//! entries and the pivot row `k`, so rows are relaxed on separate threads
//! against a snapshot of the pivot row.

use crate::matrix::DistanceMatrix;
use crate::solver::relax_row;
use rayon::prelude::*;

/// Relaxes the matrix in place, returning the number of distances that were
/// improved.
///
/// Note that without negative cycles the pivot row does not change during its
/// own phase, so the snapshot yields the same matrix as sequential relaxation.
pub fn relax(matrix: &mut DistanceMatrix) -> usize {
    let n = matrix.size();
    let d = matrix.cells_mut();

    let mut updates = 0;
    for k in 0..n {
        let pivot = d[n * k..n * (k + 1)].to_vec();
        let phase_updates: usize = d
            .par_chunks_mut(n)
            .map(|row| relax_row(row, &pivot, k))
            .sum();
        log::trace!("phase {}: relaxed {} distances", k, phase_updates);
        updates += phase_updates;
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::Sentinel;
    use crate::solver;

    #[test]
    fn matches_sequential_relaxation() {
        const INF: i64 = 9999;
        let graph = DistanceMatrix::from_rows(
            &[
                [0, 3, INF, 7],
                [8, 0, 2, INF],
                [5, INF, 0, 1],
                [2, INF, INF, 0],
            ],
            Sentinel::default(),
        )
        .unwrap();

        let mut sequential = graph.clone();
        let mut parallel = graph;
        assert_eq!(solver::relax(&mut sequential), relax(&mut parallel));
        assert_eq!(sequential, parallel);
        assert_eq!(
            parallel.to_rows(Sentinel::default()).unwrap(),
            vec![
                vec![0, 3, 5, 6],
                vec![5, 0, 2, 3],
                vec![3, 6, 0, 1],
                vec![2, 5, 7, 0],
            ]
        );
    }
}
