//! Floyd-Warshall all-pairs shortest path solver over a dense distance
//! matrix.
//!
//! The solver keeps its own copy of the input matrix and relaxes it in place.
//! For every intermediate vertex `k`, for every source `i` and destination
//! `j`, the distance `i -> j` is replaced by `i -> k -> j` when that is
//! strictly shorter. `k` must be the outermost loop: after phase `k` the
//! matrix holds the shortest paths that only use vertices `0..=k` as
//! intermediates, and phase `k + 1` builds on the finished phase `k`.
//!
//! Note that negative cycles are not detected. The relaxation still terminates
//! after a fixed number of steps, but the distances of vertices that can reach
//! a negative cycle are not meaningful.

use crate::distance::Distance;
use crate::matrix::{DistanceMatrix, MatrixError};
use crate::sentinel::Sentinel;

/// The lifecycle stage of a solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// The solver holds the unsolved copy of the input matrix.
    Constructed,
    /// Relaxation has run at least once.
    Solved,
}

/// An all-pairs shortest path solver.
#[derive(Clone, Debug)]
pub struct FloydWarshall {
    distance: DistanceMatrix,
    stage: Stage,
}

impl FloydWarshall {
    /// Creates a new solver from a copy of the specified graph matrix. The
    /// caller's matrix is never modified.
    pub fn new(graph: &DistanceMatrix) -> Self {
        FloydWarshall {
            distance: graph.clone(),
            stage: Stage::Constructed,
        }
    }

    /// Creates a new solver from integer rows of a graph with `vertices`
    /// vertices, where entries equal to the sentinel mark missing edges.
    pub fn from_rows<R>(rows: &[R], vertices: usize, sentinel: Sentinel) -> Result<Self, MatrixError>
    where
        R: AsRef<[i64]>,
    {
        let graph = DistanceMatrix::from_rows_with_size(rows, vertices, sentinel)?;
        Ok(FloydWarshall {
            distance: graph,
            stage: Stage::Constructed,
        })
    }

    /// Computes the shortest distances between all pairs of vertices,
    /// returning the solved matrix.
    ///
    /// Calling this again on a solved matrix is a no-op, since no relaxation
    /// can improve a distance any further.
    pub fn calculate_distance(&mut self) -> &DistanceMatrix {
        let updates = relax(&mut self.distance);
        self.finish(updates)
    }

    /// Computes the shortest distances like `calculate_distance`, relaxing
    /// the rows of each phase in parallel.
    #[cfg(feature = "parallel")]
    pub fn calculate_distance_parallel(&mut self) -> &DistanceMatrix {
        let updates = crate::parallel::relax(&mut self.distance);
        self.finish(updates)
    }

    fn finish(&mut self, updates: usize) -> &DistanceMatrix {
        log::debug!(
            "relaxed {} distances over {} vertices ({:?} matrix)",
            updates,
            self.distance.size(),
            self.stage,
        );
        self.stage = Stage::Solved;
        &self.distance
    }

    /// Returns the current stage of the solver.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns `true` if the distances have been calculated.
    pub fn is_solved(&self) -> bool {
        self.stage == Stage::Solved
    }

    /// Returns the current distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distance
    }

    /// Consumes the solver, returning its distance matrix.
    pub fn into_distances(self) -> DistanceMatrix {
        self.distance
    }
}

/// Computes the all-pairs shortest distances for a graph, leaving the input
/// matrix untouched.
pub fn solve(graph: &DistanceMatrix) -> DistanceMatrix {
    let mut solver = FloydWarshall::new(graph);
    solver.calculate_distance();
    solver.into_distances()
}

/// Relaxes the matrix in place, returning the number of distances that were
/// improved.
pub fn relax(matrix: &mut DistanceMatrix) -> usize {
    let n = matrix.size();
    let d = matrix.cells_mut();

    let mut updates = 0;
    for k in 0..n {
        let mut phase_updates = 0;
        for i in 0..n {
            let ik = d[n * i + k];
            // NOTE: `+∞` is absorbing, so no path through `k` can improve any
            // distance from `i`.
            if !ik.is_finite() {
                continue;
            }
            for j in 0..n {
                let via = ik + d[n * k + j];
                if via < d[n * i + j] {
                    d[n * i + j] = via;
                    phase_updates += 1;
                }
            }
        }
        log::trace!("phase {}: relaxed {} distances", k, phase_updates);
        updates += phase_updates;
    }

    updates
}

/// Relaxes a single row of the matrix for phase `k`, given a snapshot of
/// the pivot row `k`.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn relax_row(row: &mut [Distance], pivot: &[Distance], k: usize) -> usize {
    let ik = row[k];
    if !ik.is_finite() {
        return 0;
    }

    let mut updates = 0;
    for (ij, &kj) in row.iter_mut().zip(pivot) {
        let via = ik + kj;
        if via < *ij {
            *ij = via;
            updates += 1;
        }
    }
    updates
}
