//! All-pairs shortest paths over dense distance matrices using the
//! Floyd-Warshall algorithm.
//!
//! Graphs are given as square matrices where `matrix[(i, j)]` is the weight of
//! the edge from `i` to `j`. Missing edges are infinite distances, which at the
//! integer boundary are represented by a configurable [`Sentinel`] value.

mod distance;
mod matrix;
#[cfg(feature = "parallel")]
mod parallel;
mod sentinel;
mod solver;

pub use crate::distance::Distance;
pub use crate::matrix::{DistanceMatrix, MatrixError};
pub use crate::sentinel::{InvalidSentinel, Sentinel, DEFAULT_SENTINEL, SENTINEL_ENV_VAR};
pub use crate::solver::{relax, solve, FloydWarshall, Stage};
