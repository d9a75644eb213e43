//! Implementation of a dense square distance matrix where `matrix[(i, j)]` is
//! the best known distance from vertex `i` to vertex `j`.
//!
//! Storage is a single row-major vector, so that a row of the matrix is a
//! contiguous slice and can be handed out (or split for parallel relaxation)
//! without any copying.

use crate::distance::Distance;
use crate::sentinel::Sentinel;
use std::{fmt, ops};
use thiserror::Error;

/// The width of a rendered matrix cell.
const CELL_WIDTH: usize = 7;

/// A square matrix of distances between vertices `0..size`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Creates a matrix for a graph with `size` vertices and no edges, that
    /// is with a zero diagonal and infinite distances everywhere else.
    pub fn disconnected(size: usize) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let mut cells = vec![Distance::INFINITE; size * size];
        for i in 0..size {
            cells[size * i + i] = Distance::ZERO;
        }

        Ok(DistanceMatrix { size, cells })
    }

    /// Creates a matrix from rows of distances.
    pub fn from_distances<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[Distance]>,
    {
        let size = rows.len();
        check_shape::<_, Distance>(rows, size)?;

        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(DistanceMatrix { size, cells })
    }

    /// Creates a matrix from integer rows, where entries equal to the
    /// sentinel are infinite distances.
    pub fn from_rows<R>(rows: &[R], sentinel: Sentinel) -> Result<Self, MatrixError>
    where
        R: AsRef<[i64]>,
    {
        DistanceMatrix::from_rows_with_size(rows, rows.len(), sentinel)
    }

    /// Creates a matrix from integer rows for a graph with a known number of
    /// vertices, returning an error if the rows do not form a `size` by
    /// `size` matrix.
    pub fn from_rows_with_size<R>(
        rows: &[R],
        size: usize,
        sentinel: Sentinel,
    ) -> Result<Self, MatrixError>
    where
        R: AsRef<[i64]>,
    {
        check_shape::<_, i64>(rows, size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.as_ref().iter().enumerate() {
                let distance = if value == sentinel.value() {
                    Distance::INFINITE
                } else {
                    Distance::finite(value).ok_or(MatrixError::WeightOutOfRange {
                        row,
                        column,
                        value,
                    })?
                };
                cells.push(distance);
            }
        }

        Ok(DistanceMatrix { size, cells })
    }

    /// Converts the matrix back into integer rows, with infinite distances
    /// replaced by the sentinel.
    ///
    /// Returns an error if a finite distance is equal to the sentinel, as it
    /// would be indistinguishable from an infinite one in the output.
    pub fn to_rows(&self, sentinel: Sentinel) -> Result<Vec<Vec<i64>>, MatrixError> {
        self.rows()
            .enumerate()
            .map(|(row, distances)| {
                distances
                    .iter()
                    .enumerate()
                    .map(|(column, distance)| match distance.value() {
                        Some(value) if value == sentinel.value() => {
                            Err(MatrixError::SentinelCollision { row, column })
                        }
                        Some(value) => Ok(value),
                        None => Ok(sentinel.value()),
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns the number of vertices, i.e. the number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the distance from `i` to `j` or `None` if either vertex is out
    /// of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Distance> {
        if i < self.size && j < self.size {
            Some(self.cells[self.size * i + j])
        } else {
            None
        }
    }

    /// Sets the distance from `i` to `j`.
    pub fn set(&mut self, i: usize, j: usize, distance: Distance) -> Result<(), MatrixError> {
        if i >= self.size || j >= self.size {
            return Err(MatrixError::OutOfBounds {
                row: i,
                column: j,
                size: self.size,
            });
        }

        self.cells[self.size * i + j] = distance;
        Ok(())
    }

    /// Returns the distances from vertex `i` to every vertex.
    pub fn row(&self, i: usize) -> Option<&[Distance]> {
        if i < self.size {
            Some(&self.cells[self.size * i..self.size * (i + 1)])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Returns the underlying row-major cells.
    pub(crate) fn cells_mut(&mut self) -> &mut [Distance] {
        &mut self.cells
    }
}

/// Checks that exactly `size` rows were provided and each row has `size`
/// entries.
fn check_shape<R, T>(rows: &[R], size: usize) -> Result<(), MatrixError>
where
    R: AsRef<[T]>,
{
    if size == 0 {
        return Err(MatrixError::Empty);
    }
    if rows.len() != size {
        return Err(MatrixError::SizeMismatch {
            rows: rows.len(),
            size,
        });
    }
    for (row, values) in rows.iter().enumerate() {
        let len = values.as_ref().len();
        if len != size {
            return Err(MatrixError::NotSquare { row, len, size });
        }
    }

    Ok(())
}

impl ops::Index<(usize, usize)> for DistanceMatrix {
    type Output = Distance;

    /// # Panics
    ///
    /// If either vertex is out of bounds.
    fn index(&self, (i, j): (usize, usize)) -> &Distance {
        assert!(
            i < self.size && j < self.size,
            "vertex ({}, {}) out of bounds for {} vertices",
            i,
            j,
            self.size,
        );
        &self.cells[self.size * i + j]
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for distance in row {
                write!(f, "{:>width$}", distance, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(CELL_WIDTH * self.size))
    }
}

/// An error constructing or accessing a distance matrix.
#[derive(Debug, Eq, Error, PartialEq)]
pub enum MatrixError {
    #[error("distance matrix must have at least one vertex")]
    Empty,
    #[error("expected {size} rows but got {rows}")]
    SizeMismatch { rows: usize, size: usize },
    #[error("row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("weight {value} at ({row}, {column}) is out of range")]
    WeightOutOfRange { row: usize, column: usize, value: i64 },
    #[error("finite distance at ({row}, {column}) is equal to the sentinel")]
    SentinelCollision { row: usize, column: usize },
    #[error("vertex ({row}, {column}) out of bounds for {size} vertices")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
}

#[cfg(feature = "fuzz")]
mod arbitrary_impl {
    use super::*;
    use arbitrary::{Arbitrary, Result, Unstructured};

    /// The maximum number of vertices in an arbitrary matrix. Without this
    /// limit the cubic relaxation makes fuzzing too slow.
    const MAX_SIZE: u8 = 16;

    impl Arbitrary for DistanceMatrix {
        fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
            let size = usize::from(u8::arbitrary(u)? % MAX_SIZE) + 1;
            let mut cells = Vec::with_capacity(size * size);
            for i in 0..size {
                for j in 0..size {
                    cells.push(if i == j {
                        Distance::ZERO
                    } else {
                        Distance::arbitrary(u)?
                    });
                }
            }

            Ok(DistanceMatrix { size, cells })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: i64 = 9999;

    #[test]
    fn disconnected_matrix_has_zero_diagonal() {
        let matrix = DistanceMatrix::disconnected(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j {
                    Distance::ZERO
                } else {
                    Distance::INFINITE
                };
                assert_eq!(matrix[(i, j)], expected);
            }
        }
    }

    #[test]
    fn rejects_invalid_shapes() {
        let sentinel = Sentinel::default();
        let empty: &[Vec<i64>] = &[];

        assert_eq!(
            DistanceMatrix::from_rows(empty, sentinel),
            Err(MatrixError::Empty)
        );
        assert_eq!(
            DistanceMatrix::disconnected(0),
            Err(MatrixError::Empty)
        );
        assert_eq!(
            DistanceMatrix::from_rows(&[vec![0, 1], vec![1]], sentinel),
            Err(MatrixError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert_eq!(
            DistanceMatrix::from_rows_with_size(&[vec![0, 1], vec![1, 0]], 3, sentinel),
            Err(MatrixError::SizeMismatch { rows: 2, size: 3 })
        );
        assert_eq!(
            DistanceMatrix::from_rows(&[[0, 1, 2]], sentinel),
            Err(MatrixError::NotSquare {
                row: 0,
                len: 3,
                size: 1
            })
        );
    }

    #[test]
    fn converts_sentinel_both_ways() {
        let rows = vec![vec![0, INF], vec![3, 0]];
        let matrix = DistanceMatrix::from_rows(&rows, Sentinel::default()).unwrap();

        assert_eq!(matrix[(0, 1)], Distance::INFINITE);
        assert_eq!(matrix[(1, 0)], Distance::from(3));
        assert_eq!(matrix.to_rows(Sentinel::default()).unwrap(), rows);

        let other = Sentinel::new(-1).unwrap();
        assert_eq!(matrix.to_rows(other).unwrap(), vec![vec![0, -1], vec![3, 0]]);
    }

    #[test]
    fn rejects_reserved_weight() {
        assert_eq!(
            DistanceMatrix::from_rows(&[[0, i64::MAX], [0, 0]], Sentinel::default()),
            Err(MatrixError::WeightOutOfRange {
                row: 0,
                column: 1,
                value: i64::MAX
            })
        );
    }

    #[test]
    fn detects_sentinel_collision() {
        let matrix = DistanceMatrix::from_rows(&[[0, 5], [INF, 0]], Sentinel::default()).unwrap();
        assert_eq!(
            matrix.to_rows(Sentinel::new(5).unwrap()),
            Err(MatrixError::SentinelCollision { row: 0, column: 1 })
        );
    }

    #[test]
    fn bounds_checked_accessors() {
        let mut matrix = DistanceMatrix::disconnected(2).unwrap();

        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.row(2), None);
        assert_eq!(
            matrix.set(0, 2, Distance::ZERO),
            Err(MatrixError::OutOfBounds {
                row: 0,
                column: 2,
                size: 2
            })
        );

        matrix.set(0, 1, Distance::from(4)).unwrap();
        assert_eq!(matrix.get(0, 1), Some(Distance::from(4)));
        assert_eq!(matrix.row(0), Some(&[Distance::ZERO, Distance::from(4)][..]));
        assert_eq!(matrix.rows().count(), 2);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let matrix = DistanceMatrix::disconnected(1).unwrap();
        let _distance = matrix[(0, 1)];
    }

    #[test]
    fn renders_right_aligned_cells() {
        let matrix = DistanceMatrix::from_rows(&[[0, 12], [INF, 0]], Sentinel::default()).unwrap();
        assert_eq!(
            matrix.to_string(),
            concat!(
                "      0     12\n",
                "    INF      0\n",
                "--------------\n",
            )
        );
    }
}
