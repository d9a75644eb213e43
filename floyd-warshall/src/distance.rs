//! Module containing the distance type used as the weight of a path between
//! two vertices in the distance matrix.

use std::{fmt, ops};

/// The marker value used for representing +∞.
const INFINITE_MARKER: i64 = i64::MAX;

/// A path distance that is either a finite integer or +∞.
///
/// Using a dedicated type instead of a raw sentinel integer means that adding
/// two unreachable distances can never wrap into a finite value. The ordering
/// is derived from the inner integer, and since `i64::MAX` is reserved for
/// +∞ it is always the greatest distance.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Distance(i64);

impl Distance {
    /// The distance of the empty path.
    pub const ZERO: Distance = Distance(0);

    /// The distance between two vertices that are not connected.
    pub const INFINITE: Distance = Distance(INFINITE_MARKER);

    /// Creates a new finite distance, returning `None` if the value is the
    /// internal +∞ marker and cannot be represented as a finite distance.
    pub fn finite(value: i64) -> Option<Self> {
        if value == INFINITE_MARKER {
            None
        } else {
            Some(Distance(value))
        }
    }

    /// Returns `true` if there is a known path for this distance.
    pub fn is_finite(self) -> bool {
        self != Distance::INFINITE
    }

    /// Returns the finite value of the distance, or `None` for +∞.
    pub fn value(self) -> Option<i64> {
        if self.is_finite() {
            Some(self.0)
        } else {
            None
        }
    }
}

impl ops::Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // NOTE: +∞ is absorbing, `+∞ + x == +∞`. Finite sums saturate, so a
        // sum too large to be represented clamps to +∞ instead of wrapping
        // around to a small (or negative) looking distance.
        if !self.is_finite() || !rhs.is_finite() {
            Distance::INFINITE
        } else {
            Distance(self.0.saturating_add(rhs.0))
        }
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Distance(value.into())
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Some(value) => f.debug_tuple("Distance").field(&value).finish(),
            None => f.debug_tuple("Distance").field(&f64::INFINITY).finish(),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // NOTE: Use `pad` so that width and alignment flags are honoured for
        // both finite and infinite distances.
        match self.value() {
            Some(value) => f.pad(&value.to_string()),
            None => f.pad("INF"),
        }
    }
}

#[cfg(feature = "fuzz")]
mod arbitrary_impl {
    use super::*;
    use arbitrary::{Arbitrary, Result, Unstructured};

    // Arbitrary distances are restricted to non-negative weights, since
    // matrices with negative cycles do not have meaningful shortest paths
    // and would trip the invariants checked by the fuzz targets.
    impl Arbitrary for Distance {
        fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
            Ok(match Option::<u32>::arbitrary(u)? {
                Some(weight) => Distance::from(weight),
                None => Distance::INFINITE,
            })
        }

        fn size_hint(depth: usize) -> (usize, Option<usize>) {
            <Option<u32>>::size_hint(depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_is_absorbing() {
        assert_eq!(Distance::INFINITE + Distance::INFINITE, Distance::INFINITE);
        assert_eq!(Distance::INFINITE + Distance::ZERO, Distance::INFINITE);
        assert_eq!(Distance::from(7) + Distance::INFINITE, Distance::INFINITE);
        assert_eq!(
            Distance::finite(-5).unwrap() + Distance::INFINITE,
            Distance::INFINITE
        );
    }

    #[test]
    fn infinite_is_greatest() {
        assert!(Distance::finite(i64::MAX - 1).unwrap() < Distance::INFINITE);
        assert!(Distance::finite(i64::MIN).unwrap() < Distance::INFINITE);
        assert!(Distance::INFINITE + Distance::INFINITE >= Distance::INFINITE);
    }

    #[test]
    fn large_sums_saturate_instead_of_wrapping() {
        let big = Distance::finite(i64::MAX - 1).unwrap();
        assert_eq!(big + big, Distance::INFINITE);
        assert!(big + Distance::from(1) > Distance::ZERO);
    }

    #[test]
    fn marker_is_not_a_finite_distance() {
        assert_eq!(Distance::finite(i64::MAX), None);
        assert_eq!(Distance::finite(42).and_then(Distance::value), Some(42));
        assert_eq!(Distance::INFINITE.value(), None);
    }

    #[test]
    fn display_pads_both_variants() {
        assert_eq!(format!("{:>5}", Distance::from(12)), "   12");
        assert_eq!(format!("{:>5}", Distance::INFINITE), "  INF");
        assert_eq!(format!("{:?}", Distance::INFINITE), "Distance(inf)");
    }
}
