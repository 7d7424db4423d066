use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Numeric type usable as an edge weight
///
/// Implemented for all signed primitive integers and for `f32`/`f64`.
pub trait Weight: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity, the distance from a vertex to itself
    const ZERO: Self;

    /// Add two weights, returning `None` if the sum is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Whether the value is a usable finite weight
    fn is_finite_weight(self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }

                fn is_finite_weight(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Tentative shortest-path distance
///
/// `Infinite` means no path has been found yet. It is kept apart from the
/// weight type so that no weight value ever doubles as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Get the finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Keep the smaller of the current estimate and a finite candidate
    ///
    /// Ties keep the current estimate.
    pub fn min_with(self, candidate: W) -> Self {
        match self {
            Distance::Finite(current) if current <= candidate => self,
            _ => Distance::Finite(candidate),
        }
    }
}

impl<W: Weight> PartialOrd for Distance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Some(Ordering::Less),
            (Distance::Infinite, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Infinite, Distance::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
