//! Numeric edge weights.
//!
//! Kruskal only needs a total order over weights, while Floyd–Warshall also
//! needs addition that can tell when a sum stops being representable. The
//! [`Weight`] trait captures both for the primitive integer and float types.

use std::{cmp::Ordering, fmt::Debug};

/// A numeric edge weight.
///
/// Implemented for every primitive integer type and for `f32`/`f64`. Float
/// weights are only accepted by [`crate::Graph`] when finite, which makes
/// [`Weight::total_cmp`] agree with `<` for every weight stored in a graph.
pub trait Weight: Copy + Debug + PartialOrd {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Adds two weights, returning `None` when the sum overflows (integers)
    /// or is no longer finite (floats).
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Total ordering used for sorting edges.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for NaN and infinite float weights.
    fn is_finite(&self) -> bool;

    /// Returns `true` when the weight is strictly below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($weight_type:ty),+ $(,)?) => {
        $(
            impl Weight for $weight_type {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$weight_type>::checked_add(self, other)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($weight_type:ty),+ $(,)?) => {
        $(
            impl Weight for $weight_type {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$weight_type>::total_cmp(self, other)
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    <$weight_type>::is_finite(*self)
                }
            }
        )+
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);
