use num_traits::{Bounded, CheckedAdd, CheckedSub, SaturatingAdd, Zero};
use std::{
    fmt::Debug,
    hash::Hash,
    ops::{Add, Sub},
};

/// Totally-ordered, additive edge weights.
///
/// Sums of weights may leave the range of the type. Algorithms use the checked and
/// saturating operations wherever that can happen on valid input.
///
/// Implemented for every type that fits, which covers all primitive integers,
/// signed or unsigned. Floating point types are not `Ord` and thus excluded.
pub trait Weight:
    Copy
    + Ord
    + Hash
    + Debug
    + Zero
    + Bounded
    + Add<Output = Self>
    + Sub<Output = Self>
    + CheckedAdd
    + CheckedSub
    + SaturatingAdd
{
    /// `true` if the weight is strictly below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T> Weight for T where
    T: Copy
        + Ord
        + Hash
        + Debug
        + Zero
        + Bounded
        + Add<Output = T>
        + Sub<Output = T>
        + CheckedAdd
        + CheckedSub
        + SaturatingAdd
{
}

/// Marker for graphs whose edges carry no weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unweighted;
