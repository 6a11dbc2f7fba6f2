// crates/shared-kernel/src/value_objects/occurrences.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of times a value was observed in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occurrences(usize);

impl Occurrences {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The count of a value seen for the first time.
    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Default for Occurrences {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Occurrences {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for Occurrences {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for Occurrences {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for Occurrences {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for Occurrences {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Occurrences> for Occurrences {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<usize> for Occurrences {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Occurrences> for usize {
    fn from(value: Occurrences) -> Self {
        value.0
    }
}

impl PartialEq<usize> for Occurrences {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::Occurrences;

    impl fmt::Display for Occurrences {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
