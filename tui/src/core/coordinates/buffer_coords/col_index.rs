// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ColWidth, width};
use crate::{ChUnit, Index, Length, generate_index_type_impl};
use std::{hash::Hash,
          ops::{Add, AddAssign, Mul, Sub, SubAssign}};

/// The horizontal index in a grid of characters, starting at 0, which is the first
/// column.
///
/// This is one part of a [`Pos`] (position), and is different from [`ColWidth`], which
/// is one part of a [`Size`]. You can use the [`col()`] to create a new instance.
///
/// # Examples
/// ```
/// use r3bl_tui::{ColIndex, col};
/// let col = col(5);
/// let col = ColIndex::new(5);
/// ```
///
/// [`Pos`]: crate::Pos
/// [`ColWidth`]: crate::ColWidth
/// [`Size`]: crate::Size
/// [`col()`]: crate::col
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub ChUnit);
generate_index_type_impl!(
    /* Add impl for this type */ ColIndex,
    /* Use this associated type */ ColWidth,
    /* Make this constructor fn */ col, /* Use this constructor fn */ width
);

impl From<Index> for ColIndex {
    fn from(index: Index) -> Self { ColIndex(index.0) }
}

impl Sub<Length> for ColIndex {
    type Output = ColIndex;
    fn sub(self, rhs: Length) -> Self::Output {
        let mut self_copy = self;
        self_copy.0 -= rhs.0;
        self_copy
    }
}

impl SubAssign<Length> for ColIndex {
    fn sub_assign(&mut self, rhs: Length) { self.0 -= rhs.0; }
}

impl Add<Length> for ColIndex {
    type Output = ColIndex;
    fn add(self, rhs: Length) -> Self::Output {
        let mut self_copy = self;
        self_copy.0 += rhs.0;
        self_copy
    }
}

impl AddAssign<Length> for ColIndex {
    fn add_assign(&mut self, rhs: Length) { self.0 += rhs.0; }
}

impl Mul<Length> for ColIndex {
    type Output = ColIndex;
    fn mul(self, rhs: Length) -> Self::Output {
        let mut self_copy = self;
        self_copy.0 *= rhs.0;
        self_copy
    }
}


#[cfg(test)]
mod tests_length_arithmetic {
    use super::*;
    use crate::len;

    #[test]
    fn test_add_length() {
        let col_idx = col(5);
        let length = len(3);
        let result = col_idx + length;
        assert_eq!(result, col(8));
    }

    #[test]
    fn test_sub_length() {
        let col_idx = col(10);
        let length = len(3);
        let result = col_idx - length;
        assert_eq!(result, col(7));
    }

    #[test]
    fn test_mul_length() {
        let col_idx = col(4);
        let length = len(3);
        let result = col_idx * length;
        assert_eq!(result, col(12));
    }

    #[test]
    fn test_add_assign_length() {
        let mut col_idx = col(5);
        let length = len(3);
        col_idx += length;
        assert_eq!(col_idx, col(8));
    }

    #[test]
    fn test_sub_assign_length() {
        let mut col_idx = col(10);
        let length = len(3);
        col_idx -= length;
        assert_eq!(col_idx, col(7));
    }

    #[test]
    fn test_sub_length_saturating() {
        // Test subtraction that would go below zero (should saturate to 0).
        let col_idx = col(5);
        let length = len(10);
        let result = col_idx - length;
        assert_eq!(result, col(0));
    }

    #[test]
    fn test_sub_assign_length_saturating() {
        let mut col_idx = col(3);
        let length = len(10);
        col_idx -= length;
        assert_eq!(col_idx, col(0));
    }

    #[test]
    fn test_length_zero_operations() {
        let col_idx = col(5);
        let zero_length = len(0);

        // Adding zero should not change value.
        assert_eq!(col_idx + zero_length, col(5));

        // Subtracting zero should not change value.
        assert_eq!(col_idx - zero_length, col(5));

        // Multiplying by zero should result in zero.
        assert_eq!(col_idx * zero_length, col(0));
    }

    #[test]
    fn test_length_operations_consistency() {
        // Verify operations work consistently with direct ChUnit operations.
        let col_idx = col(7);
        let length = len(4);

        // Test that Length operations give same result as ChUnit operations.
        assert_eq!(col_idx + length, col(*col_idx + *length));
        assert_eq!(col_idx - length, col(*col_idx - *length));
        assert_eq!(col_idx * length, col(*col_idx * *length));
    }
}
