// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{RowHeight, height};
use crate::{ChUnit, Index, generate_index_type_impl};
use std::hash::Hash;

/// The vertical index in a grid of characters, starting at 0, which is the first row.
///
/// This is one part of a [`Pos`] position and is different from [`RowHeight`], which is
/// one part of a [`Size`]. You can use the [`row()`] to create a new instance.
///
/// # Examples
/// ```
/// use r3bl_tui::{RowIndex, row};
/// let row = row(5);
/// let row = RowIndex::new(5);
/// ```
///
/// [`Pos`]: crate::Pos
/// [`RowHeight`]: crate::RowHeight
/// [`Size`]: crate::Size
/// [`row()`]: crate::row
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub ChUnit);
generate_index_type_impl!(
    /* Add impl for this type */ RowIndex,
    /* Use this associated type */ RowHeight,
    /* Make this constructor fn */ row, /* Use this constructor fn */ height
);

impl From<Index> for RowIndex {
    fn from(index: Index) -> Self { RowIndex(index.0) }
}
