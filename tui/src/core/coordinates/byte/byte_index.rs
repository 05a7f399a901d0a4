// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-based byte position in strings and buffers - see [`ByteIndex`] type.

use crate::{ByteLength, ByteOffset, ChUnit, Index,
            bounds_check::{IndexOps, NumericConversions, NumericValue}};
use std::ops::{Add, Deref, DerefMut, Range};

/// Represents an absolute byte position within strings and buffers (0-based).
///
/// A `ByteIndex` represents a specific byte position within a buffer, string, or other
/// byte-oriented structure. As a 0-based index, `ByteIndex(0)` refers to the first byte,
/// `ByteIndex(1)` to the second byte, and so on. This is distinct from [`ByteLength`]
/// which is 1-based and represents sizes/counts.
///
/// > This newtype struct does not use [`ChUnit`] like other unit types because
/// > byte positions are inherently [`usize`].
///
/// This type is primarily used for byte-level operations in text processing, particularly
/// when working with UTF-8 strings where character boundaries don't align with byte
/// boundaries. It provides type safety when dealing with the underlying byte
/// representation of [`crate::InlineString`] within [`crate::GCStringOwned`].
///
/// # Type System Integration
///
/// `ByteIndex` implements [`IndexOps`] with [`ByteLength`] as its associated length
/// type, creating a bidirectional relationship that enables type-safe bounds checking
/// operations specific to byte-level indexing.
///
/// # Type System Disambiguation
///
/// `ByteIndex` is conceptually distinct from related types in the type system:
/// - **vs [`ByteLength`]**: Index is 0-based position, Length is 1-based size
/// - **vs [`ByteOffset`]**: Index is absolute position, Offset is relative displacement
/// - **vs [`Index`]**: `ByteIndex` is for byte positions, Index is for character
///   positions
///
/// Think of it as:
/// - [`ByteIndex`] = absolute byte coordinate (like "byte position 42")
/// - [`ByteLength`] = byte count/size (like "10 bytes long")
/// - [`ByteOffset`] = byte displacement (like "5 bytes forward from here")
///
/// > 💡 **See also**: For complete workflows showing `ByteIndex` used with UTF-8 string
/// > operations and bounds checking, see the [coordinates module
/// > documentation](crate::coordinates#common-workflows).
///
/// # Examples
///
/// ```rust
/// use r3bl_tui::{ByteIndex, ByteLength, byte_index, byte_len, ArrayBoundsCheck, ArrayOverflowResult};
///
/// // Create a byte index
/// let pos = byte_index(10);
/// let buffer_size = byte_len(20);
///
/// // Check if the byte position is valid for array access
/// assert_eq!(pos.overflows(buffer_size), ArrayOverflowResult::Within);
///
/// // Convert to character-based Index if needed
/// use r3bl_tui::Index;
/// let char_index: Index = pos.into();
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

impl ByteIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteIndex {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<ChUnit> for ByteIndex {
    fn from(it: ChUnit) -> Self { Self(crate::usize(it)) }
}

impl From<ByteIndex> for Index {
    fn from(it: ByteIndex) -> Self { Self::from(it.0) }
}

impl From<ByteOffset> for ByteIndex {
    fn from(it: ByteOffset) -> Self { Self(it.as_usize()) }
}

impl From<ByteIndex> for usize {
    fn from(it: ByteIndex) -> Self { it.0 }
}

impl From<u16> for ByteIndex {
    fn from(it: u16) -> Self { Self(it as usize) }
}

impl From<i32> for ByteIndex {
    #[allow(clippy::cast_sign_loss)]
    fn from(it: i32) -> Self { Self(it as usize) }
}

impl NumericConversions for ByteIndex {
    /// Convert the byte index to a usize value for numeric comparison, usually for array
    /// indexing operations.
    fn as_usize(&self) -> usize { self.0 }

    /// Convert the byte index to a u16 value for crossterm compatibility and other
    /// terminal operations.
    #[allow(clippy::cast_possible_truncation)]
    fn as_u16(&self) -> u16 { self.0 as u16 }
}

impl NumericValue for ByteIndex {}

impl IndexOps for ByteIndex {
    type LengthType = ByteLength;
}

/// Implement Add trait to enable `RangeBoundsExt` usage.
/// This allows `ByteIndex` to be used with `Range<ByteIndex>` for type-safe bounds
/// checking.
impl Add for ByteIndex {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output { Self(self.0 + other.0) }
}

/// Extension trait to enable conversion from `Range<ByteIndex>` to `Range<usize>` for
/// slice indexing.
///
/// This works around Rust's orphan rule which prevents implementing
/// `From<Range<ByteIndex>> for Range<usize>`. The method name mimics `.into()` behavior
/// while remaining legally implementable.
///
/// # Example
/// ```
/// use r3bl_tui::{ByteIndex, byte_index};
/// use r3bl_tui::ByteIndexRangeExt;
/// use std::ops::Range;
///
/// let byte_range: Range<ByteIndex> = byte_index(5)..byte_index(10);
/// let usize_range: Range<usize> = byte_range.to_usize_range();
/// assert_eq!(usize_range, 5..10);
/// ```
pub trait ByteIndexRangeExt {
    /// Convert a `Range<ByteIndex>` to `Range<usize>` for slice indexing.
    ///
    /// This method provides the functionality that would ideally be available via
    /// `.into()`, but Rust's orphan rule prevents implementing
    /// `From<Range<ByteIndex>> for Range<usize>` because the target type's head type
    /// `Range` is foreign (from `std`), even though `ByteIndex` in the source type is
    /// from our crate.
    fn to_usize_range(self) -> Range<usize>;
}

impl ByteIndexRangeExt for Range<ByteIndex> {
    fn to_usize_range(self) -> Range<usize> { self.start.as_usize()..self.end.as_usize() }
}

// ArrayBoundsCheck implementation for type-safe bounds checking
impl crate::ArrayBoundsCheck<crate::ByteLength> for ByteIndex {}
