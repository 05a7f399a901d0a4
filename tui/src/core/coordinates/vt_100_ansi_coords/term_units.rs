// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type-safe 1-based terminal coordinates for ANSI escape sequences.
//!
//! This module provides the [`TermRow`] and [`TermCol`] types for terminal coordinates.
//! See type documentation for detailed usage and examples.
//! The [`vt_100_ansi_parser`] is the primary consumer of these types, along with
//! the [`offscreen_buffer`] module which uses them for VT 100 related operations.
//!
//! # Core Concept: Two Coordinate Systems
//!
//! Terminal operations use two distinct coordinate systems that must never be mixed:
//!
//! ```text
//! Terminal Coordinates (1-based)    Buffer Coordinates (0-based)
//! ┌─────────────────────────┐      ┌─────────────────────────┐
//! │ (1,1) (1,2) (1,3) ...   │      │ (0,0) (0,1) (0,2) ...   │
//! │ (2,1) (2,2) (2,3) ...   │      │ (1,0) (1,1) (1,2) ...   │
//! │ (3,1) (3,2) (3,3) ...   │      │ (2,0) (2,1) (2,2) ...   │
//! │ ...                     │      │ ...                     │
//! └─────────────────────────┘      └─────────────────────────┘
//!   ANSI sequences                   Arrays/buffers/vectors
//!   ESC[row;colH                     vec[row_idx][col_idx]
//! ```
//!
//! **Why This Matters**: ANSI escape sequences like `ESC[5;10H` use 1-based indexing
//! where `(1,1)` is the top-left corner. Internal data structures use 0-based indexing
//! where `(0,0)` is the top-left. Mixing these systems causes off-by-one errors.
//!
//! # Design Philosophy: Private Fields and Explicit Construction
//!
//! Both [`TermRow`] and [`TermCol`] use **private tuple fields** and provide **explicit
//! named constructors** instead of a generic `new()` method. This design enforces clarity
//! at call sites about the origin and semantics of coordinate data.
//!
//! ## Why Private Fields?
//!
//! The inner [`NonZeroU16`] fields are intentionally private to prevent ambiguous
//! construction like `TermRow(some_nz)` where the data provenance is unclear. This is
//! especially critical in a codebase managing two coordinate systems (1-based terminal,
//! 0-based buffer).
//!
//! ## Constructor Methods
//!
//! | Constructor                    | Use When                                        | Example                       |
//! |--------------------------------|-------------------------------------------------|-------------------------------|
//! | [`from_raw_non_zero_value()`]  | Wrapping external `NonZeroU16` (ANSI params)    | VT-100 parser receives data   |
//! | [`from_zero_based()`]          | Converting from buffer index to terminal coord  | `RowIndex(4)` → `TermRow(5)`  |
//! | [`term_row()`]/[`term_col()`]  | Test code with known-safe values                | `term_row(nz(5))` in tests    |
//!
//! ## Benefits of This Design
//!
//! ```rust
//! use r3bl_tui::{TermRow, RowIndex};
//! use std::num::NonZeroU16;
//!
//! // ✅ Clear: this is raw ANSI parameter data
//! let from_ansi = TermRow::from_raw_non_zero_value(NonZeroU16::new(5).unwrap());
//!
//! // ✅ Clear: this is converted from 0-based buffer coordinate
//! let from_buffer = TermRow::from_zero_based(RowIndex::from(4));
//!
//! // ❌ Won't compile: can't bypass named constructors
//! // let ambiguous = TermRow(some_nz);  // Error: field is private
//! ```
//!
//! This approach makes code self-documenting and grep-able—you can search for
//! `from_raw_non_zero_value` to find all ANSI parsing entry points.
//!
//! > 💡 **See also**: For complete workflows showing VT-100 coordinate conversion and
//! > integration with buffer coordinates, see the [coordinates module
//! > documentation](crate::coordinates#common-workflows).
//!
//! # Common Pitfalls
//!
//! - **Off-by-one errors**: Always convert explicitly, never manually add/subtract 1
//! - **Type confusion**: Use [`TermRow`]/[`TermCol`] for ANSI, [`RowIndex`]/[`ColIndex`]
//!   for buffers
//! - **Missing conversion**: Converting to buffer coords is infallible (always safe), but
//!   forgetting to convert leads to accessing wrong cells
//!
//! [`from_raw_non_zero_value()`]: TermRow::from_raw_non_zero_value
//! [`from_zero_based()`]: TermRow::from_zero_based
//! [`vt_100_ansi_parser`]: crate::core::pty_mux::vt_100_ansi_parser
//! [`offscreen_buffer`]: crate::tui::terminal_lib_backends::offscreen_buffer

use crate::{ColIndex, NumericConversions, RowIndex,
            vt_100_ansi_parser::protocols::csi_codes::CsiSequence};
use std::{num::NonZeroU16, ops::Add};

/// Internal macro to implement all necessary traits and methods for terminal coordinate
/// types.
///
/// This macro generates:
/// - [`NumericConversions`] trait implementation for reading values
/// - [`From<NonZeroU16>`] for construction
/// - [`Display`] trait for formatting
/// - [`from_raw_non_zero_value()`] constructor for creating instances from raw
///   `NonZeroU16`
/// - [`value()`] for extracting the inner `NonZeroU16`
/// - [`as_u16()`] for extracting the raw 1-based value as `u16`
/// - [`from_zero_based()`] for converting from 0-based buffer indices
/// - [`to_zero_based()`] for converting to 0-based buffer indices
///
/// [`NumericConversions`]: crate::core::coordinates::NumericConversions
/// [`From<NonZeroU16>`]: std::convert::From
/// [`Display`]: std::fmt::Display
macro_rules! generate_impl_term_unit {
    (
        /* Generate this 1 based type */ $term_index_type:ident,
        /* Use this associated 0 based type for conversion */ $index_type:ident
    ) => {
        impl NumericConversions for $term_index_type {
            fn as_usize(&self) -> usize { self.0.get() as usize }
            fn as_u16(&self) -> u16 { self.0.get() }
        }

        impl ::std::fmt::Display for $term_index_type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0.get())
            }
        }

        impl $term_index_type {
            /// Create a 1-based terminal coordinate from a raw [`NonZeroU16`] value.
            ///
            /// Use this constructor when wrapping external [`NonZeroU16`] data, such as
            /// values parsed from ANSI escape sequence parameters.
            #[must_use]
            pub const fn from_raw_non_zero_value(value: NonZeroU16) -> Self {
                Self(value)
            }

            /// Get the inner [`NonZeroU16`] value.
            ///
            /// This provides access to the raw 1-based terminal coordinate value.
            /// Use this when you need the [`NonZeroU16`] representation, for example
            /// when serializing or passing to external APIs.
            #[must_use]
            pub const fn value(self) -> NonZeroU16 { self.0 }

            /// Get the raw 1-based value as a [`u16`].
            ///
            /// This is a convenience method that extracts the underlying [`u16`] from
            /// the [`NonZeroU16`] wrapper. Most code should use [`as_usize()`] for
            /// general numeric operations or [`value()`] for accessing the
            /// [`NonZeroU16`].
            ///
            /// [`as_usize()`]: Self::as_usize
            /// [`value()`]: Self::value
            #[must_use]
            pub const fn as_u16(self) -> u16 { self.0.get() }

            /// Convert from 0-based `index_type` to 1-based terminal coordinate.
            #[must_use]
            pub fn from_zero_based(index: $index_type) -> Self {
                let nz_value = index.as_u16() + 1;
                // SAFETY: 0-based `index_type` + 1 is always >= 1
                debug_assert!(nz_value >= 1);
                Self::from_raw_non_zero_value(unsafe {
                    NonZeroU16::new_unchecked(nz_value)
                })
            }

            /// Convert to 0-based `index_type` for buffer operations.
            #[must_use]
            pub fn to_zero_based(&self) -> $index_type {
                <$index_type>::from(self.as_u16().saturating_sub(1))
            }
        }
    };
}

/// 1-based row coordinate for terminal ANSI sequences.
///
/// Uses [`NonZeroU16`] as mandated by the VT-100 specification, which defines terminal
/// coordinates as 16-bit unsigned integers with valid values ranging from 1 to 65,535.
///
/// # Construction
///
/// See the [module-level design
/// philosophy](self#design-philosophy-private-fields-and-explicit-construction)
/// for why this type uses private fields and explicit constructors.
///
/// Use these methods to create `TermRow` values:
/// - [`from_raw_non_zero_value()`] - Wrap external `NonZeroU16` data (ANSI parameters)
/// - [`from_zero_based()`] - Convert from 0-based [`RowIndex`] to 1-based terminal
///   coordinate
/// - [`term_row()`] - Convenience helper (primarily for tests)
///
/// # Coordinate System
///
/// `TermRow` represents **1-based terminal coordinates** used in ANSI escape sequences.
/// This is distinct from:
/// - [`RowIndex`] - 0-based buffer/array positions
///
/// # Example
///
/// ```rust
/// use r3bl_tui::{TermRow, RowIndex, term_row};
/// use std::num::NonZeroU16;
///
/// // Create from ANSI parameter
/// let from_ansi = TermRow::from_raw_non_zero_value(NonZeroU16::new(5).unwrap());
///
/// // Convert from buffer index (0-based → 1-based)
/// let from_buffer = TermRow::from_zero_based(RowIndex::from(4));
/// assert_eq!(from_ansi, from_buffer); // Both represent row 5
///
/// // Convert to buffer index (1-based → 0-based)
/// let buffer_idx = from_ansi.to_zero_based();
/// assert_eq!(buffer_idx, RowIndex::from(4));
/// ```
///
/// [`from_raw_non_zero_value()`]: Self::from_raw_non_zero_value
/// [`from_zero_based()`]: Self::from_zero_based
/// [`term_row()`]: term_row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRow(NonZeroU16);
generate_impl_term_unit!(
    /* Add impl to this 1-based type */ TermRow,
    /* Use this associated 0-based type */ RowIndex
);

/// Create a [`TermRow`] from a [`NonZeroU16`] value.
#[must_use]
pub const fn term_row(value: NonZeroU16) -> TermRow {
    TermRow::from_raw_non_zero_value(value)
}

/// 1-based column coordinate for terminal ANSI sequences.
///
/// Uses [`NonZeroU16`] as mandated by the VT-100 specification, which defines terminal
/// coordinates as 16-bit unsigned integers with valid values ranging from 1 to 65,535.
///
/// # Construction
///
/// See the [module-level design
/// philosophy](self#design-philosophy-private-fields-and-explicit-construction)
/// for why this type uses private fields and explicit constructors.
///
/// Use these methods to create `TermCol` values:
/// - [`from_raw_non_zero_value()`] - Wrap external `NonZeroU16` data (ANSI parameters)
/// - [`from_zero_based()`] - Convert from 0-based [`ColIndex`] to 1-based terminal
///   coordinate
/// - [`term_col()`] - Convenience helper (primarily for tests)
///
/// # Coordinate System
///
/// `TermCol` represents **1-based terminal coordinates** used in ANSI escape sequences.
/// This is distinct from:
/// - [`ColIndex`] - 0-based buffer/array positions
///
/// # Example
///
/// ```rust
/// use r3bl_tui::{TermCol, ColIndex, term_col};
/// use std::num::NonZeroU16;
///
/// // Create from ANSI parameter
/// let from_ansi = TermCol::from_raw_non_zero_value(NonZeroU16::new(10).unwrap());
///
/// // Convert from buffer index (0-based → 1-based)
/// let from_buffer = TermCol::from_zero_based(ColIndex::from(9));
/// assert_eq!(from_ansi, from_buffer); // Both represent column 10
///
/// // Convert to buffer index (1-based → 0-based)
/// let buffer_idx = from_ansi.to_zero_based();
/// assert_eq!(buffer_idx, ColIndex::from(9));
/// ```
///
/// [`from_raw_non_zero_value()`]: Self::from_raw_non_zero_value
/// [`from_zero_based()`]: Self::from_zero_based
/// [`term_col()`]: term_col
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermCol(NonZeroU16);
generate_impl_term_unit!(
    /* Add impl to this 1-based type */ TermCol,
    /* Use this associated 0-based type */ ColIndex
);

/// Create a [`TermCol`] from a [`NonZeroU16`] value.
#[must_use]
pub const fn term_col(value: NonZeroU16) -> TermCol {
    TermCol::from_raw_non_zero_value(value)
}

/// Safe conversions from buffer coordinates (0-based) to terminal coordinates (1-based).
mod from_buffer_coords {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<RowIndex> for TermRow {
        /// Convert from 0-based [`RowIndex`] to 1-based [`TermRow`].
        ///
        /// This is always safe because the conversion adds 1, guaranteeing a non-zero
        /// value.
        fn from(value: RowIndex) -> Self { Self::from_zero_based(value) }
    }

    impl From<ColIndex> for TermCol {
        /// Convert from 0-based [`ColIndex`] to 1-based [`TermCol`].
        ///
        /// This is always safe because the conversion adds 1, guaranteeing a non-zero
        /// value.
        fn from(value: ColIndex) -> Self { Self::from_zero_based(value) }
    }
}

mod add_ops_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Add [`TermCol`] to [`TermRow`] to create a cursor position.
    impl Add<TermCol> for TermRow {
        type Output = CsiSequence;

        fn add(self, rhs: TermCol) -> Self::Output {
            CsiSequence::CursorPosition {
                row: self,
                col: rhs,
            }
        }
    }

    /// Add [`TermRow`] to [`TermCol`] to create a cursor position.
    impl Add<TermRow> for TermCol {
        type Output = CsiSequence;

        fn add(self, rhs: TermRow) -> Self::Output {
            CsiSequence::CursorPosition {
                row: rhs,
                col: self,
            }
        }
    }
}
