// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Integer ranges over `i64`.

use bracket_core::{
    boundary::BoundaryPolicy,
    error::{ParseRangeError, RangeError},
    range::{Range, RangeIter},
};
use std::str::FromStr;

/// A range of `i64` values.
///
/// An omitted upper bound resolves to `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// # use bracket_value::integer::IntegerRange;
///
/// let r = IntegerRange::half_open_left(1, Some(5));
/// assert_eq!(r.to_string(), "(1, 5]");
/// assert_eq!(r.count(), 4);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct IntegerRange(Range<i64>);

impl_range_value!(IntegerRange, i64);

impl IntegerRange {
    /// Creates `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn closed(from: i64, to: Option<i64>) -> Self {
        Self(Range::closed(from, to))
    }

    /// Creates `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn open(from: i64, to: Option<i64>) -> Self {
        Self(Range::open(from, to))
    }

    /// Creates `(from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_left(from: i64, to: Option<i64>) -> Self {
        Self(Range::half_open_left(from, to))
    }

    /// Creates `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_right(from: i64, to: Option<i64>) -> Self {
        Self(Range::half_open_right(from, to))
    }

    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `value_object.integer_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_new(
        from: i64,
        to: Option<i64>,
        boundary: BoundaryPolicy,
    ) -> Result<Self, RangeError> {
        Range::try_new(from, to, boundary).map(Self)
    }

    /// Creates a closed range from optional bounds.
    ///
    /// `None` if `from` is absent; an absent `to` means `i64::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn from_nullable(from: Option<i64>, to: Option<i64>) -> Option<Self> {
        Range::from_nullable(from, to, BoundaryPolicy::Closed).map(Self)
    }

    /// Validated counterpart of [`from_nullable`](Self::from_nullable).
    ///
    /// # Errors
    ///
    /// Returns `value_object.integer_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_from_nullable(
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Option<Self>, RangeError> {
        Range::try_from_nullable(from, to, BoundaryPolicy::Closed).map(|range| range.map(Self))
    }

    /// Number of integers in the range.
    #[inline]
    pub fn count(&self) -> u64 {
        self.0.count()
    }

    /// Ascending iterator over the integers in the range.
    #[inline]
    pub fn iter(&self) -> RangeIter<i64> {
        self.0.iter()
    }
}

impl From<Range<i64>> for IntegerRange {
    #[inline]
    fn from(range: Range<i64>) -> Self {
        Self(range)
    }
}

impl IntoIterator for &IntegerRange {
    type Item = i64;
    type IntoIter = RangeIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for IntegerRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
