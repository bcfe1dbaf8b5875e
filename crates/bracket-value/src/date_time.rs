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

//! Date-time ranges over `chrono::NaiveDateTime`.
//!
//! Instants have no "next" value, so these ranges cannot be counted or
//! iterated. Their size is a duration measured between the raw endpoints;
//! the boundary policy only affects `contains` and `overlaps`.

use crate::iso_interval;
use bracket_core::{
    boundary::BoundaryPolicy,
    error::{ParseRangeError, RangeError},
    range::Range,
};
use chrono::{NaiveDateTime, TimeDelta};
use std::str::FromStr;

/// A range of local date-times.
///
/// An omitted upper bound resolves to `NaiveDateTime::MAX`.
///
/// # Examples
///
/// ```rust
/// # use bracket_value::date_time::LocalDateTimeRange;
/// # use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// let shift = LocalDateTimeRange::half_open_right(
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     Some(day.and_hms_opt(16, 30, 0).unwrap()),
/// );
///
/// assert_eq!(shift.duration_in_hours(), 8);
/// assert_eq!(shift.to_iso_string(), "2024-05-06T08:00:00/2024-05-06T16:30:00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LocalDateTimeRange(Range<NaiveDateTime>);

impl_range_value!(LocalDateTimeRange, NaiveDateTime);

impl LocalDateTimeRange {
    /// Creates `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn closed(from: NaiveDateTime, to: Option<NaiveDateTime>) -> Self {
        Self(Range::closed(from, to))
    }

    /// Creates `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn open(from: NaiveDateTime, to: Option<NaiveDateTime>) -> Self {
        Self(Range::open(from, to))
    }

    /// Creates `(from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_left(from: NaiveDateTime, to: Option<NaiveDateTime>) -> Self {
        Self(Range::half_open_left(from, to))
    }

    /// Creates `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_right(from: NaiveDateTime, to: Option<NaiveDateTime>) -> Self {
        Self(Range::half_open_right(from, to))
    }

    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_time_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_new(
        from: NaiveDateTime,
        to: Option<NaiveDateTime>,
        boundary: BoundaryPolicy,
    ) -> Result<Self, RangeError> {
        Range::try_new(from, to, boundary).map(Self)
    }

    /// Creates a closed range from optional bounds.
    ///
    /// `None` if `from` is absent; an absent `to` means `NaiveDateTime::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn from_nullable(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Option<Self> {
        Range::from_nullable(from, to, BoundaryPolicy::Closed).map(Self)
    }

    /// Validated counterpart of [`from_nullable`](Self::from_nullable).
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_time_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_from_nullable(
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    ) -> Result<Option<Self>, RangeError> {
        Range::try_from_nullable(from, to, BoundaryPolicy::Closed).map(|range| range.map(Self))
    }

    /// Time between the raw endpoints.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.0.end().signed_duration_since(self.0.start())
    }

    /// Whole hours between the raw endpoints, truncated toward zero.
    #[inline]
    pub fn duration_in_hours(&self) -> i64 {
        self.duration().num_hours()
    }

    /// The ISO-8601 interval `from/to`.
    pub fn to_iso_string(&self) -> String {
        iso_interval(&self.0)
    }
}

impl From<Range<NaiveDateTime>> for LocalDateTimeRange {
    #[inline]
    fn from(range: Range<NaiveDateTime>) -> Self {
        Self(range)
    }
}

impl FromStr for LocalDateTimeRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
