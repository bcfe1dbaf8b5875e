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

//! Calendar date ranges.
//!
//! `LocalDateRange` accepts every boundary policy. `LocalDateRangeHalfOpenRight`
//! always is `[from, to)`, so consecutive periods can share an endpoint
//! without overlapping: a month is `[first day, first day of next month)`.

use crate::iso_interval;
use bracket_core::{
    boundary::BoundaryPolicy,
    error::{ParseRangeError, RangeError},
    range::{Range, RangeIter},
};
use chrono::{Months, NaiveDate};
use std::str::FromStr;

/// A range of calendar dates.
///
/// An omitted upper bound resolves to `NaiveDate::MAX`.
///
/// # Examples
///
/// ```rust
/// # use bracket_value::date::LocalDateRange;
/// # use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let january = LocalDateRange::closed(from, Some(to));
///
/// assert_eq!(january.days(), 31);
/// assert_eq!(january.to_string(), "[2024-01-01, 2024-01-31]");
/// assert_eq!(january.to_iso_string(), "2024-01-01/2024-01-31");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LocalDateRange(Range<NaiveDate>);

impl_range_value!(LocalDateRange, NaiveDate);

impl LocalDateRange {
    /// Creates `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn closed(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self(Range::closed(from, to))
    }

    /// Creates `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn open(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self(Range::open(from, to))
    }

    /// Creates `(from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_left(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self(Range::half_open_left(from, to))
    }

    /// Creates `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_right(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self(Range::half_open_right(from, to))
    }

    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_new(
        from: NaiveDate,
        to: Option<NaiveDate>,
        boundary: BoundaryPolicy,
    ) -> Result<Self, RangeError> {
        Range::try_new(from, to, boundary).map(Self)
    }

    /// Creates a closed range from optional bounds.
    ///
    /// `None` if `from` is absent; an absent `to` means `NaiveDate::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn from_nullable(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        Range::from_nullable(from, to, BoundaryPolicy::Closed).map(Self)
    }

    /// Validated counterpart of [`from_nullable`](Self::from_nullable).
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_from_nullable(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Option<Self>, RangeError> {
        Range::try_from_nullable(from, to, BoundaryPolicy::Closed).map(|range| range.map(Self))
    }

    /// Number of days in the range.
    #[inline]
    pub fn days(&self) -> u64 {
        self.0.count()
    }

    /// Ascending iterator over the days in the range.
    #[inline]
    pub fn iter(&self) -> RangeIter<NaiveDate> {
        self.0.iter()
    }

    /// The ISO-8601 interval `from/to`.
    pub fn to_iso_string(&self) -> String {
        iso_interval(&self.0)
    }
}

impl From<Range<NaiveDate>> for LocalDateRange {
    #[inline]
    fn from(range: Range<NaiveDate>) -> Self {
        Self(range)
    }
}

impl From<LocalDateRangeHalfOpenRight> for LocalDateRange {
    #[inline]
    fn from(range: LocalDateRangeHalfOpenRight) -> Self {
        Self(range.0)
    }
}

impl IntoIterator for &LocalDateRange {
    type Item = NaiveDate;
    type IntoIter = RangeIter<NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for LocalDateRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A date range fixed to `[from, to)`.
///
/// # Examples
///
/// ```rust
/// # use bracket_value::date::LocalDateRangeHalfOpenRight;
/// # use chrono::NaiveDate;
///
/// let february = LocalDateRangeHalfOpenRight::month(2024, 2).unwrap();
/// assert_eq!(february.days(), 29);
/// assert_eq!(february.to_string(), "[2024-02-01, 2024-03-01)");
/// assert!(!february.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct LocalDateRangeHalfOpenRight(Range<NaiveDate>);

impl_range_value!(LocalDateRangeHalfOpenRight, NaiveDate);

impl LocalDateRangeHalfOpenRight {
    const BOUNDARY: BoundaryPolicy = BoundaryPolicy::HalfOpenRight;

    /// Creates `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self(Range::new(from, to, Self::BOUNDARY))
    }

    /// Creates a validated `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_new(from: NaiveDate, to: Option<NaiveDate>) -> Result<Self, RangeError> {
        Range::try_new(from, to, Self::BOUNDARY).map(Self)
    }

    /// `None` if `from` is absent; an absent `to` means `NaiveDate::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn from_nullable(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        Range::from_nullable(from, to, Self::BOUNDARY).map(Self)
    }

    /// Validated counterpart of [`from_nullable`](Self::from_nullable).
    ///
    /// # Errors
    ///
    /// Returns `value_object.date_range.invalid_range` if `from > to`.
    #[inline]
    pub fn try_from_nullable(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Option<Self>, RangeError> {
        Range::try_from_nullable(from, to, Self::BOUNDARY).map(|range| range.map(Self))
    }

    /// The whole calendar month `[first day, first day of the next month)`.
    ///
    /// Returns `None` if `month` is not in `1..=12` or the year is out of range.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = first.checked_add_months(Months::new(1))?;
        Some(Self::new(first, Some(next)))
    }

    /// Number of days in the range.
    #[inline]
    pub fn days(&self) -> u64 {
        self.0.count()
    }

    /// Ascending iterator over the days in the range.
    #[inline]
    pub fn iter(&self) -> RangeIter<NaiveDate> {
        self.0.iter()
    }

    /// The ISO-8601 interval `from/to`.
    pub fn to_iso_string(&self) -> String {
        iso_interval(&self.0)
    }
}

impl IntoIterator for &LocalDateRangeHalfOpenRight {
    type Item = NaiveDate;
    type IntoIter = RangeIter<NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for LocalDateRangeHalfOpenRight {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let range: Range<NaiveDate> = s.parse()?;
        if range.boundary() != Self::BOUNDARY {
            return Err(ParseRangeError::UnexpectedBoundary {
                expected: Self::BOUNDARY,
                found: range.boundary(),
            });
        }
        Ok(Self(range))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalDateRangeHalfOpenRight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let range = <Range<NaiveDate> as serde::Deserialize>::deserialize(deserializer)?;
        if range.boundary() != Self::BOUNDARY {
            return Err(serde::de::Error::custom(format_args!(
                "expected a {} range, found {}",
                Self::BOUNDARY,
                range.boundary()
            )));
        }
        Ok(Self(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_per_policy() {
        let from = date(2024, 1, 1);
        let to = date(2024, 1, 10);
        assert_eq!(LocalDateRange::closed(from, Some(to)).days(), 10);
        assert_eq!(LocalDateRange::open(from, Some(to)).days(), 8);
        assert_eq!(LocalDateRange::half_open_left(from, Some(to)).days(), 9);
        assert_eq!(LocalDateRange::half_open_right(from, Some(to)).days(), 9);
        assert_eq!(LocalDateRange::closed(from, Some(from)).days(), 1);
        assert_eq!(LocalDateRange::open(from, Some(from)).days(), 0);
    }

    #[test]
    fn test_iteration_crosses_month_boundary() {
        let r = LocalDateRange::half_open_left(date(2024, 2, 27), Some(date(2024, 3, 1)));
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_rendering() {
        let r = LocalDateRange::half_open_right(date(2024, 1, 1), Some(date(2024, 2, 1)));
        assert_eq!(r.to_string(), "[2024-01-01, 2024-02-01)");
        assert_eq!(r.to_iso_string(), "2024-01-01/2024-02-01");
    }

    #[test]
    fn test_invalid_range_code() {
        let err = LocalDateRange::try_new(
            date(2024, 2, 1),
            Some(date(2024, 1, 1)),
            BoundaryPolicy::Closed,
        )
        .unwrap_err();
        assert_eq!(err.code(), "value_object.date_range.invalid_range");

        let err = LocalDateRangeHalfOpenRight::try_new(date(2024, 2, 1), Some(date(2024, 1, 1)))
            .unwrap_err();
        assert_eq!(err.code(), "value_object.date_range.invalid_range");
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(LocalDateRange::from_nullable(None, Some(date(2024, 1, 1))), None);

        let open_ended = LocalDateRange::from_nullable(Some(date(2024, 1, 1)), None).unwrap();
        assert_eq!(open_ended.end(), NaiveDate::MAX);
        assert_eq!(open_ended.boundary(), BoundaryPolicy::Closed);

        assert_eq!(
            LocalDateRange::try_from_nullable(Some(date(2024, 1, 2)), Some(date(2024, 1, 1)))
                .unwrap_err()
                .code(),
            "value_object.date_range.invalid_range"
        );
    }

    #[test]
    fn test_half_open_right_is_fixed() {
        let r = LocalDateRangeHalfOpenRight::new(date(2024, 1, 1), Some(date(2024, 1, 3)));
        assert_eq!(r.boundary(), BoundaryPolicy::HalfOpenRight);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![date(2024, 1, 1), date(2024, 1, 2)]);

        let nullable = LocalDateRangeHalfOpenRight::from_nullable(Some(date(2024, 1, 1)), None)
            .unwrap();
        assert_eq!(nullable.boundary(), BoundaryPolicy::HalfOpenRight);
        assert_eq!(nullable.end(), NaiveDate::MAX);
        assert_eq!(LocalDateRangeHalfOpenRight::try_from_nullable(None, None), Ok(None));
    }

    #[test]
    fn test_month() {
        let january = LocalDateRangeHalfOpenRight::month(2023, 1).unwrap();
        assert_eq!(january.start(), date(2023, 1, 1));
        assert_eq!(january.end(), date(2023, 2, 1));
        assert_eq!(january.days(), 31);

        let december = LocalDateRangeHalfOpenRight::month(2023, 12).unwrap();
        assert_eq!(december.end(), date(2024, 1, 1));

        assert_eq!(LocalDateRangeHalfOpenRight::month(2024, 2).unwrap().days(), 29);
        assert_eq!(LocalDateRangeHalfOpenRight::month(2023, 2).unwrap().days(), 28);
        assert!(LocalDateRangeHalfOpenRight::month(2024, 13).is_none());
        assert!(LocalDateRangeHalfOpenRight::month(2024, 0).is_none());
    }

    #[test]
    fn test_consecutive_months_do_not_overlap() {
        let january = LocalDateRangeHalfOpenRight::month(2024, 1).unwrap();
        let february = LocalDateRangeHalfOpenRight::month(2024, 2).unwrap();
        assert!(!january.overlaps(&february));
        assert!(!february.overlaps(&january));

        let whole_quarter = LocalDateRange::closed(date(2024, 1, 1), Some(date(2024, 3, 31)));
        assert!(whole_quarter.overlaps(&february));
    }

    #[test]
    fn test_widening_conversion() {
        let month = LocalDateRangeHalfOpenRight::month(2024, 4).unwrap();
        let general = LocalDateRange::from(month);
        assert_eq!(general.boundary(), BoundaryPolicy::HalfOpenRight);
        assert_eq!(general.days(), 30);
    }

    #[test]
    fn test_parse() {
        let r: LocalDateRange = "(2024-01-01, 2024-01-05]".parse().unwrap();
        assert_eq!(r, LocalDateRange::half_open_left(date(2024, 1, 1), Some(date(2024, 1, 5))));

        let fixed: LocalDateRangeHalfOpenRight = "[2024-01-01, 2024-02-01)".parse().unwrap();
        assert_eq!(fixed, LocalDateRangeHalfOpenRight::month(2024, 1).unwrap());

        assert_eq!(
            "[2024-01-01, 2024-02-01]".parse::<LocalDateRangeHalfOpenRight>().unwrap_err(),
            ParseRangeError::UnexpectedBoundary {
                expected: BoundaryPolicy::HalfOpenRight,
                found: BoundaryPolicy::Closed,
            }
        );
    }
}
