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

use crate::{
    boundary::BoundaryPolicy,
    domain::{DiscreteDomain, OrderedDomain},
    error::{ParseRangeError, RangeError},
};
use regex::Regex;
use std::{
    cmp::{Ordering, max, min},
    fmt,
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    str::FromStr,
    sync::LazyLock,
};

static RANGE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\[(])\s*([^,]+?)\s*,\s*([^,]+?)\s*([\])])\s*$")
        .expect("range literal pattern must compile")
});

/// An interval `from .. to` over an ordered domain with an explicit boundary policy.
///
/// Ranges are immutable values. Equality is structural over
/// `(from, to, boundary)`, so `[1, 5]` and `[1, 6)` are different ranges even
/// though they contain the same integers.
///
/// # Invariants
/// `from` must always be less than or equal to `to`. `from == to` is allowed
/// for every policy; only the closed policy contains that single point.
///
/// # Omitted bounds
/// Every factory takes the upper bound as `Option<T>`. `None` means
/// "unbounded above" and resolves to `T::DOMAIN_MAX`. In the nullable
/// factories an absent *lower* bound means "no range at all" instead; the
/// asymmetry is intentional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range<T>
where
    T: OrderedDomain,
{
    from: T,
    to: T,
    boundary: BoundaryPolicy,
}

impl<T> Range<T>
where
    T: OrderedDomain,
{
    /// Creates a new range from trusted bounds.
    ///
    /// An omitted `to` resolves to `T::DOMAIN_MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` after resolving the upper bound. Untrusted input
    /// must go through [`try_new`](Self::try_new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::{boundary::BoundaryPolicy, range::Range};
    ///
    /// let r = Range::new(1i64, Some(10), BoundaryPolicy::HalfOpenRight);
    /// assert_eq!(r.to_string(), "[1, 10)");
    ///
    /// let unbounded = Range::new(1i64, None, BoundaryPolicy::Closed);
    /// assert_eq!(unbounded.end(), i64::MAX);
    /// ```
    #[inline]
    pub fn new(from: T, to: Option<T>, boundary: BoundaryPolicy) -> Self {
        let to = to.unwrap_or(T::DOMAIN_MAX);
        assert!(
            from <= to,
            "Invalid range: from must be less than or equal to to, got {:?} > {:?}",
            from,
            to
        );
        Self { from, to, boundary }
    }

    /// Creates a closed range `[from, to]` from trusted bounds.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn closed(from: T, to: Option<T>) -> Self {
        Self::new(from, to, BoundaryPolicy::Closed)
    }

    /// Creates an open range `(from, to)` from trusted bounds.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn open(from: T, to: Option<T>) -> Self {
        Self::new(from, to, BoundaryPolicy::Open)
    }

    /// Creates a left-open range `(from, to]` from trusted bounds.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_left(from: T, to: Option<T>) -> Self {
        Self::new(from, to, BoundaryPolicy::HalfOpenLeft)
    }

    /// Creates a right-open range `[from, to)` from trusted bounds.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[inline]
    pub fn half_open_right(from: T, to: Option<T>) -> Self {
        Self::new(from, to, BoundaryPolicy::HalfOpenRight)
    }

    /// Creates a new range without checking invariants in release builds.
    ///
    /// The caller must ensure `from <= to`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(from: T, to: T, boundary: BoundaryPolicy) -> Self {
        debug_assert!(
            from <= to,
            "Invalid range: from must be less than or equal to to"
        );
        Self { from, to, boundary }
    }

    /// Creates a new range if the bounds are valid.
    ///
    /// An omitted `to` resolves to `T::DOMAIN_MAX` before validation.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] carrying `T::INVALID_RANGE_CODE`
    /// if `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::{boundary::BoundaryPolicy, range::Range};
    ///
    /// assert!(Range::try_new(1i64, Some(10), BoundaryPolicy::Open).is_ok());
    /// assert!(Range::try_new(5i64, Some(5), BoundaryPolicy::Open).is_ok());
    /// assert!(Range::try_new(10i64, Some(1), BoundaryPolicy::Open).is_err());
    /// ```
    pub fn try_new(from: T, to: Option<T>, boundary: BoundaryPolicy) -> Result<Self, RangeError> {
        let to = to.unwrap_or(T::DOMAIN_MAX);
        if from <= to {
            return Ok(Self { from, to, boundary });
        }

        tracing::debug!(
            code = T::INVALID_RANGE_CODE,
            from = ?from,
            to = ?to,
            "rejected range with start after end"
        );
        Err(RangeError::InvalidRange {
            code: T::INVALID_RANGE_CODE,
        })
    }

    /// Creates a range from optional bounds.
    ///
    /// Returns `None` if `from` is absent, whatever `to` is. An absent `to`
    /// resolves to `T::DOMAIN_MAX` and still yields a range.
    ///
    /// # Panics
    ///
    /// Panics if both bounds are present and `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::{boundary::BoundaryPolicy, range::Range};
    ///
    /// assert!(Range::<i64>::from_nullable(None, Some(10), BoundaryPolicy::Closed).is_none());
    ///
    /// let r = Range::from_nullable(Some(1i64), None, BoundaryPolicy::Closed).unwrap();
    /// assert_eq!(r.end(), i64::MAX);
    /// ```
    #[inline]
    pub fn from_nullable(from: Option<T>, to: Option<T>, boundary: BoundaryPolicy) -> Option<Self> {
        from.map(|from| Self::new(from, to, boundary))
    }

    /// Fallible counterpart of [`from_nullable`](Self::from_nullable).
    ///
    /// An absent `from` yields `Ok(None)`; otherwise the bounds are validated
    /// by [`try_new`](Self::try_new).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `from > to`.
    #[inline]
    pub fn try_from_nullable(
        from: Option<T>,
        to: Option<T>,
        boundary: BoundaryPolicy,
    ) -> Result<Option<Self>, RangeError> {
        from.map(|from| Self::try_new(from, to, boundary)).transpose()
    }

    /// Returns the `from` endpoint of the range.
    #[inline]
    pub const fn start(&self) -> T {
        self.from
    }

    /// Returns the `to` endpoint of the range.
    #[inline]
    pub const fn end(&self) -> T {
        self.to
    }

    /// Returns the boundary policy of the range.
    #[inline]
    pub const fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Returns `true` if `point` lies in the range under its boundary policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// let r = Range::half_open_right(0i64, Some(10));
    /// assert!(r.contains(0));
    /// assert!(r.contains(9));
    /// assert!(!r.contains(10));
    ///
    /// // A degenerate range only holds its point when closed.
    /// assert!(Range::closed(5i64, Some(5)).contains(5));
    /// assert!(!Range::half_open_right(5i64, Some(5)).contains(5));
    /// ```
    pub fn contains(&self, point: T) -> bool {
        if self.from == self.to {
            return self.boundary == BoundaryPolicy::Closed && point == self.from;
        }

        match (point.cmp(&self.from), point.cmp(&self.to)) {
            (Ordering::Greater, Ordering::Less) => true,
            (Ordering::Equal, _) => self.boundary.includes_left(),
            (_, Ordering::Equal) => self.boundary.includes_right(),
            _ => false,
        }
    }

    /// Returns `true` if some point is contained by both ranges.
    ///
    /// When the ranges only touch, the shared point must be included by both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// assert!(Range::closed(1i64, Some(5)).overlaps(&Range::closed(5, Some(10))));
    /// assert!(!Range::open(1i64, Some(5)).overlaps(&Range::open(5, Some(10))));
    /// assert!(!Range::half_open_right(1i64, Some(5)).overlaps(&Range::half_open_left(5, Some(10))));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        let max_from = max(self.from, other.from);
        let min_to = min(self.to, other.to);

        match max_from.cmp(&min_to) {
            Ordering::Less => true,
            Ordering::Equal => self.contains(max_from) && other.contains(max_from),
            Ordering::Greater => false,
        }
    }

    /// Calculates the intersection of two ranges.
    ///
    /// Each endpoint of the result is included exactly when both ranges
    /// contain it. Returns `None` if the ranges do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// let a = Range::closed(1i64, Some(5));
    /// let b = Range::open(3i64, Some(10));
    /// assert_eq!(a.intersection(&b), Some(Range::half_open_left(3, Some(5))));
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }

        let from = max(self.from, other.from);
        let to = min(self.to, other.to);
        let includes_left = self.contains(from) && other.contains(from);
        let includes_right = self.contains(to) && other.contains(to);

        Some(Self::new_unchecked(
            from,
            to,
            BoundaryPolicy::from_inclusion(includes_left, includes_right),
        ))
    }

    /// Returns `true` if both bounds of `other` lie within the bounds of `self`.
    ///
    /// A shared endpoint is only acceptable if `self` includes it or `other`
    /// excludes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// let outer = Range::half_open_right(0i64, Some(10));
    /// assert!(outer.encloses(&Range::closed(0, Some(9))));
    /// assert!(outer.encloses(&Range::open(0, Some(10))));
    /// assert!(!outer.encloses(&Range::closed(0, Some(10))));
    /// ```
    pub fn encloses(&self, other: &Self) -> bool {
        let left = match self.from.cmp(&other.from) {
            Ordering::Less => true,
            Ordering::Equal => {
                self.boundary.includes_left() || !other.boundary.includes_left()
            }
            Ordering::Greater => false,
        };
        let right = match other.to.cmp(&self.to) {
            Ordering::Less => true,
            Ordering::Equal => {
                self.boundary.includes_right() || !other.boundary.includes_right()
            }
            Ordering::Greater => false,
        };
        left && right
    }
}

impl<T> Range<T>
where
    T: DiscreteDomain,
{
    /// Returns the number of points in the range.
    ///
    /// The inclusive span `distance(from, to) + 1` minus one for every
    /// excluded endpoint, never below zero. Saturates at `u64::MAX` only when
    /// the true count does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// assert_eq!(Range::closed(1i64, Some(5)).count(), 5);
    /// assert_eq!(Range::open(1i64, Some(5)).count(), 3);
    /// assert_eq!(Range::open(5i64, Some(5)).count(), 0);
    /// ```
    #[inline]
    pub fn count(&self) -> u64 {
        let distance = self.from.distance(self.to);
        match self.boundary.excluded_endpoints() {
            0 => distance.saturating_add(1),
            excluded => distance.saturating_sub(excluded - 1),
        }
    }

    /// Creates an ascending iterator over the points in the range.
    ///
    /// The iterator is lazy and can be created any number of times from the
    /// same range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::range::Range;
    ///
    /// let r = Range::half_open_left(1i64, Some(4));
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self)
    }
}

/// An iterator over the points contained within a `Range` over a discrete domain.
///
/// Stops at the last contained point without ever stepping past
/// `T::DOMAIN_MAX`.
#[derive(Clone, Debug)]
pub struct RangeIter<T>
where
    T: DiscreteDomain,
{
    // Inclusive bounds of the points not yet yielded.
    remaining: Option<(T, T)>,
}

impl<T> RangeIter<T>
where
    T: DiscreteDomain,
{
    fn new(range: &Range<T>) -> Self {
        let first = if range.boundary.includes_left() {
            Some(range.from)
        } else {
            range.from.successor()
        };
        let last = if range.boundary.includes_right() {
            Some(range.to)
        } else {
            range.to.predecessor()
        };

        let remaining = match (first, last) {
            (Some(first), Some(last)) if first <= last => Some((first, last)),
            _ => None,
        };
        Self { remaining }
    }
}

impl<T> Iterator for RangeIter<T>
where
    T: DiscreteDomain,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            front.successor().map(|next| (next, back))
        } else {
            None
        };
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (0, Some(0)),
            Some((front, back)) => match front.distance(back).checked_add(1) {
                Some(len) => match usize::try_from(len) {
                    Ok(len) => (len, Some(len)),
                    Err(_) => (usize::MAX, None),
                },
                None => (usize::MAX, None),
            },
        }
    }
}

impl<T> DoubleEndedIterator for RangeIter<T>
where
    T: DiscreteDomain,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            back.predecessor().map(|prev| (front, prev))
        } else {
            None
        };
        Some(back)
    }
}

impl<T> FusedIterator for RangeIter<T> where T: DiscreteDomain {}

impl<T> IntoIterator for Range<T>
where
    T: DiscreteDomain,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: DiscreteDomain,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<Range<T>> for Range<T>
where
    T: OrderedDomain,
{
    #[inline]
    fn as_ref(&self) -> &Range<T> {
        self
    }
}

impl<T> fmt::Display for Range<T>
where
    T: OrderedDomain,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.boundary.opening_bracket())?;
        self.from.fmt_canonical(f)?;
        f.write_str(", ")?;
        self.to.fmt_canonical(f)?;
        write!(f, "{}", self.boundary.closing_bracket())
    }
}

fn parse_endpoint<T>(token: &str) -> Result<T, ParseRangeError>
where
    T: FromStr,
{
    token.parse().map_err(|_| ParseRangeError::Endpoint {
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}

impl<T> FromStr for Range<T>
where
    T: OrderedDomain + FromStr,
{
    type Err = ParseRangeError;

    /// Parses the canonical bracket notation, e.g. `"[1, 10)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(captures) = RANGE_LITERAL.captures(s) else {
            tracing::debug!(literal = s, "malformed range literal");
            return Err(ParseRangeError::Malformed(s.to_owned()));
        };

        let brackets = captures[1].chars().zip(captures[4].chars()).next();
        let Some(boundary) =
            brackets.and_then(|(open, close)| BoundaryPolicy::from_brackets(open, close))
        else {
            return Err(ParseRangeError::Malformed(s.to_owned()));
        };
        let from = parse_endpoint(&captures[2])?;
        let to = parse_endpoint(&captures[3])?;

        Ok(Self::try_new(from, Some(to), boundary)?)
    }
}

impl<T> RangeBounds<T> for Range<T>
where
    T: OrderedDomain,
{
    fn start_bound(&self) -> Bound<&T> {
        if self.boundary.includes_left() {
            Bound::Included(&self.from)
        } else {
            Bound::Excluded(&self.from)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.boundary.includes_right() {
            Bound::Included(&self.to)
        } else {
            Bound::Excluded(&self.to)
        }
    }
}

impl<T> TryFrom<std::ops::RangeInclusive<T>> for Range<T>
where
    T: OrderedDomain,
{
    type Error = RangeError;

    #[inline]
    fn try_from(range: std::ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::try_new(start, Some(end), BoundaryPolicy::Closed)
    }
}

impl<T> TryFrom<std::ops::Range<T>> for Range<T>
where
    T: OrderedDomain,
{
    type Error = RangeError;

    #[inline]
    fn try_from(range: std::ops::Range<T>) -> Result<Self, Self::Error> {
        Self::try_new(range.start, Some(range.end), BoundaryPolicy::HalfOpenRight)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Range<T>
where
    T: OrderedDomain + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Range", 3)?;
        state.serialize_field("from", &self.from)?;
        state.serialize_field("to", &self.to)?;
        state.serialize_field("rangeType", &self.boundary)?;
        state.end()
    }
}

/// Wire shape of a range. A missing or `null` `to` means "unbounded above".
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeRepr<T> {
    from: T,
    to: Option<T>,
    #[serde(rename = "rangeType")]
    range_type: BoundaryPolicy,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Range<T>
where
    T: OrderedDomain + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = <RangeRepr<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(repr.from, repr.to, repr.range_type).map_err(serde::de::Error::custom)
    }
}
