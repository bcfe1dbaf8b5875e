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

//! # Ordered Domains
//!
//! Capability traits describing the endpoint types a `Range` can span.
//!
//! - `OrderedDomain`: the total order (through `Ord`), the sentinel used when
//!   an upper bound is omitted, the error code reported for inverted bounds,
//!   and the canonical text form of a single endpoint.
//! - `DiscreteDomain`: adds `successor`, `predecessor` and `distance`. Only
//!   ranges over discrete domains can be counted and iterated; the bound is
//!   checked at compile time.
//!
//! Implementations are provided for the primitive integers up to 64 bits
//! (discrete), `chrono::NaiveDate` (discrete, one step per day) and
//! `chrono::NaiveDateTime` (continuous).

use chrono::{NaiveDate, NaiveDateTime};
use num_traits::PrimInt;
use std::fmt;

/// Error code for ranges over integer domains.
pub const INTEGER_RANGE_CODE: &str = "value_object.integer_range.invalid_range";
/// Error code for ranges over calendar dates.
pub const DATE_RANGE_CODE: &str = "value_object.date_range.invalid_range";
/// Error code for ranges over date-times.
pub const DATE_TIME_RANGE_CODE: &str = "value_object.date_time_range.invalid_range";

/// A totally ordered endpoint type.
pub trait OrderedDomain: Copy + Ord + fmt::Debug {
    /// The largest representable value, substituted for an omitted upper bound.
    const DOMAIN_MAX: Self;

    /// Code carried by [`RangeError::InvalidRange`](crate::error::RangeError::InvalidRange)
    /// for ranges over this domain.
    const INVALID_RANGE_CODE: &'static str;

    /// Writes the canonical (ISO-8601 for temporal types) text of a single endpoint.
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// An ordered domain with a well-defined "next element".
///
/// # Invariants
///
/// For `a <= b`, applying `successor` to `a` exactly `a.distance(b)` times yields `b`.
pub trait DiscreteDomain: OrderedDomain {
    /// The next element, or `None` at the top of the domain.
    fn successor(self) -> Option<Self>;

    /// The previous element, or `None` at the bottom of the domain.
    fn predecessor(self) -> Option<Self>;

    /// Number of successor steps from `self` to `to`.
    ///
    /// Returns 0 when `to <= self`. Saturates at `u64::MAX`.
    fn distance(self, to: Self) -> u64;
}

#[inline]
fn integer_successor<T>(value: T) -> Option<T>
where
    T: PrimInt,
{
    value.checked_add(&T::one())
}

#[inline]
fn integer_predecessor<T>(value: T) -> Option<T>
where
    T: PrimInt,
{
    value.checked_sub(&T::one())
}

#[inline]
fn integer_distance<T>(from: T, to: T) -> u64
where
    T: PrimInt,
{
    match (from.to_i128(), to.to_i128()) {
        (Some(from), Some(to)) if to > from => u64::try_from(to - from).unwrap_or(u64::MAX),
        _ => 0,
    }
}

macro_rules! impl_integer_domain_for {
    ($t:ty) => {
        impl OrderedDomain for $t {
            const DOMAIN_MAX: Self = <$t>::MAX;
            const INVALID_RANGE_CODE: &'static str = INTEGER_RANGE_CODE;

            #[inline]
            fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl DiscreteDomain for $t {
            #[inline]
            fn successor(self) -> Option<Self> {
                integer_successor(self)
            }

            #[inline]
            fn predecessor(self) -> Option<Self> {
                integer_predecessor(self)
            }

            #[inline]
            fn distance(self, to: Self) -> u64 {
                integer_distance(self, to)
            }
        }
    };
}

impl_integer_domain_for!(i8);
impl_integer_domain_for!(u8);
impl_integer_domain_for!(i16);
impl_integer_domain_for!(u16);
impl_integer_domain_for!(i32);
impl_integer_domain_for!(u32);
impl_integer_domain_for!(i64);
impl_integer_domain_for!(u64);
impl_integer_domain_for!(isize);
impl_integer_domain_for!(usize);

impl OrderedDomain for NaiveDate {
    const DOMAIN_MAX: Self = NaiveDate::MAX;
    const INVALID_RANGE_CODE: &'static str = DATE_RANGE_CODE;

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%Y-%m-%d"))
    }
}

impl DiscreteDomain for NaiveDate {
    #[inline]
    fn successor(self) -> Option<Self> {
        self.succ_opt()
    }

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.pred_opt()
    }

    #[inline]
    fn distance(self, to: Self) -> u64 {
        u64::try_from(to.signed_duration_since(self).num_days()).unwrap_or(0)
    }
}

impl OrderedDomain for NaiveDateTime {
    const DOMAIN_MAX: Self = NaiveDateTime::MAX;
    const INVALID_RANGE_CODE: &'static str = DATE_TIME_RANGE_CODE;

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}
