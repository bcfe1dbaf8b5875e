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

//! # Bracket Value
//!
//! **Domain-flavoured range value objects built on `bracket_core`.**
//!
//! Each type is a thin newtype over `bracket_core::range::Range<T>` binding
//! one ordered domain:
//!
//! * **`integer`**: `IntegerRange` over `i64`, countable and iterable.
//! * **`date`**: `LocalDateRange` over `chrono::NaiveDate` with `days()`, and
//!   `LocalDateRangeHalfOpenRight` whose policy is fixed to `[from, to)`,
//!   the natural shape for whole calendar periods.
//! * **`date_time`**: `LocalDateTimeRange` over `chrono::NaiveDateTime`. The
//!   domain is continuous, so it offers durations instead of counts.
//!
//! All of them share the same construction surface: trusted factories named
//! after the policy (`closed`, `open`, `half_open_left`, `half_open_right`)
//! that panic on inverted bounds, the validated `try_new`, and the
//! null-tolerant `from_nullable` / `try_from_nullable` pair. In the nullable
//! pair an absent start means "no range" while an absent end means "until
//! the domain maximum".
//!
//! Temporal types additionally render as an ISO-8601 interval
//! (`2024-01-01/2024-01-31`) through `to_iso_string()`.

use bracket_core::{domain::OrderedDomain, range::Range};
use std::fmt;

macro_rules! impl_range_value {
    ($name:ident, $t:ty) => {
        impl $name {
            /// Borrows the underlying generic range.
            #[inline]
            pub const fn as_range(&self) -> &bracket_core::range::Range<$t> {
                &self.0
            }

            /// Unwraps the underlying generic range.
            #[inline]
            pub const fn into_range(self) -> bracket_core::range::Range<$t> {
                self.0
            }

            /// Returns the `from` endpoint.
            #[inline]
            pub const fn start(&self) -> $t {
                self.0.start()
            }

            /// Returns the `to` endpoint.
            #[inline]
            pub const fn end(&self) -> $t {
                self.0.end()
            }

            /// Returns the boundary policy.
            #[inline]
            pub const fn boundary(&self) -> bracket_core::boundary::BoundaryPolicy {
                self.0.boundary()
            }

            /// Returns `true` if `point` lies in the range under its boundary policy.
            #[inline]
            pub fn contains(&self, point: $t) -> bool {
                self.0.contains(point)
            }

            /// Returns `true` if some point is contained by both ranges.
            #[inline]
            pub fn overlaps<R>(&self, other: &R) -> bool
            where
                R: AsRef<bracket_core::range::Range<$t>>,
            {
                self.0.overlaps(other.as_ref())
            }
        }

        impl AsRef<bracket_core::range::Range<$t>> for $name {
            #[inline]
            fn as_ref(&self) -> &bracket_core::range::Range<$t> {
                &self.0
            }
        }

        impl From<$name> for bracket_core::range::Range<$t> {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub mod date;
pub mod date_time;
pub mod integer;

/// Displays a single endpoint in its canonical form.
struct Canonical<T>(T);

impl<T> fmt::Display for Canonical<T>
where
    T: OrderedDomain,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_canonical(f)
    }
}

/// Renders `from/to` as an ISO-8601 interval, ignoring the boundary policy.
fn iso_interval<T>(range: &Range<T>) -> String
where
    T: OrderedDomain,
{
    format!("{}/{}", Canonical(range.start()), Canonical(range.end()))
}
