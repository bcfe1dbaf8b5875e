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

//! # Bracket Core
//!
//! Interval algebra over ordered domains. A `Range<T>` is a pair of endpoints
//! plus one of four boundary policies, and every query (containment,
//! overlap, intersection, counting, iteration) honours which endpoints the
//! policy includes.
//!
//! ## Modules
//!
//! - `boundary`: `BoundaryPolicy` (`Closed`, `Open`, `HalfOpenLeft`,
//!   `HalfOpenRight`) with inclusion predicates, bracket notation and the
//!   snake_case wire tag.
//! - `domain`: the `OrderedDomain` and `DiscreteDomain` capability traits and
//!   their implementations for primitive integers, `chrono::NaiveDate` and
//!   `chrono::NaiveDateTime`.
//! - `range`: the generic `Range<T>` value object, its point iterator
//!   (`RangeIter<T>`, discrete domains only), canonical text form and JSON
//!   shape `{from, to, rangeType}`.
//! - `error`: `RangeError` (stable code plus message) and parse errors.
//!
//! ## Usage
//!
//! ```rust
//! use bracket_core::{boundary::BoundaryPolicy, range::Range};
//!
//! let weekdays = Range::half_open_right(1i64, Some(6));
//! assert_eq!(weekdays.count(), 5);
//! assert_eq!(weekdays.to_string(), "[1, 6)");
//!
//! let checked = Range::try_new(3i64, Some(1), BoundaryPolicy::Closed);
//! assert_eq!(checked.unwrap_err().code(), "value_object.integer_range.invalid_range");
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for policies and ranges
//!   (deserialization validates bounds) and `Serialize` for `RangeError`.

pub mod boundary;
pub mod domain;
pub mod error;
pub mod range;
