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

//! # Boundary Policies
//!
//! Every range carries exactly one `BoundaryPolicy` describing whether its
//! endpoints belong to it:
//!
//! | Variant         | Left  | Right | Notation     | Tag               |
//! |-----------------|-------|-------|--------------|-------------------|
//! | `Closed`        | yes   | yes   | `[from, to]` | `closed`          |
//! | `Open`          | no    | no    | `(from, to)` | `open`            |
//! | `HalfOpenLeft`  | no    | yes   | `(from, to]` | `half_open_left`  |
//! | `HalfOpenRight` | yes   | no    | `[from, to)` | `half_open_right` |
//!
//! The tag is the stable wire representation used by `Display`, `FromStr`
//! and serde.

use crate::error::ParseBoundaryPolicyError;
use std::str::FromStr;

/// Inclusion rule for the two endpoints of a range.
///
/// # Examples
///
/// ```rust
/// # use bracket_core::boundary::BoundaryPolicy;
///
/// let policy = BoundaryPolicy::HalfOpenRight;
/// assert!(policy.includes_left());
/// assert!(!policy.includes_right());
/// assert_eq!(policy.as_str(), "half_open_right");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BoundaryPolicy {
    /// Both endpoints are included.
    #[default]
    Closed,
    /// Neither endpoint is included.
    Open,
    /// Only the right endpoint is included.
    HalfOpenLeft,
    /// Only the left endpoint is included.
    HalfOpenRight,
}

impl BoundaryPolicy {
    /// All four policies, in declaration order.
    pub const ALL: [BoundaryPolicy; 4] = [
        BoundaryPolicy::Closed,
        BoundaryPolicy::Open,
        BoundaryPolicy::HalfOpenLeft,
        BoundaryPolicy::HalfOpenRight,
    ];

    /// Returns the policy that includes exactly the requested endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::boundary::BoundaryPolicy;
    ///
    /// assert_eq!(BoundaryPolicy::from_inclusion(true, false), BoundaryPolicy::HalfOpenRight);
    /// assert_eq!(BoundaryPolicy::from_inclusion(false, false), BoundaryPolicy::Open);
    /// ```
    #[inline]
    pub const fn from_inclusion(includes_left: bool, includes_right: bool) -> Self {
        match (includes_left, includes_right) {
            (true, true) => BoundaryPolicy::Closed,
            (false, false) => BoundaryPolicy::Open,
            (false, true) => BoundaryPolicy::HalfOpenLeft,
            (true, false) => BoundaryPolicy::HalfOpenRight,
        }
    }

    /// Returns `true` if the `from` endpoint belongs to the range.
    #[inline]
    pub const fn includes_left(self) -> bool {
        match self {
            BoundaryPolicy::Closed | BoundaryPolicy::HalfOpenRight => true,
            BoundaryPolicy::Open | BoundaryPolicy::HalfOpenLeft => false,
        }
    }

    /// Returns `true` if the `to` endpoint belongs to the range.
    #[inline]
    pub const fn includes_right(self) -> bool {
        match self {
            BoundaryPolicy::Closed | BoundaryPolicy::HalfOpenLeft => true,
            BoundaryPolicy::Open | BoundaryPolicy::HalfOpenRight => false,
        }
    }

    /// Number of endpoints the policy excludes (0, 1 or 2).
    #[inline]
    pub const fn excluded_endpoints(self) -> u64 {
        match self {
            BoundaryPolicy::Closed => 0,
            BoundaryPolicy::HalfOpenLeft | BoundaryPolicy::HalfOpenRight => 1,
            BoundaryPolicy::Open => 2,
        }
    }

    /// The stable snake_case tag of the policy.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            BoundaryPolicy::Closed => "closed",
            BoundaryPolicy::Open => "open",
            BoundaryPolicy::HalfOpenLeft => "half_open_left",
            BoundaryPolicy::HalfOpenRight => "half_open_right",
        }
    }

    /// The bracket written before the `from` endpoint.
    #[inline]
    pub const fn opening_bracket(self) -> char {
        if self.includes_left() { '[' } else { '(' }
    }

    /// The bracket written after the `to` endpoint.
    #[inline]
    pub const fn closing_bracket(self) -> char {
        if self.includes_right() { ']' } else { ')' }
    }

    /// Inverse of [`opening_bracket`](Self::opening_bracket) and
    /// [`closing_bracket`](Self::closing_bracket).
    ///
    /// Returns `None` for anything that is not one of `[`, `(` followed by
    /// one of `]`, `)`.
    #[inline]
    pub const fn from_brackets(open: char, close: char) -> Option<Self> {
        let left = match open {
            '[' => true,
            '(' => false,
            _ => return None,
        };
        let right = match close {
            ']' => true,
            ')' => false,
            _ => return None,
        };
        Some(Self::from_inclusion(left, right))
    }
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ParseBoundaryPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundaryPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ParseBoundaryPolicyError { tag: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusion_table() {
        assert!(BoundaryPolicy::Closed.includes_left());
        assert!(BoundaryPolicy::Closed.includes_right());

        assert!(!BoundaryPolicy::Open.includes_left());
        assert!(!BoundaryPolicy::Open.includes_right());

        assert!(!BoundaryPolicy::HalfOpenLeft.includes_left());
        assert!(BoundaryPolicy::HalfOpenLeft.includes_right());

        assert!(BoundaryPolicy::HalfOpenRight.includes_left());
        assert!(!BoundaryPolicy::HalfOpenRight.includes_right());
    }

    #[test]
    fn test_from_inclusion_inverts_predicates() {
        for policy in BoundaryPolicy::ALL {
            let rebuilt =
                BoundaryPolicy::from_inclusion(policy.includes_left(), policy.includes_right());
            assert_eq!(rebuilt, policy);
        }
    }

    #[test]
    fn test_excluded_endpoints() {
        assert_eq!(BoundaryPolicy::Closed.excluded_endpoints(), 0);
        assert_eq!(BoundaryPolicy::HalfOpenLeft.excluded_endpoints(), 1);
        assert_eq!(BoundaryPolicy::HalfOpenRight.excluded_endpoints(), 1);
        assert_eq!(BoundaryPolicy::Open.excluded_endpoints(), 2);
    }

    #[test]
    fn test_brackets() {
        assert_eq!(BoundaryPolicy::Closed.opening_bracket(), '[');
        assert_eq!(BoundaryPolicy::Closed.closing_bracket(), ']');
        assert_eq!(BoundaryPolicy::Open.opening_bracket(), '(');
        assert_eq!(BoundaryPolicy::Open.closing_bracket(), ')');
        assert_eq!(BoundaryPolicy::HalfOpenLeft.opening_bracket(), '(');
        assert_eq!(BoundaryPolicy::HalfOpenLeft.closing_bracket(), ']');
        assert_eq!(BoundaryPolicy::HalfOpenRight.opening_bracket(), '[');
        assert_eq!(BoundaryPolicy::HalfOpenRight.closing_bracket(), ')');
    }

    #[test]
    fn test_from_brackets() {
        for policy in BoundaryPolicy::ALL {
            assert_eq!(
                BoundaryPolicy::from_brackets(policy.opening_bracket(), policy.closing_bracket()),
                Some(policy)
            );
        }
        assert_eq!(BoundaryPolicy::from_brackets('{', ']'), None);
        assert_eq!(BoundaryPolicy::from_brackets('[', '>'), None);
    }

    #[test]
    fn test_display_and_parse() {
        for policy in BoundaryPolicy::ALL {
            let tag = policy.to_string();
            assert_eq!(tag.parse::<BoundaryPolicy>().unwrap(), policy);
        }
        assert_eq!(BoundaryPolicy::HalfOpenLeft.to_string(), "half_open_left");
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "HalfOpen".parse::<BoundaryPolicy>().unwrap_err();
        assert_eq!(err.tag, "HalfOpen");
    }

    #[test]
    fn test_default_is_closed() {
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Closed);
    }
}
