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

//! Error types reported by range construction and parsing.

use crate::boundary::BoundaryPolicy;

const INVALID_RANGE_MESSAGE: &str = "the start value must be less than or equal to the end value";

/// A structured validation failure with a stable machine-readable code.
///
/// # Examples
///
/// ```rust
/// # use bracket_core::{boundary::BoundaryPolicy, range::Range};
///
/// let err = Range::try_new(10i64, Some(1), BoundaryPolicy::Closed).unwrap_err();
/// assert_eq!(err.code(), "value_object.integer_range.invalid_range");
/// assert_eq!(err.message(), "the start value must be less than or equal to the end value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    /// The start value is greater than the end value.
    #[error("{code}: the start value must be less than or equal to the end value")]
    InvalidRange {
        /// Domain-scoped code, e.g. `value_object.date_range.invalid_range`.
        code: &'static str,
    },
}

impl RangeError {
    /// The machine-readable error code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            RangeError::InvalidRange { code } => *code,
        }
    }

    /// The human-readable error message.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            RangeError::InvalidRange { .. } => INVALID_RANGE_MESSAGE,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RangeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RangeError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// A boundary policy tag did not match any known policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown boundary policy '{tag}'")]
pub struct ParseBoundaryPolicyError {
    /// The rejected tag.
    pub tag: String,
}

/// The error type for parsing a range from its canonical bracket notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRangeError {
    /// The input is not of the form `{bracket}{from}, {to}{bracket}`.
    #[error("malformed range literal '{0}'")]
    Malformed(String),
    /// One of the endpoints could not be parsed into the domain type.
    #[error("could not parse range endpoint '{token}' as {type_name}")]
    Endpoint {
        /// The offending token.
        token: String,
        /// Name of the endpoint type.
        type_name: &'static str,
    },
    /// The parsed bounds violate the range invariant.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The literal is valid but its boundary policy is not accepted by the target type.
    #[error("expected a {expected} range, found {found}")]
    UnexpectedBoundary {
        /// The policy required by the target type.
        expected: BoundaryPolicy,
        /// The policy found in the literal.
        found: BoundaryPolicy,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_accessors() {
        let err = RangeError::InvalidRange {
            code: "value_object.integer_range.invalid_range",
        };
        assert_eq!(err.code(), "value_object.integer_range.invalid_range");
        assert_eq!(err.message(), INVALID_RANGE_MESSAGE);
    }

    #[test]
    fn test_invalid_range_display() {
        let err = RangeError::InvalidRange {
            code: "value_object.date_range.invalid_range",
        };
        assert_eq!(
            err.to_string(),
            "value_object.date_range.invalid_range: the start value must be less than or equal to the end value"
        );
    }

    #[test]
    fn test_parse_errors_display() {
        let malformed = ParseRangeError::Malformed("1..2".to_owned());
        assert_eq!(malformed.to_string(), "malformed range literal '1..2'");

        let unexpected = ParseRangeError::UnexpectedBoundary {
            expected: BoundaryPolicy::HalfOpenRight,
            found: BoundaryPolicy::Closed,
        };
        assert_eq!(
            unexpected.to_string(),
            "expected a half_open_right range, found closed"
        );
    }

    #[test]
    fn test_range_error_converts_into_parse_error() {
        let err = RangeError::InvalidRange { code: "x" };
        let parse: ParseRangeError = err.into();
        assert_eq!(parse, ParseRangeError::Range(err));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_range_error_serializes_code_and_message() {
        let err = RangeError::InvalidRange {
            code: "value_object.integer_range.invalid_range",
        };
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "value_object.integer_range.invalid_range",
                "message": "the start value must be less than or equal to the end value",
            })
        );
    }
}
