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

use bracket_core::boundary::BoundaryPolicy;
use bracket_core::domain::{DiscreteDomain, INTEGER_RANGE_CODE};
use bracket_core::range::Range;
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = BoundaryPolicy> {
    prop::sample::select(BoundaryPolicy::ALL.to_vec())
}

fn small_range() -> impl Strategy<Value = Range<i64>> {
    (-50i64..50, 0i64..30, policy())
        .prop_map(|(from, len, policy)| Range::new(from, Some(from + len), policy))
}

proptest! {
    #[test]
    fn closed_range_contains_both_endpoints(a in any::<i64>(), b in any::<i64>()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let range = Range::try_new(from, Some(to), BoundaryPolicy::Closed).unwrap();
        prop_assert!(range.contains(from));
        prop_assert!(range.contains(to));
    }

    #[test]
    fn inverted_bounds_are_rejected(a in any::<i64>(), b in any::<i64>(), policy in policy()) {
        prop_assume!(a != b);
        let (from, to) = if a > b { (a, b) } else { (b, a) };
        let err = Range::try_new(from, Some(to), policy).unwrap_err();
        prop_assert_eq!(err.code(), INTEGER_RANGE_CODE);
        prop_assert!(err.code().ends_with(".invalid_range"));
    }

    #[test]
    fn overlaps_is_symmetric(a in small_range(), b in small_range()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlaps_agrees_with_common_points(a in small_range(), b in small_range()) {
        let common = a.iter().any(|x| b.contains(x));
        // Over integers, "(1, 2)" has no points but still overlaps in the dense sense,
        // so only the implication from shared points to overlap holds.
        if common {
            prop_assert!(a.overlaps(&b));
        }
    }

    #[test]
    fn count_matches_iteration(range in small_range()) {
        let points: Vec<i64> = range.iter().collect();
        prop_assert_eq!(points.len() as u64, range.count());
        prop_assert!(points.windows(2).all(|w| w[1] == w[0].successor().unwrap()));
        prop_assert!(points.iter().all(|&p| range.contains(p)));
    }

    #[test]
    fn iteration_is_repeatable(range in small_range()) {
        let first: Vec<i64> = range.iter().collect();
        let second: Vec<i64> = range.iter().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reversed_iteration_mirrors_forward(range in small_range()) {
        let mut forward: Vec<i64> = range.iter().collect();
        let backward: Vec<i64> = range.iter().rev().collect();
        forward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn intersection_holds_exactly_the_common_points(a in small_range(), b in small_range()) {
        match a.intersection(&b) {
            Some(both) => {
                for x in -60i64..90 {
                    prop_assert_eq!(both.contains(x), a.contains(x) && b.contains(x));
                }
            }
            None => prop_assert!(!a.overlaps(&b)),
        }
    }

    #[test]
    fn canonical_text_parses_back(range in small_range()) {
        let parsed: Range<i64> = range.to_string().parse().unwrap();
        prop_assert_eq!(parsed, range);
    }
}
