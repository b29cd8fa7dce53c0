//! Property-Based Tests for the Memoizing Wrapper
//!
//! Verifies hit/miss accounting and key distinctness over generated call
//! sequences.

use std::cell::Cell;
use std::collections::HashSet;

use proptest::prelude::*;

use crate::memo::{CallKey, Memoized};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // With no limits configured, misses equal the number of distinct
    // argument bundles, hits make up the rest, and every distinct bundle
    // runs the computation exactly once.
    #[test]
    fn prop_hit_miss_accounting(args in prop::collection::vec(0u8..16, 1..60)) {
        let computed = Cell::new(0u64);
        let mut memo = Memoized::wrap(
            |n: &u8| {
                computed.set(computed.get() + 1);
                (u16::from(*n) * 3, None)
            },
            None,
            None,
        )
        .unwrap();

        let mut seen = HashSet::new();
        let mut expected_hits = 0u64;
        for n in &args {
            prop_assert_eq!(memo.call(*n), u16::from(*n) * 3);
            if !seen.insert(*n) {
                expected_hits += 1;
            }
        }

        let info = memo.cache_info();
        prop_assert_eq!(info.hits, expected_hits);
        prop_assert_eq!(info.misses, seen.len() as u64);
        prop_assert_eq!(info.current_size, seen.len());
        prop_assert_eq!(computed.get(), seen.len() as u64);
    }

    // hits + misses always equals the number of calls made, and the hit
    // rate stays inside [0, 1].
    #[test]
    fn prop_counters_sum_to_calls(args in prop::collection::vec(0u8..8, 0..40)) {
        let mut memo = Memoized::wrap(|n: &u8| (*n, None), Some(4), None).unwrap();

        for n in &args {
            memo.call(*n);
        }

        let info = memo.cache_info();
        prop_assert_eq!(info.hits + info.misses, args.len() as u64);

        let rate = info.hit_rate();
        prop_assert!((0.0..=1.0).contains(&rate), "hit rate {} out of range", rate);
    }

    // clear() always returns the wrapper to a cold state.
    #[test]
    fn prop_clear_resets(args in prop::collection::vec(0u8..16, 1..30)) {
        let mut memo = Memoized::wrap(|n: &u8| (*n, None), None, None).unwrap();

        for n in args {
            memo.call(n);
        }
        memo.clear();

        let info = memo.cache_info();
        prop_assert_eq!(info.hits, 0);
        prop_assert_eq!(info.misses, 0);
        prop_assert_eq!(info.current_size, 0);
    }

    // Reordering named arguments always builds a distinct key, while the
    // original ordering keeps hitting its own entry.
    #[test]
    fn prop_named_order_distinct(x in any::<i64>(), y in any::<i64>()) {
        let mut memo = Memoized::wrap(|_: &CallKey| (0u8, None), None, None).unwrap();

        let xy = CallKey::new().named("x", x).named("y", y);
        let yx = CallKey::new().named("y", y).named("x", x);

        memo.call(xy.clone());
        memo.call(yx);
        memo.call(xy);

        let info = memo.cache_info();
        prop_assert_eq!(info.misses, 2);
        prop_assert_eq!(info.hits, 1);
    }
}
