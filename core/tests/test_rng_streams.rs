//! Tests for the composite draw types and the bounded range draw
//!
//! These pin down the bit-accounting contracts: how 64-bit integers,
//! doubles, booleans and bytes are built out of the underlying 32-bit word
//! stream, and how range draws stay unbiased.

use proptest::prelude::*;
use stochastic_core_rs::{Mwc256, RngError};

#[test]
fn test_u64_composed_low_word_first() {
    let mut composed = Mwc256::with_seed(555);
    let mut words = Mwc256::with_seed(555);

    for _ in 0..1000 {
        let lo = words.next_u32();
        let hi = words.next_u32();
        let expected = (u64::from(hi) << 32) | u64::from(lo);
        assert_eq!(composed.next_u64(), expected);
    }
}

#[test]
fn test_f64_strictly_inside_unit_interval() {
    // A million draws per seed; the contract is the open interval, so
    // exactly 0.0 or 1.0 is a failure no matter how rare.
    for seed in [0u64, 1, 42, 0xFFFF_FFFF_FFFF_FFFF] {
        let mut rng = Mwc256::with_seed(seed);
        for i in 0..1_000_000 {
            let r = rng.next_f64();
            assert!(
                r > 0.0 && r < 1.0,
                "seed {} draw {} produced {} outside (0, 1)",
                seed,
                i,
                r
            );
        }
    }
}

#[test]
fn test_f64_has_sub_word_precision() {
    // The second word must contribute: doubles with identical high words
    // still have to differ.
    let mut rng = Mwc256::with_seed(8);
    let mut fractional_tail = false;
    for _ in 0..100 {
        let r = rng.next_f64();
        // 2^-32 granularity would make r * 2^32 an integer.
        let scaled = r * 4_294_967_296.0;
        if scaled.fract() != 0.0 {
            fractional_tail = true;
            break;
        }
    }
    assert!(fractional_tail, "doubles carry no precision below 2^-32");
}

#[test]
fn test_bool_stream_consumes_one_word_per_32_draws() {
    let mut bools = Mwc256::with_seed(321);
    let mut words = Mwc256::with_seed(321);

    // 96 booleans must consume exactly three words.
    for _ in 0..96 {
        bools.next_bool();
    }
    for _ in 0..3 {
        words.next_u32();
    }

    // Both generators now sit at the same stream position.
    for _ in 0..100 {
        assert_eq!(bools.next_u32(), words.next_u32());
    }
}

#[test]
fn test_byte_stream_consumes_one_word_per_4_draws() {
    let mut bytes = Mwc256::with_seed(321);
    let mut words = Mwc256::with_seed(321);

    for _ in 0..20 {
        bytes.next_byte();
    }
    for _ in 0..5 {
        words.next_u32();
    }

    for _ in 0..100 {
        assert_eq!(bytes.next_u32(), words.next_u32());
    }
}

#[test]
fn test_byte_stream_matches_word_bytes_big_endian_order() {
    let mut bytes = Mwc256::with_seed(97);
    let mut words = Mwc256::with_seed(97);

    for _ in 0..50 {
        let word = words.next_u32();
        assert_eq!(bytes.next_byte(), (word >> 24) as u8);
        assert_eq!(bytes.next_byte(), (word >> 16) as u8);
        assert_eq!(bytes.next_byte(), (word >> 8) as u8);
        assert_eq!(bytes.next_byte(), word as u8);
    }
}

#[test]
fn test_range_bounds_hold() {
    let cases: [(i64, i64); 6] = [
        (0, 1),
        (0, 100),
        (-50, 50),
        (i64::MIN, i64::MIN + 10),
        (i64::MAX - 10, i64::MAX),
        (i64::MIN, i64::MAX),
    ];

    let mut rng = Mwc256::with_seed(2718);
    for (begin, end) in cases {
        for _ in 0..10_000 {
            let x = rng.int_range(begin, end).unwrap();
            assert!(
                x >= begin && x < end,
                "{} outside [{}, {})",
                x,
                begin,
                end
            );
        }
    }
}

#[test]
fn test_range_single_value() {
    let mut rng = Mwc256::with_seed(12345);
    // Range [5, 6) can only ever return 5.
    assert_eq!(rng.int_range(5, 6).unwrap(), 5);
}

#[test]
fn test_range_deterministic() {
    let mut rng1 = Mwc256::with_seed(99999);
    let mut rng2 = Mwc256::with_seed(99999);

    for _ in 0..500 {
        assert_eq!(
            rng1.int_range(10, 1000).unwrap(),
            rng2.int_range(10, 1000).unwrap()
        );
    }
}

#[test]
fn test_range_uniformity_chi_squared() {
    // 8 buckets, 80k draws, expected 10k per bucket. Chi-squared with 7
    // degrees of freedom; 40 is far beyond any plausible statistic for a
    // uniform stream (p < 1e-6) while still catching modulo bias.
    let mut rng = Mwc256::with_seed(1_000_003);
    let mut counts = [0u32; 8];

    for _ in 0..80_000 {
        let x = rng.int_range(0, 8).unwrap();
        counts[x as usize] += 1;
    }

    let expected = 10_000.0_f64;
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let d = f64::from(c) - expected;
            d * d / expected
        })
        .sum();

    assert!(chi2 < 40.0, "chi-squared statistic {} too large: {:?}", chi2, counts);
}

#[test]
fn test_range_invalid_arguments_rejected() {
    let mut rng = Mwc256::with_seed(1);

    assert_eq!(
        rng.int_range(10, 10),
        Err(RngError::InvalidRange { begin: 10, end: 10 })
    );
    assert_eq!(
        rng.int_range(10, -10),
        Err(RngError::InvalidRange { begin: 10, end: -10 })
    );
}

#[test]
fn test_range_error_leaves_stream_untouched() {
    let mut rng = Mwc256::with_seed(1);
    let mut twin = Mwc256::with_seed(1);

    let _ = rng.int_range(3, 3);
    let _ = rng.int_range(9, 2);

    for _ in 0..10 {
        assert_eq!(rng.next_u64(), twin.next_u64());
    }
}

proptest! {
    #[test]
    fn prop_range_result_in_bounds(seed: u64, begin in -1_000_000i64..1_000_000, span in 1i64..1_000_000) {
        let end = begin + span;
        let mut rng = Mwc256::with_seed(seed);
        for _ in 0..32 {
            let x = rng.int_range(begin, end).unwrap();
            prop_assert!(x >= begin && x < end);
        }
    }

    #[test]
    fn prop_range_deterministic_per_seed(seed: u64, begin in -1_000i64..1_000, span in 1i64..10_000) {
        let end = begin + span;
        let mut rng1 = Mwc256::with_seed(seed);
        let mut rng2 = Mwc256::with_seed(seed);
        for _ in 0..8 {
            prop_assert_eq!(
                rng1.int_range(begin, end).unwrap(),
                rng2.int_range(begin, end).unwrap()
            );
        }
    }
}
