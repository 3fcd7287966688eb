//! Property-based tests using `proptest` for the math invariants.
//!
//! Covers the testable properties of the conversion and liquidity
//! layers:
//!
//! 1. **Tick round-trip** — `tick_at_price(price_at_tick(t)) == t`.
//! 2. **Order invariance** — liquidity formulas ignore boundary order.
//! 3. **Amount round-trip** — token0 amount survives a pass through the
//!    liquidity formulas within float tolerance.
//! 4. **Deposit bound** — the three-regime rule never exceeds either
//!    single-sided candidate inside the range.

use proptest::prelude::*;

use super::*;
use crate::domain::{SqrtPrice, Tick};

fn sqrt(v: f64) -> SqrtPrice {
    let Ok(s) = SqrtPrice::new(v) else {
        panic!("valid sqrt price");
    };
    s
}

proptest! {
    #[test]
    fn tick_price_round_trip(t in -887_272i32..=887_272) {
        let Ok(tick) = Tick::new(t) else {
            panic!("tick in range");
        };
        let Ok(price) = price_at_tick(tick) else {
            panic!("valid tick produces valid price");
        };
        let Ok(rt) = tick_at_price(price) else {
            panic!("valid price produces valid tick");
        };
        prop_assert_eq!(rt, tick);
    }

    #[test]
    fn liquidity_order_invariant(
        amount in 1e-6f64..1e12,
        lo in 0.01f64..1e6,
        width in 1e-3f64..1e3,
    ) {
        let (a, b) = (sqrt(lo), sqrt(lo + width));
        let Ok(fwd0) = liquidity_from_token0(amount, a, b) else {
            panic!("expected Ok");
        };
        let Ok(rev0) = liquidity_from_token0(amount, b, a) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(fwd0, rev0);

        let Ok(fwd1) = liquidity_from_token1(amount, a, b) else {
            panic!("expected Ok");
        };
        let Ok(rev1) = liquidity_from_token1(amount, b, a) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(fwd1, rev1);
    }

    #[test]
    fn token0_amount_survives_round_trip(
        amount in 1e-3f64..1e9,
        lo in 0.1f64..1e4,
        width in 0.01f64..100.0,
    ) {
        let (a, b) = (sqrt(lo), sqrt(lo + width));
        let Ok(liq) = liquidity_from_token0(amount, a, b) else {
            panic!("expected Ok");
        };
        let Ok(back) = amount0_from_liquidity(liq, a, b) else {
            panic!("expected Ok");
        };
        let rel = (back - amount).abs() / amount;
        prop_assert!(rel < 1e-9, "relative error {} too large", rel);
    }

    #[test]
    fn deposit_never_exceeds_either_candidate(
        amount0 in 1e-3f64..1e9,
        amount1 in 1e-3f64..1e9,
        lo in 0.1f64..1e4,
        gap in 0.01f64..100.0,
    ) {
        let (a, current, b) = (sqrt(lo), sqrt(lo + gap), sqrt(lo + 2.0 * gap));
        let Ok(liq) = liquidity_for_deposit(amount0, amount1, current, a, b) else {
            panic!("expected Ok");
        };
        let Ok(liq0) = liquidity_from_token0(amount0, current, b) else {
            panic!("expected Ok");
        };
        let Ok(liq1) = liquidity_from_token1(amount1, a, current) else {
            panic!("expected Ok");
        };
        prop_assert!(liq <= liq0);
        prop_assert!(liq <= liq1);
    }
}
