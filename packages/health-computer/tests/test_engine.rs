use std::str::FromStr;

use cosmwasm_std::Decimal;
use lendview_health_computer::{can_borrow, gauge_percentage, health_band, health_factor};
use lendview_types::health::HealthBand;
use test_case::test_case;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn health_factor_is_weighted_collateral_over_debt() {
    assert_eq!(health_factor(dec("2075"), dec("1000")).unwrap(), Some(dec("2.075")));
    assert_eq!(health_factor(dec("2075"), Decimal::zero()).unwrap(), None);
    assert_eq!(health_factor(Decimal::zero(), dec("1")).unwrap(), Some(Decimal::zero()));
}

#[test_case(None, 100; "no debt fills the gauge")]
#[test_case(Some("3"), 100; "ceiling")]
#[test_case(Some("12.5"), 100; "above ceiling is clamped")]
#[test_case(Some("1"), 0; "liquidation floor")]
#[test_case(Some("0.4"), 0; "below floor is clamped")]
#[test_case(Some("1.2"), 25; "danger starts at a quarter")]
#[test_case(Some("1.5"), 50; "warning starts at half")]
#[test_case(Some("2"), 75; "safe starts at three quarters")]
fn gauge_band_edges(hf: Option<&str>, expected: u64) {
    let pct = gauge_percentage(hf.map(dec)).unwrap();
    assert_eq!(pct, Decimal::from_ratio(expected, 1u64));
}

#[test_case("1.1", "12.5"; "mid liquidation band")]
#[test_case("1.35", "37.5"; "mid danger band")]
#[test_case("1.75", "62.5"; "mid warning band")]
#[test_case("2.5", "87.5"; "mid safe band")]
fn gauge_is_linear_within_band(hf: &str, expected: &str) {
    assert_eq!(gauge_percentage(Some(dec(hf))).unwrap(), dec(expected));
}

#[test]
fn gauge_is_monotonic() {
    let mut prev = Decimal::zero();
    for step in 0..=350u64 {
        let hf = Decimal::from_ratio(step, 100u64);
        let pct = gauge_percentage(Some(hf)).unwrap();
        assert!(pct >= prev, "gauge dropped at HF {}", hf);
        prev = pct;
    }
}

#[test]
fn band_and_borrow_eligibility_follow_health_factor() {
    assert_eq!(health_band(None), None);
    assert_eq!(health_band(Some(dec("1.66"))), Some(HealthBand::Warning));

    assert!(can_borrow(None));
    assert!(can_borrow(Some(dec("1.5"))));
    assert!(!can_borrow(Some(dec("1.49"))));
    assert!(!can_borrow(Some(dec("0.83"))));
}
