use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint256};
use lendview_reader::{decode_health_factor, reconcile_health_factor};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn all_ones_means_no_debt() {
    assert_eq!(decode_health_factor(Uint256::MAX).unwrap(), None);
}

#[test]
fn contract_value_has_two_decimals() {
    assert_eq!(decode_health_factor(Uint256::from(207u128)).unwrap(), Some(dec("2.07")));
    assert_eq!(decode_health_factor(Uint256::from(83u128)).unwrap(), Some(dec("0.83")));
    assert_eq!(decode_health_factor(Uint256::zero()).unwrap(), Some(Decimal::zero()));
}

#[test]
fn truncation_is_within_tolerance() {
    assert!(reconcile_health_factor(Some(dec("2.075")), Some(dec("2.07"))));
    assert!(reconcile_health_factor(None, None));
}

#[test]
fn divergence_is_reported() {
    assert!(!reconcile_health_factor(Some(dec("2.075")), Some(dec("1.5"))));
    assert!(!reconcile_health_factor(None, Some(dec("1.5"))));
    assert!(!reconcile_health_factor(Some(dec("1.5")), None));
}
