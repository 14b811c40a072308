use std::time::Duration;

use lendview_types::{config::DashboardConfig, error::ValidationError};

fn config_json(poll_interval_ms: u64, debt_asset: &str) -> String {
    format!(
        r#"{{
            "chain_id": 11155111,
            "contracts": {{
                "collateral_manager": "0x1000000000000000000000000000000000000001",
                "lending_pool": "0x2000000000000000000000000000000000000002",
                "oracle": "0x3000000000000000000000000000000000000003"
            }},
            "assets": [
                {{ "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "symbol": "ETH" }},
                {{ "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "symbol": "USDC" }},
                {{ "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "symbol": "DAI" }}
            ],
            "debt_asset": "{}",
            "poll_interval_ms": {}
        }}"#,
        debt_asset, poll_interval_ms
    )
}

#[test]
fn parses_and_normalizes_addresses() {
    let config =
        DashboardConfig::from_json(&config_json(5000, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"))
            .unwrap();

    assert_eq!(config.debt_asset, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    assert!(config.assets.iter().all(|a| a.address == a.address.to_lowercase()));
    assert_eq!(config.poll_interval(), Duration::from_secs(5));
    // missing overrides fall back to the default table
    assert_eq!(config.decimals_overrides.decimals_for("USDC"), Some(6));
    assert!(config.is_supported("0xA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48"));
}

#[test]
fn rejects_unsupported_debt_asset() {
    let err =
        DashboardConfig::from_json(&config_json(5000, "0x4000000000000000000000000000000000000004"))
            .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidConfig { .. }));
}

#[test]
fn rejects_out_of_range_poll_interval() {
    let err =
        DashboardConfig::from_json(&config_json(100, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"))
            .unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidParam {
            param_name: "poll_interval_ms".to_string(),
            invalid_value: "100".to_string(),
            predicate: "[1000, 60000]".to_string(),
        }
    );
}

#[test]
fn rejects_malformed_address() {
    let err = DashboardConfig::from_json(&config_json(5000, "0xnothex")).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidAddress { .. }));
}

#[test]
fn rejects_malformed_json() {
    let err = DashboardConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidConfig { .. }));
}
