use std::str::FromStr;

use cosmwasm_std::Decimal;
use lendview_health_computer::HealthComputer;
use lendview_testing::{asset_configs, dai_config, eth_config, usdc_config, wbtc_config, wei, WETH};
use lendview_types::position::CollateralHolding;

/// Account holding `eth` WETH that owes `debt_eth` WETH
pub fn eth_account(eth: &str, debt_eth: &str) -> HealthComputer {
    HealthComputer {
        holdings: vec![CollateralHolding::new(WETH, wei(dec(eth)))],
        borrowed_amount: wei(dec(debt_eth)),
        asset_configs: asset_configs(&[eth_config()]),
        debt_asset: WETH.to_string(),
    }
}

/// Account with the given holdings that owes `debt_dai` DAI
pub fn dai_debt_account(holdings: Vec<CollateralHolding>, debt_dai: &str) -> HealthComputer {
    HealthComputer {
        holdings,
        borrowed_amount: wei(dec(debt_dai)),
        asset_configs: asset_configs(&[eth_config(), usdc_config(), wbtc_config(), dai_config()]),
        debt_asset: dai_config().address,
    }
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(diff <= tolerance, "expected {} to be within {} of {}", actual, tolerance, expected);
}
