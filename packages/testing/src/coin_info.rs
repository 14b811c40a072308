use std::collections::HashMap;

use cosmwasm_std::{Decimal, Uint128};
use lendview_types::asset::{AssetConfig, AssetConfigResponse};

pub const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const WBTC: &str = "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599";

pub const USER: &str = "0x1111111111111111111111111111111111111111";
pub const OTHER_USER: &str = "0x2222222222222222222222222222222222222222";

/// 2500 USD, 66% LTV, 83% liquidation threshold
pub fn eth_config() -> AssetConfig {
    AssetConfig {
        address: WETH.to_string(),
        symbol: "WETH".to_string(),
        decimals: 18,
        ltv: Decimal::percent(66),
        liquidation_threshold: Decimal::percent(83),
        liquidation_penalty: Decimal::percent(5),
        price: Decimal::from_ratio(2500u128, 1u128),
        enabled: true,
    }
}

/// 1 USD, 80% LTV, 85% liquidation threshold, 6 decimals
pub fn usdc_config() -> AssetConfig {
    AssetConfig {
        address: USDC.to_string(),
        symbol: "USDC".to_string(),
        decimals: 6,
        ltv: Decimal::percent(80),
        liquidation_threshold: Decimal::percent(85),
        liquidation_penalty: Decimal::percent(4),
        price: Decimal::one(),
        enabled: true,
    }
}

/// The debt asset: 1 USD, 75% LTV, 80% liquidation threshold
pub fn dai_config() -> AssetConfig {
    AssetConfig {
        address: DAI.to_string(),
        symbol: "DAI".to_string(),
        decimals: 18,
        ltv: Decimal::percent(75),
        liquidation_threshold: Decimal::percent(80),
        liquidation_penalty: Decimal::percent(5),
        price: Decimal::one(),
        enabled: true,
    }
}

/// 60000.5 USD, 70% LTV, 75% liquidation threshold, 8 decimals
pub fn wbtc_config() -> AssetConfig {
    AssetConfig {
        address: WBTC.to_string(),
        symbol: "WBTC".to_string(),
        decimals: 8,
        ltv: Decimal::percent(70),
        liquidation_threshold: Decimal::percent(75),
        liquidation_penalty: Decimal::percent(10),
        price: Decimal::from_ratio(120001u128, 2u128),
        enabled: true,
    }
}

/// Contract-shaped config read for one of the fixtures above
pub fn config_response(config: &AssetConfig) -> AssetConfigResponse {
    AssetConfigResponse {
        ltv: percent_of(config.ltv),
        liquidation_threshold: percent_of(config.liquidation_threshold),
        liquidation_penalty: percent_of(config.liquidation_penalty),
        decimals: config.decimals,
        enabled: config.enabled,
        symbol: config.symbol.clone(),
    }
}

/// Oracle-shaped price read (8 decimals) for one of the fixtures above
pub fn raw_price(config: &AssetConfig) -> Uint128 {
    config.price * Uint128::new(100_000_000)
}

pub fn asset_configs(configs: &[AssetConfig]) -> HashMap<String, AssetConfig> {
    configs.iter().map(|c| (c.address.clone(), c.clone())).collect()
}

/// Raw amount for `whole` units of a token with `decimals`
pub fn units(whole: u128, decimals: u32) -> Uint128 {
    Uint128::new(whole) * Uint128::new(10u128.pow(decimals))
}

/// Raw 18-decimal amount for a whole-unit decimal
pub fn wei(amount: Decimal) -> Uint128 {
    amount * Uint128::new(10u128.pow(18))
}

fn percent_of(fraction: Decimal) -> u64 {
    (fraction * Uint128::new(100)).u128() as u64
}
