use std::collections::HashMap;

use cosmwasm_std::{Decimal, Uint128};
use lendview_health_computer::HealthComputer;
use lendview_testing::{dai_config, eth_config, usdc_config, wbtc_config};
use lendview_types::{asset::AssetConfig, position::CollateralHolding};
use proptest::{
    collection::vec,
    prelude::{Just, Strategy},
    prop_oneof,
};

fn random_price() -> impl Strategy<Value = Decimal> {
    (1..=10000, 0..6)
        .prop_map(|(price, offset)| Decimal::from_atomics(price as u128, offset as u32).unwrap())
}

fn random_base_config() -> impl Strategy<Value = AssetConfig> {
    prop_oneof![Just(eth_config()), Just(usdc_config()), Just(wbtc_config())]
}

/// One of the collateral fixtures with random risk parameters and price
fn random_asset_config() -> impl Strategy<Value = AssetConfig> {
    (random_base_config(), 30..70, 2..10, random_price()).prop_map(
        |(base, ltv, liq_thresh_buffer, price)| {
            let ltv = Decimal::percent(ltv as u64);
            AssetConfig {
                ltv,
                liquidation_threshold: ltv + Decimal::percent(liq_thresh_buffer as u64),
                price,
                ..base
            }
        },
    )
}

fn random_asset_configs() -> impl Strategy<Value = HashMap<String, AssetConfig>> {
    vec(random_asset_config(), 1..=3).prop_map(|configs| {
        let mut map: HashMap<String, AssetConfig> =
            configs.into_iter().map(|c| (c.address.clone(), c)).collect();
        let dai = dai_config();
        map.insert(dai.address.clone(), dai);
        map
    })
}

fn random_holdings(
    configs: &HashMap<String, AssetConfig>,
) -> impl Strategy<Value = Vec<CollateralHolding>> {
    let debt_asset = dai_config().address;
    let assets: Vec<(String, u32)> = configs
        .values()
        .filter(|c| c.address != debt_asset)
        .map(|c| (c.address.clone(), c.decimals))
        .collect();
    let count = assets.len();

    vec(1u128..=100_000, count).prop_map(move |amounts| {
        assets
            .iter()
            .zip(amounts)
            .map(|((asset, decimals), tenths)| {
                let amount = Uint128::new(tenths) * Uint128::new(10u128.pow(*decimals))
                    / Uint128::new(10);
                CollateralHolding::new(asset.clone(), amount)
            })
            .collect()
    })
}

/// Account with one to three collateral assets that owes between 1 and 100k DAI
pub fn random_health_computer() -> impl Strategy<Value = HealthComputer> {
    random_asset_configs().prop_flat_map(|configs| {
        let holdings = random_holdings(&configs);
        (holdings, 1u128..=100_000).prop_map(move |(holdings, debt)| HealthComputer {
            holdings,
            borrowed_amount: Uint128::new(debt) * Uint128::new(10u128.pow(18)),
            asset_configs: configs.clone(),
            debt_asset: dai_config().address,
        })
    })
}
