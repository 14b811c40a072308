use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use cosmwasm_std::{Uint128, Uint256};
use lendview_math::DecimalsOverrides;
use lendview_reader::{ProtocolQuerier, ReaderError, ReaderResult, UserCollateralsResponse};
use lendview_testing::{
    config_response, dai_config, eth_config, raw_price, usdc_config, DAI, USDC, WETH,
};
use lendview_types::{
    asset::AssetConfigResponse,
    config::{ContractAddresses, DashboardConfig, SupportedAsset},
};

#[derive(Default)]
pub struct MockState {
    pub borrowed: HashMap<String, Uint128>,
    pub collaterals: HashMap<String, UserCollateralsResponse>,
    pub prices: HashMap<String, Uint128>,
    pub configs: HashMap<String, AssetConfigResponse>,
    pub health_factors: HashMap<String, Uint256>,
    /// Method names that return an error
    pub failing: HashSet<&'static str>,
}

#[derive(Default)]
pub struct MockQuerier {
    state: Mutex<MockState>,
}

impl MockQuerier {
    /// WETH, USDC and DAI listed and priced, no users
    pub fn with_assets() -> Self {
        let querier = Self::default();
        querier.update(|state| {
            for config in [eth_config(), usdc_config(), dai_config()] {
                state.prices.insert(config.address.clone(), raw_price(&config));
                state.configs.insert(config.address.clone(), config_response(&config));
            }
        });
        querier
    }

    pub fn update(&self, f: impl FnOnce(&mut MockState)) {
        f(&mut self.state.lock().unwrap());
    }

    pub fn set_position(&self, user: &str, holdings: &[(&str, Uint128)], borrowed: Uint128) {
        self.update(|state| {
            state.collaterals.insert(
                user.to_string(),
                UserCollateralsResponse {
                    assets: holdings.iter().map(|(asset, _)| asset.to_string()).collect(),
                    amounts: holdings.iter().map(|(_, amount)| *amount).collect(),
                    values_usd: vec![Uint256::zero(); holdings.len()],
                },
            );
            state.borrowed.insert(user.to_string(), borrowed);
        });
    }

    fn check(&self, method: &'static str) -> ReaderResult<()> {
        if self.state.lock().unwrap().failing.contains(method) {
            return Err(ReaderError::Query {
                method: method.to_string(),
                reason: "execution reverted".to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(method: &str, key: &str) -> ReaderError {
    ReaderError::Query {
        method: method.to_string(),
        reason: format!("no mock data for {}", key),
    }
}

#[async_trait]
impl ProtocolQuerier for MockQuerier {
    async fn borrowed_amount(&self, user: &str) -> ReaderResult<Uint128> {
        self.check("getBorrowedAmount")?;
        let state = self.state.lock().unwrap();
        Ok(state.borrowed.get(user).copied().unwrap_or_default())
    }

    async fn user_collaterals(&self, user: &str) -> ReaderResult<UserCollateralsResponse> {
        self.check("getUserCollaterals")?;
        let state = self.state.lock().unwrap();
        Ok(state.collaterals.get(user).cloned().unwrap_or_default())
    }

    async fn price(&self, asset: &str) -> ReaderResult<Uint128> {
        self.check("getPrice")?;
        let state = self.state.lock().unwrap();
        state.prices.get(asset).copied().ok_or_else(|| not_found("getPrice", asset))
    }

    async fn asset_config(&self, asset: &str) -> ReaderResult<AssetConfigResponse> {
        self.check("getAssetConfig")?;
        let state = self.state.lock().unwrap();
        state.configs.get(asset).cloned().ok_or_else(|| not_found("getAssetConfig", asset))
    }

    async fn health_factor(&self, user: &str) -> ReaderResult<Uint256> {
        self.check("getHealthFactor")?;
        let state = self.state.lock().unwrap();
        Ok(state.health_factors.get(user).copied().unwrap_or(Uint256::MAX))
    }
}

pub fn dashboard_config() -> DashboardConfig {
    DashboardConfig {
        chain_id: 11155111,
        contracts: ContractAddresses {
            collateral_manager: "0x3333333333333333333333333333333333333333".to_string(),
            lending_pool: "0x4444444444444444444444444444444444444444".to_string(),
            oracle: "0x5555555555555555555555555555555555555555".to_string(),
        },
        assets: vec![
            SupportedAsset {
                address: WETH.to_string(),
                symbol: "WETH".to_string(),
            },
            SupportedAsset {
                address: USDC.to_string(),
                symbol: "USDC".to_string(),
            },
            SupportedAsset {
                address: DAI.to_string(),
                symbol: "DAI".to_string(),
            },
        ],
        debt_asset: DAI.to_string(),
        poll_interval_ms: 5_000,
        decimals_overrides: DecimalsOverrides::default(),
    }
}
