use async_trait::async_trait;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Uint128, Uint256};
use lendview_types::{asset::AssetConfigResponse, config::DashboardConfig, position::CollateralHolding};
use tracing::warn;

use crate::{ReaderError, ReaderResult};

/// Read-only view of the deployed contracts. Every method is one contract
/// call; implementations do not cache.
#[async_trait]
pub trait ProtocolQuerier: Send + Sync {
    /// Raw debt of `user`, 18 decimals in the debt asset
    async fn borrowed_amount(&self, user: &str) -> ReaderResult<Uint128>;

    async fn user_collaterals(&self, user: &str) -> ReaderResult<UserCollateralsResponse>;

    /// USD price of one whole unit of `asset`, 8 decimals
    async fn price(&self, asset: &str) -> ReaderResult<Uint128>;

    async fn asset_config(&self, asset: &str) -> ReaderResult<AssetConfigResponse>;

    /// Contract-reported health factor with 2 decimals. All bits set means
    /// the user has no debt.
    async fn health_factor(&self, user: &str) -> ReaderResult<Uint256>;
}

/// `getUserCollaterals` returns three parallel arrays.
#[cw_serde]
#[derive(Default)]
pub struct UserCollateralsResponse {
    pub assets: Vec<String>,
    pub amounts: Vec<Uint128>,
    /// Not used for valuation. Holdings are re-priced from the oracle.
    pub values_usd: Vec<Uint256>,
}

impl UserCollateralsResponse {
    /// Zip the parallel arrays into one record per holding.
    ///
    /// Assets missing from `config` are logged and dropped.
    pub fn into_holdings(self, config: &DashboardConfig) -> ReaderResult<Vec<CollateralHolding>> {
        if self.assets.len() != self.amounts.len() {
            return Err(ReaderError::MalformedResponse {
                method: "getUserCollaterals".to_string(),
                reason: format!(
                    "{} assets but {} amounts",
                    self.assets.len(),
                    self.amounts.len()
                ),
            });
        }

        let holdings = self
            .assets
            .into_iter()
            .zip(self.amounts)
            .filter(|(asset, _)| {
                let supported = config.is_supported(asset);
                if !supported {
                    warn!(asset = %asset, "unsupported collateral asset, excluding holding");
                }
                supported
            })
            .map(|(asset, amount)| CollateralHolding::new(asset, amount))
            .collect();

        Ok(holdings)
    }
}
