use std::collections::HashMap;

use futures::future::join_all;
use lendview_types::{asset::AssetConfig, config::DashboardConfig};
use tracing::{debug, warn};

use crate::{ProtocolQuerier, ReaderResult};

/// Builds the per-asset config map from the collateral manager and the
/// oracle. Results live for one poll tick.
pub struct AssetConfigResolver<'a, Q> {
    querier: &'a Q,
    config: &'a DashboardConfig,
}

impl<'a, Q: ProtocolQuerier> AssetConfigResolver<'a, Q> {
    pub fn new(querier: &'a Q, config: &'a DashboardConfig) -> Self {
        Self {
            querier,
            config,
        }
    }

    /// Read config and price of one asset and combine them.
    pub async fn resolve_asset(&self, address: &str) -> ReaderResult<AssetConfig> {
        let (response, raw_price) =
            futures::try_join!(self.querier.asset_config(address), self.querier.price(address))?;
        Ok(AssetConfig::from_reads(address, &response, raw_price, &self.config.decimals_overrides)?)
    }

    /// Resolve every supported asset concurrently, keyed by lowercased address.
    ///
    /// An asset whose reads fail, or whose parameters do not validate, is left
    /// out of the map so it reads as "not loaded yet".
    pub async fn resolve(&self) -> HashMap<String, AssetConfig> {
        let reads = self.config.assets.iter().map(|asset| async move {
            (asset, self.resolve_asset(&asset.address).await)
        });

        join_all(reads)
            .await
            .into_iter()
            .filter_map(|(asset, res)| match res {
                Ok(config) => {
                    debug!(asset = %asset.symbol, price = %config.price, "resolved asset config");
                    Some((config.address.clone(), config))
                }
                Err(err) => {
                    warn!(asset = %asset.symbol, error = %err, "failed to resolve asset config");
                    None
                }
            })
            .collect()
    }
}
