use std::sync::Arc;

use cosmwasm_std::Decimal;
use lendview_health_computer::HealthComputer;
use lendview_types::{
    config::{validate_address, DashboardConfig},
    error::HealthError,
    health::Health,
};
use tracing::debug;

use crate::{
    decode_health_factor, reconcile_health_factor, AssetConfigResolver, Poller, ProtocolQuerier,
    ReaderError, ReaderResult,
};

/// Everything read for one user in one poll tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSnapshot {
    /// Inputs for the calculation core: holdings, debt and resolved configs
    pub computer: HealthComputer,
    /// `None` while a config needed to value the debt has not loaded
    pub health: Option<Health>,
    pub contract_health_factor: Option<Decimal>,
    /// Whether `health` agrees with the contract. `None` when `health` is.
    pub matches_contract: Option<bool>,
}

/// Reads a user's position from the contracts.
pub struct AccountReader<Q> {
    querier: Arc<Q>,
    config: Arc<DashboardConfig>,
}

impl<Q: ProtocolQuerier + 'static> AccountReader<Q> {
    pub fn new(querier: Arc<Q>, config: Arc<DashboardConfig>) -> Self {
        Self {
            querier,
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read debt, holdings, contract health factor and asset configs
    /// concurrently, then value the position locally.
    pub async fn snapshot(&self, user: &str) -> ReaderResult<AccountSnapshot> {
        let user = validate_address(user)?;
        let resolver = AssetConfigResolver::new(self.querier.as_ref(), &self.config);

        let (borrowed_amount, collaterals, raw_health_factor, asset_configs) = futures::try_join!(
            self.querier.borrowed_amount(&user),
            self.querier.user_collaterals(&user),
            self.querier.health_factor(&user),
            async { Ok::<_, ReaderError>(resolver.resolve().await) },
        )?;

        let computer = HealthComputer {
            holdings: collaterals.into_holdings(&self.config)?,
            borrowed_amount,
            asset_configs,
            debt_asset: self.config.debt_asset.clone(),
        };
        let contract_health_factor = decode_health_factor(raw_health_factor)?;

        let health = match computer.compute_health() {
            Ok(health) => Some(health),
            Err(HealthError::MissingPrice(asset)) => {
                debug!(user = %user, asset = %asset, "debt asset not priced yet");
                None
            }
            Err(err) => return Err(err.into()),
        };
        let matches_contract = health
            .as_ref()
            .map(|h| reconcile_health_factor(h.liquidation_health_factor, contract_health_factor));

        Ok(AccountSnapshot {
            computer,
            health,
            contract_health_factor,
            matches_contract,
        })
    }

    /// Poll `user`'s snapshot at the configured interval.
    pub fn poll(self: Arc<Self>, user: String) -> Poller<AccountSnapshot> {
        let interval = self.config.poll_interval();
        Poller::spawn("account", interval, move || {
            let reader = self.clone();
            let user = user.clone();
            async move { reader.snapshot(&user).await }
        })
    }
}
