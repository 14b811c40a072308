use std::collections::HashMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CheckedFromRatioError, Decimal, Uint128};
use lendview_math::{atomics_to_decimal, WEI_DECIMALS};
use lendview_types::{
    asset::AssetConfig,
    error::{HealthError::MissingPrice, HealthResult},
    health::{Health, SimulatedHealthFactor},
    position::CollateralHolding,
};
#[cfg(feature = "javascript")]
use tsify::Tsify;
use tracing::debug;

use crate::{health_factor, CollateralValue};

/// `HealthComputer` is a shared struct with the frontend that gets compiled to wasm.
/// For this reason, it uses a dependency-injection-like pattern where all required data is needed up front.
///
/// Every number it produces is recomputed from raw amounts and live prices;
/// pre-aggregated totals from the indexer never enter it.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HealthComputer {
    pub holdings: Vec<CollateralHolding>,
    /// Raw debt, always denominated in `debt_asset` with 18 decimals
    pub borrowed_amount: Uint128,
    /// Resolved configs keyed by lowercased address. A missing key means the
    /// asset has not loaded yet, not that its parameters are zero.
    pub asset_configs: HashMap<String, AssetConfig>,
    pub debt_asset: String,
}

impl HealthComputer {
    pub fn compute_health(&self) -> HealthResult<Health> {
        let CollateralValue {
            total_collateral_value,
            max_ltv_adjusted_collateral,
            liquidation_threshold_adjusted_collateral,
        } = self.collateral_value()?;

        let total_debt_value = self.debt_value()?;

        let liquidation_health_factor =
            health_factor(liquidation_threshold_adjusted_collateral, total_debt_value)?;

        Ok(Health {
            borrowed_amount: self.borrowed_amount,
            total_debt_value,
            total_collateral_value,
            max_ltv_adjusted_collateral,
            liquidation_threshold_adjusted_collateral,
            liquidation_health_factor,
        })
    }

    /// Debt in whole units of the debt asset
    pub fn borrowed_decimal(&self) -> HealthResult<Decimal> {
        Ok(atomics_to_decimal(self.borrowed_amount, WEI_DECIMALS)?)
    }

    /// Total raw amount deposited of `asset`
    pub fn deposited_amount(&self, asset: &str) -> Uint128 {
        self.holdings
            .iter()
            .filter(|h| h.asset.eq_ignore_ascii_case(asset))
            .map(|h| h.amount)
            .fold(Uint128::zero(), |acc, amount| acc.saturating_add(amount))
    }

    pub fn asset_config(&self, asset: &str) -> Option<&AssetConfig> {
        self.asset_configs.get(&asset.to_lowercase())
    }

    /// Config of `asset` if it has a usable (non-zero) price
    pub(crate) fn priced_config(&self, asset: &str) -> Option<&AssetConfig> {
        self.asset_config(asset).filter(|c| !c.price.is_zero())
    }

    /// Whether outstanding debt, if any, can be valued
    pub(crate) fn debt_is_priced(&self) -> bool {
        self.borrowed_amount.is_zero() || self.priced_config(&self.debt_asset).is_some()
    }

    fn debt_value(&self) -> HealthResult<Decimal> {
        if self.borrowed_amount.is_zero() {
            return Ok(Decimal::zero());
        }
        // A zero price means the oracle has not answered yet, not that the
        // debt is worthless
        let debt_config =
            self.priced_config(&self.debt_asset).ok_or(MissingPrice(self.debt_asset.clone()))?;
        Ok(self.borrowed_decimal()?.checked_mul(debt_config.price)?)
    }

    fn collateral_value(&self) -> HealthResult<CollateralValue> {
        let mut total_collateral_value = Decimal::zero();
        let mut max_ltv_adjusted_collateral = Decimal::zero();
        let mut liquidation_threshold_adjusted_collateral = Decimal::zero();

        for holding in &self.holdings {
            // Totals under-report until every config has loaded
            let Some(config) = self.asset_config(&holding.asset) else {
                debug!(asset = %holding.asset, "asset config not resolved, excluding holding from valuation");
                continue;
            };

            let value = config.value_of(holding.amount)?;
            total_collateral_value = total_collateral_value.checked_add(value)?;

            let ltv_adjusted = value.checked_mul(config.ltv)?;
            max_ltv_adjusted_collateral = max_ltv_adjusted_collateral.checked_add(ltv_adjusted)?;

            let liq_adjusted = value.checked_mul(config.liquidation_threshold)?;
            liquidation_threshold_adjusted_collateral =
                liquidation_threshold_adjusted_collateral.checked_add(liq_adjusted)?;
        }

        Ok(CollateralValue {
            total_collateral_value,
            max_ltv_adjusted_collateral,
            liquidation_threshold_adjusted_collateral,
        })
    }
}

/// Ratio used by the simulators. A zero denominator means the simulated
/// debt is gone.
pub(crate) fn simulated_ratio(
    liquidation_threshold_adjusted_collateral: Decimal,
    debt_value: Decimal,
) -> HealthResult<SimulatedHealthFactor> {
    if debt_value.is_zero() {
        return Ok(SimulatedHealthFactor::Infinite);
    }
    match liquidation_threshold_adjusted_collateral.checked_div(debt_value) {
        Ok(hf) => Ok(SimulatedHealthFactor::Finite(hf)),
        // Dust debt against large collateral: saturate instead of failing
        Err(CheckedFromRatioError::Overflow) => Ok(SimulatedHealthFactor::Finite(Decimal::MAX)),
        Err(err) => Err(err.into()),
    }
}
