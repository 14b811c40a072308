use std::cmp::min;

use cosmwasm_std::Decimal;
use lendview_types::error::{
    HealthError::{InvalidFloor, MissingAssetConfig, MissingPrice},
    HealthResult,
};

use crate::HealthComputer;

/// Smallest representable decimal. Added to required collateral so rounding
/// in the estimates always lands on the safe side of the floor.
const ROUNDING_MARGIN: Decimal = Decimal::raw(1);

impl HealthComputer {
    /// The max this account can withdraw of `asset`, in whole units, and keep
    /// its health factor at or above `floor`.
    ///
    /// Inverts the withdraw simulator's weighting exactly, so simulating the
    /// returned amount lands on `floor`. Due to rounding it may be slightly
    /// conservative, never aggressive.
    pub fn max_withdraw_amount_estimate(&self, asset: &str, floor: Decimal) -> HealthResult<Decimal> {
        if floor.is_zero() {
            return Err(InvalidFloor(floor.to_string()));
        }

        let config = self.asset_config(asset).ok_or(MissingAssetConfig(asset.to_string()))?;
        let deposited = config.amount_to_decimal(self.deposited_amount(asset))?;
        if deposited.is_zero() {
            return Ok(Decimal::zero());
        }

        let health = self.compute_health()?;

        // With no debt, or when the asset does not count toward solvency, any
        // amount leaves the health factor untouched
        if !health.has_debt() || config.liquidation_threshold.is_zero() || config.price.is_zero() {
            return Ok(deposited);
        }

        let required = health.total_debt_value.checked_mul(floor)?.checked_add(ROUNDING_MARGIN)?;
        let headroom = health.liquidation_threshold_adjusted_collateral.saturating_sub(required);
        let max_withdraw_value = headroom.checked_div(config.liquidation_threshold)?;

        let deposited_value = config.value_of_decimal(deposited)?;
        if max_withdraw_value >= deposited_value {
            return Ok(deposited);
        }

        Ok(min(max_withdraw_value.checked_div(config.price)?, deposited))
    }

    /// The max amount of the debt asset, in whole units, this account can
    /// borrow and keep its health factor at or above `floor`.
    ///
    /// This is the liquidation-threshold view. Borrowing power under the LTV
    /// limit is reported by `simulate_borrow` as `max_borrowable`.
    pub fn max_borrow_amount_estimate(&self, floor: Decimal) -> HealthResult<Decimal> {
        if floor.is_zero() {
            return Err(InvalidFloor(floor.to_string()));
        }

        let debt_config = self
            .priced_config(&self.debt_asset)
            .ok_or(MissingPrice(self.debt_asset.clone()))?;

        let health = self.compute_health()?;
        let max_debt_value = health.liquidation_threshold_adjusted_collateral.checked_div(floor)?;
        let max_debt = max_debt_value.checked_div(debt_config.price)?;

        Ok(max_debt.saturating_sub(self.borrowed_decimal()?))
    }

    /// Borrowing power left under the LTV limit, in whole units of the debt
    /// asset.
    pub fn max_borrowable(&self) -> HealthResult<Decimal> {
        let debt_config = self
            .priced_config(&self.debt_asset)
            .ok_or(MissingPrice(self.debt_asset.clone()))?;
        let health = self.compute_health()?;
        Ok(health.available_to_borrow_value().checked_div(debt_config.price)?)
    }
}
