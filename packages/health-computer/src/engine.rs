use std::cmp::min;

use cosmwasm_std::Decimal;
use lendview_types::{
    error::HealthResult,
    health::{HealthBand, GAUGE_CEILING, LIQUIDATION_FLOOR},
};

/// Share of the gauge each band occupies, in percent
const GAUGE_BAND_WIDTH: u64 = 25;

/// Liquidation threshold adjusted collateral over the value of debt.
///
/// Returns `None` when there is no debt: the account is not at risk.
pub fn health_factor(
    liquidation_threshold_adjusted_collateral: Decimal,
    total_debt_value: Decimal,
) -> HealthResult<Option<Decimal>> {
    if total_debt_value.is_zero() {
        return Ok(None);
    }
    Ok(Some(liquidation_threshold_adjusted_collateral.checked_div(total_debt_value)?))
}

pub fn health_band(health_factor: Option<Decimal>) -> Option<HealthBand> {
    health_factor.map(HealthBand::from_health_factor)
}

/// New borrows need a health factor in the warning band or above. No debt
/// means no health factor, which never blocks a borrow.
pub fn can_borrow(health_factor: Option<Decimal>) -> bool {
    health_band(health_factor).map_or(true, |band| band.allows_borrow())
}

/// Position of the needle on the health gauge, in [0, 100].
///
/// Display only: eligibility checks use the health factor itself.
pub fn gauge_percentage(health_factor: Option<Decimal>) -> HealthResult<Decimal> {
    let full = Decimal::from_ratio(100u128, 1u128);
    let Some(hf) = health_factor else {
        return Ok(full);
    };
    if hf >= GAUGE_CEILING {
        return Ok(full);
    }
    if hf < LIQUIDATION_FLOOR {
        return Ok(Decimal::zero());
    }

    let band = HealthBand::from_health_factor(hf);
    let (lower, upper) = band.gauge_bounds();
    let progress = (hf - lower).checked_div(upper - lower)?;
    let pct = Decimal::from_ratio(band.gauge_offset(), 1u64)
        .checked_add(progress.checked_mul(Decimal::from_ratio(GAUGE_BAND_WIDTH, 1u64))?)?;

    Ok(min(pct, full))
}
