use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::health::{HealthBand, LIQUIDATION_FLOOR};

/// USD valuation of an account, recomputed from raw amounts and live prices.
#[cw_serde]
#[derive(Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Health {
    /// Raw debt in the debt asset's smallest unit
    pub borrowed_amount: Uint128,
    /// The value of the debt
    pub total_debt_value: Decimal,
    /// The sum of the value of all collaterals
    pub total_collateral_value: Decimal,
    /// The sum of the value of all collaterals adjusted by their LTV
    pub max_ltv_adjusted_collateral: Decimal,
    /// The sum of the value of all collaterals adjusted by their liquidation threshold
    pub liquidation_threshold_adjusted_collateral: Decimal,
    /// Liquidation threshold adjusted collateral over the value of debt.
    /// `None` when there is no debt.
    pub liquidation_health_factor: Option<Decimal>,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "(borrowed_amount: {}, total_debt_value: {}, total_collateral_value: {}, max_ltv_adjusted_collateral: {}, lqdt_threshold_adjusted_collateral: {}, liquidation_health_factor: {})",
            self.borrowed_amount,
            self.total_debt_value,
            self.total_collateral_value,
            self.max_ltv_adjusted_collateral,
            self.liquidation_threshold_adjusted_collateral,
            self.liquidation_health_factor.map_or("n/a".to_string(), |x| x.to_string())
        )
    }
}

impl Health {
    #[inline]
    pub fn has_debt(&self) -> bool {
        !self.borrowed_amount.is_zero()
    }

    #[inline]
    pub fn is_liquidatable(&self) -> bool {
        self.liquidation_health_factor.map_or(false, |hf| hf < LIQUIDATION_FLOOR)
    }

    pub fn band(&self) -> Option<HealthBand> {
        self.liquidation_health_factor.map(HealthBand::from_health_factor)
    }

    /// An account without debt is not at risk and may always borrow.
    pub fn can_borrow(&self) -> bool {
        self.band().map_or(true, |band| band.allows_borrow())
    }

    /// Remaining borrowing power in USD, floored at zero.
    pub fn available_to_borrow_value(&self) -> Decimal {
        self.max_ltv_adjusted_collateral.saturating_sub(self.total_debt_value)
    }
}

/// Health factor predicted by a simulator.
///
/// Distinct from `Health::liquidation_health_factor`, where `None` means "no
/// debt". A simulator that predicts the debt reaches zero reports `Infinite`.
#[cw_serde]
#[derive(Copy)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SimulatedHealthFactor {
    Finite(Decimal),
    Infinite,
}

impl SimulatedHealthFactor {
    pub fn finite(&self) -> Option<Decimal> {
        match self {
            SimulatedHealthFactor::Finite(hf) => Some(*hf),
            SimulatedHealthFactor::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, SimulatedHealthFactor::Infinite)
    }

    pub fn is_below(&self, floor: Decimal) -> bool {
        self.finite().map_or(false, |hf| hf < floor)
    }
}

impl fmt::Display for SimulatedHealthFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulatedHealthFactor::Finite(hf) => write!(f, "{}", hf),
            SimulatedHealthFactor::Infinite => write!(f, "∞"),
        }
    }
}
