use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

/// Used as storage when trying to compute Health
#[cw_serde]
#[derive(Default)]
pub struct CollateralValue {
    pub total_collateral_value: Decimal,
    pub max_ltv_adjusted_collateral: Decimal,
    pub liquidation_threshold_adjusted_collateral: Decimal,
}
