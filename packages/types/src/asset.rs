use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use lendview_math::{atomics_to_decimal, DecimalsOverrides, USD_PRICE_DECIMALS};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::error::{HealthResult, ValidationError};

/// Static asset parameters as returned by `getAssetConfig` on the collateral
/// manager. Percentages are whole integers (66 means 66%).
#[cw_serde]
pub struct AssetConfigResponse {
    pub ltv: u64,
    pub liquidation_threshold: u64,
    pub liquidation_penalty: u64,
    pub decimals: u32,
    pub enabled: bool,
    pub symbol: String,
}

/// Authoritative per-asset parameters, combined from the static config read
/// and the oracle price read. Percentages are stored as fractions.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AssetConfig {
    /// Lowercased contract address
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
    /// Max fraction of the asset's USD value that counts toward borrowing power
    pub ltv: Decimal,
    /// Fraction of the asset's USD value that counts toward solvency
    pub liquidation_threshold: Decimal,
    pub liquidation_penalty: Decimal,
    /// USD price of one whole unit
    pub price: Decimal,
    pub enabled: bool,
}

impl AssetConfig {
    /// Combine the two contract reads for `address`.
    ///
    /// The decimals override table is authoritative over the decimals field
    /// reported by the contract.
    pub fn from_reads(
        address: &str,
        response: &AssetConfigResponse,
        raw_price: Uint128,
        overrides: &DecimalsOverrides,
    ) -> Result<Self, ValidationError> {
        assert_percent_le_hundred(response.ltv, "ltv")?;
        assert_percent_le_hundred(response.liquidation_threshold, "liquidation_threshold")?;
        assert_percent_le_hundred(response.liquidation_penalty, "liquidation_penalty")?;

        let price = atomics_to_decimal(raw_price, USD_PRICE_DECIMALS).map_err(|_| {
            ValidationError::InvalidParam {
                param_name: "price".to_string(),
                invalid_value: raw_price.to_string(),
                predicate: "representable as a decimal".to_string(),
            }
        })?;

        let config = Self {
            address: address.to_lowercase(),
            symbol: response.symbol.clone(),
            decimals: overrides.resolve(Some(&response.symbol), response.decimals),
            ltv: Decimal::percent(response.ltv),
            liquidation_threshold: Decimal::percent(response.liquidation_threshold),
            liquidation_penalty: Decimal::percent(response.liquidation_penalty),
            price,
            enabled: response.enabled,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        assert_lqt_ge_ltv(self.ltv, self.liquidation_threshold)
    }

    /// Whole units held for a raw amount in the asset's smallest unit.
    pub fn amount_to_decimal(&self, amount: Uint128) -> HealthResult<Decimal> {
        Ok(atomics_to_decimal(amount, self.decimals)?)
    }

    /// USD value of a raw amount
    pub fn value_of(&self, amount: Uint128) -> HealthResult<Decimal> {
        Ok(self.amount_to_decimal(amount)?.checked_mul(self.price)?)
    }

    /// USD value of a whole-unit amount
    pub fn value_of_decimal(&self, amount: Decimal) -> HealthResult<Decimal> {
        Ok(amount.checked_mul(self.price)?)
    }
}

fn assert_percent_le_hundred(value: u64, param_name: &str) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::InvalidParam {
            param_name: param_name.to_string(),
            invalid_value: value.to_string(),
            predicate: "<= 100".to_string(),
        });
    }
    Ok(())
}

/// A threshold below the LTV would make freshly opened positions liquidatable.
fn assert_lqt_ge_ltv(ltv: Decimal, liq_threshold: Decimal) -> Result<(), ValidationError> {
    if liq_threshold < ltv {
        return Err(ValidationError::InvalidParam {
            param_name: "liquidation_threshold".to_string(),
            invalid_value: liq_threshold.to_string(),
            predicate: format!(">= {} (ltv)", ltv),
        });
    }
    Ok(())
}
