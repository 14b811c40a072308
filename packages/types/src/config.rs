use std::{collections::HashSet, time::Duration};

use cosmwasm_schema::cw_serde;
use lendview_math::DecimalsOverrides;

use crate::error::ValidationError;

pub const MIN_POLL_INTERVAL_MS: u64 = 1_000;
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

#[cw_serde]
pub struct ContractAddresses {
    /// Custodies collateral and serves `getAssetConfig` / `getUserCollaterals`
    pub collateral_manager: String,
    /// Tracks debt and serves `getBorrowedAmount` / `getHealthFactor`
    pub lending_pool: String,
    pub oracle: String,
}

#[cw_serde]
pub struct SupportedAsset {
    pub address: String,
    pub symbol: String,
}

/// Deployment configuration. Built once at startup and passed down to every
/// component that needs an address or a cadence.
#[cw_serde]
pub struct DashboardConfig {
    pub chain_id: u64,
    pub contracts: ContractAddresses,
    pub assets: Vec<SupportedAsset>,
    /// Address of the asset every debt is denominated in
    pub debt_asset: String,
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub decimals_overrides: DecimalsOverrides,
}

impl DashboardConfig {
    /// Parse, normalize and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.normalized()
    }

    /// Lowercase every address, then validate.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        self.contracts.collateral_manager = validate_address(&self.contracts.collateral_manager)?;
        self.contracts.lending_pool = validate_address(&self.contracts.lending_pool)?;
        self.contracts.oracle = validate_address(&self.contracts.oracle)?;
        self.debt_asset = validate_address(&self.debt_asset)?;
        for asset in self.assets.iter_mut() {
            asset.address = validate_address(&asset.address)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chain_id == 0 {
            return Err(ValidationError::InvalidParam {
                param_name: "chain_id".to_string(),
                invalid_value: self.chain_id.to_string(),
                predicate: "> 0".to_string(),
            });
        }

        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(ValidationError::InvalidParam {
                param_name: "poll_interval_ms".to_string(),
                invalid_value: self.poll_interval_ms.to_string(),
                predicate: format!("[{}, {}]", MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
            });
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            if !seen.insert(asset.address.as_str()) {
                return Err(ValidationError::InvalidConfig {
                    reason: format!("asset {} is listed more than once", asset.address),
                });
            }
        }

        if !self.is_supported(&self.debt_asset) {
            return Err(ValidationError::InvalidConfig {
                reason: format!("debt asset {} is not a supported asset", self.debt_asset),
            });
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn supported_asset(&self, address: &str) -> Option<&SupportedAsset> {
        self.assets.iter().find(|a| a.address.eq_ignore_ascii_case(address))
    }

    pub fn is_supported(&self, address: &str) -> bool {
        self.supported_asset(address).is_some()
    }
}

/// Checks for a `0x`-prefixed, 20-byte hex address and returns it lowercased.
pub fn validate_address(address: &str) -> Result<String, ValidationError> {
    let Some(hex) = address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) else {
        return Err(ValidationError::InvalidAddress {
            reason: format!("{} is missing the 0x prefix", address),
        });
    };
    if hex.len() != 40 {
        return Err(ValidationError::InvalidAddress {
            reason: format!("{} is not 20 bytes long", address),
        });
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidAddress {
            reason: format!("{} contains non-hex characters", address),
        });
    }
    Ok(address.to_lowercase())
}
