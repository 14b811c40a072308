use cosmwasm_std::{Decimal, Decimal256, Uint256};
use tracing::{debug, warn};

use crate::ReaderResult;

/// Decimals of the contract-reported health factor
pub const CONTRACT_HEALTH_FACTOR_DECIMALS: u32 = 2;

/// Max gap between the local and the contract health factor before a
/// divergence is reported. The contract truncates to 2 decimals.
pub const HEALTH_FACTOR_TOLERANCE: Decimal = Decimal::raw(10_000_000_000_000_000);

/// Decode the raw `getHealthFactor` value. The all-ones sentinel becomes
/// `None`, the same as a locally computed position without debt.
pub fn decode_health_factor(raw: Uint256) -> ReaderResult<Option<Decimal>> {
    if raw == Uint256::MAX {
        return Ok(None);
    }
    let hf = Decimal256::from_atomics(raw, CONTRACT_HEALTH_FACTOR_DECIMALS)?;
    Ok(Some(Decimal::try_from(hf)?))
}

/// Compare the locally computed health factor with the contract's.
///
/// The local value stays authoritative for display. Returns whether the two
/// agree within `HEALTH_FACTOR_TOLERANCE`.
pub fn reconcile_health_factor(local: Option<Decimal>, contract: Option<Decimal>) -> bool {
    let agrees = match (local, contract) {
        (None, None) => true,
        (Some(local), Some(contract)) => local.abs_diff(contract) <= HEALTH_FACTOR_TOLERANCE,
        _ => false,
    };

    if agrees {
        debug!(?local, ?contract, "health factor matches contract");
    } else {
        warn!(?local, ?contract, "health factor diverges from contract");
    }
    agrees
}
