use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
#[cfg(feature = "javascript")]
use tsify::Tsify;

/// HF below which a position can be liquidated on-chain. Simulators treat it
/// as a hard rejection.
pub const LIQUIDATION_FLOOR: Decimal = Decimal::raw(1_000_000_000_000_000_000);

/// Recommended minimum HF after a withdrawal. Leaves room for price moves
/// between simulation and execution.
pub const SAFE_WITHDRAW_FLOOR: Decimal = Decimal::raw(1_200_000_000_000_000_000);

/// Borrows that leave HF below this are allowed but warned about.
pub const BORROW_WARNING_FLOOR: Decimal = Decimal::raw(1_500_000_000_000_000_000);

/// Lower bound of the danger band
pub const DANGER_THRESHOLD: Decimal = Decimal::raw(1_200_000_000_000_000_000);

/// Lower bound of the warning band, and the minimum HF for opening new borrows
pub const WARNING_THRESHOLD: Decimal = Decimal::raw(1_500_000_000_000_000_000);

/// Lower bound of the safe band
pub const SAFE_THRESHOLD: Decimal = Decimal::raw(2_000_000_000_000_000_000);

/// HF at which the gauge reads 100%
pub const GAUGE_CEILING: Decimal = Decimal::raw(3_000_000_000_000_000_000);

/// Discrete risk level of a defined health factor. Variants are ordered from
/// most to least risky.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum HealthBand {
    Liquidation,
    Danger,
    Warning,
    Safe,
}

impl HealthBand {
    pub fn from_health_factor(health_factor: Decimal) -> Self {
        if health_factor >= SAFE_THRESHOLD {
            HealthBand::Safe
        } else if health_factor >= WARNING_THRESHOLD {
            HealthBand::Warning
        } else if health_factor >= DANGER_THRESHOLD {
            HealthBand::Danger
        } else {
            HealthBand::Liquidation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Safe => "Safe",
            HealthBand::Warning => "Warning",
            HealthBand::Danger => "Danger",
            HealthBand::Liquidation => "At Risk",
        }
    }

    /// Only warning-and-above positions may open new borrows.
    pub fn allows_borrow(&self) -> bool {
        matches!(self, HealthBand::Safe | HealthBand::Warning)
    }

    /// HF range the band covers on the gauge, lower bound first.
    pub fn gauge_bounds(&self) -> (Decimal, Decimal) {
        match self {
            HealthBand::Safe => (SAFE_THRESHOLD, GAUGE_CEILING),
            HealthBand::Warning => (WARNING_THRESHOLD, SAFE_THRESHOLD),
            HealthBand::Danger => (DANGER_THRESHOLD, WARNING_THRESHOLD),
            HealthBand::Liquidation => (LIQUIDATION_FLOOR, DANGER_THRESHOLD),
        }
    }

    /// Gauge percentage at which the band starts. Each band owns a quarter.
    pub fn gauge_offset(&self) -> u64 {
        match self {
            HealthBand::Liquidation => 0,
            HealthBand::Danger => 25,
            HealthBand::Warning => 50,
            HealthBand::Safe => 75,
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
