use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::health::SimulatedHealthFactor;

#[cw_serde]
#[derive(Copy, Eq)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SimulationWarning {
    /// Resulting HF would be under the liquidation floor
    HealthFactorTooLow,
    /// Borrow exceeds the LTV-weighted borrowing power left
    ExceedsBorrowCapacity,
    /// Withdraw exceeds the amount deposited for the asset
    ExceedsDeposit,
    /// Deposits of the asset have been switched off
    AssetDisabled,
    /// Borrow leaves HF under the borrow warning floor
    BorrowRiskIncreases,
    /// Withdraw leaves HF under the recommended withdraw floor
    BelowSafeWithdrawFloor,
    /// Repay exceeds the debt; the contract refunds the difference
    RepayExceedsDebt,
    /// Amount is larger than any balance the protocol can hold
    AmountOutOfRange,
}

impl SimulationWarning {
    /// Blocking warnings make the transaction non-submittable.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            SimulationWarning::HealthFactorTooLow
                | SimulationWarning::ExceedsBorrowCapacity
                | SimulationWarning::ExceedsDeposit
                | SimulationWarning::AssetDisabled
                | SimulationWarning::AmountOutOfRange
        )
    }
}

impl fmt::Display for SimulationWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            SimulationWarning::HealthFactorTooLow => {
                "Health factor too low: this transaction would make the position liquidatable"
            }
            SimulationWarning::ExceedsBorrowCapacity => {
                "Amount exceeds your available borrowing capacity"
            }
            SimulationWarning::ExceedsDeposit => "Amount exceeds your deposited balance",
            SimulationWarning::AssetDisabled => "Deposits of this asset are currently disabled",
            SimulationWarning::BorrowRiskIncreases => {
                "Liquidation risk increases with a health factor below 1.5"
            }
            SimulationWarning::BelowSafeWithdrawFloor => {
                "Health factor would drop below the recommended 1.2 after this withdrawal"
            }
            SimulationWarning::RepayExceedsDebt => {
                "Amount exceeds your debt, the excess will be refunded by the contract"
            }
            SimulationWarning::AmountOutOfRange => "Amount is too large",
        };
        write!(f, "{}", msg)
    }
}

#[cw_serde]
#[derive(Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BorrowSimulation {
    pub simulated_health_factor: Option<SimulatedHealthFactor>,
    pub is_valid_amount: bool,
    pub warning: Option<SimulationWarning>,
    /// Debt-asset units still borrowable under the LTV limit
    pub max_borrowable: Option<Decimal>,
}

#[cw_serde]
#[derive(Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RepaySimulation {
    pub simulated_health_factor: Option<SimulatedHealthFactor>,
    pub is_valid_amount: bool,
    pub warning: Option<SimulationWarning>,
    /// Current debt in debt-asset units
    pub max_repayable: Option<Decimal>,
}

#[cw_serde]
#[derive(Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct WithdrawSimulation {
    pub simulated_health_factor: Option<SimulatedHealthFactor>,
    pub is_valid_amount: bool,
    /// False when the withdrawal is allowed but lands under the recommended floor
    pub is_safe: bool,
    pub warning: Option<SimulationWarning>,
    /// Largest withdrawal keeping HF at or above the recommended floor
    pub max_safe_withdraw: Option<Decimal>,
    /// Largest withdrawal keeping HF at or above the liquidation floor
    pub max_absolute_withdraw: Option<Decimal>,
}

#[cw_serde]
#[derive(Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DepositSimulation {
    pub simulated_health_factor: Option<SimulatedHealthFactor>,
    pub is_valid_amount: bool,
    pub warning: Option<SimulationWarning>,
}

macro_rules! impl_warning_message {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn warning_message(&self) -> Option<String> {
                    self.warning.map(|w| w.to_string())
                }
            }
        )*
    };
}

impl_warning_message!(BorrowSimulation, RepaySimulation, WithdrawSimulation, DepositSimulation);
