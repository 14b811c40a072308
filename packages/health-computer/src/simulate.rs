use cosmwasm_std::Decimal;
use lendview_math::{parse_amount_input, AmountInput};
use lendview_types::{
    error::HealthResult,
    health::{SimulatedHealthFactor, BORROW_WARNING_FLOOR, LIQUIDATION_FLOOR, SAFE_WITHDRAW_FLOOR},
    simulation::{
        BorrowSimulation, DepositSimulation, RepaySimulation, SimulationWarning,
        WithdrawSimulation,
    },
};

use crate::{health_computer::simulated_ratio, HealthComputer};

// Every simulator returns a result with `simulated_health_factor: None` when
// either the data it needs or the amount is missing. Neither case is an error.

impl HealthComputer {
    /// Predict the position after borrowing `amount` units of the debt asset.
    pub fn simulate_borrow(&self, amount: &str) -> HealthResult<BorrowSimulation> {
        let Some(debt_config) = self.priced_config(&self.debt_asset) else {
            return Ok(BorrowSimulation::default());
        };

        let health = self.compute_health()?;
        let max_borrowable = health.available_to_borrow_value().checked_div(debt_config.price)?;

        let exceeds_capacity = BorrowSimulation {
            is_valid_amount: false,
            warning: Some(SimulationWarning::ExceedsBorrowCapacity),
            max_borrowable: Some(max_borrowable),
            ..Default::default()
        };

        let amount = match parse_amount_input(amount) {
            AmountInput::Pending => {
                return Ok(BorrowSimulation {
                    max_borrowable: Some(max_borrowable),
                    ..Default::default()
                })
            }
            AmountInput::OutOfRange => return Ok(exceeds_capacity),
            AmountInput::Amount(amount) => amount,
        };

        // A debt too large to value is far past any borrowing power
        let borrowed = self.borrowed_decimal()?;
        let Ok(new_debt_value) =
            borrowed.checked_add(amount).and_then(|debt| debt.checked_mul(debt_config.price))
        else {
            return Ok(exceeds_capacity);
        };
        let simulated =
            simulated_ratio(health.liquidation_threshold_adjusted_collateral, new_debt_value)?;

        let (is_valid_amount, warning) = if simulated.is_below(LIQUIDATION_FLOOR) {
            (false, Some(SimulationWarning::HealthFactorTooLow))
        } else if amount > max_borrowable {
            (false, Some(SimulationWarning::ExceedsBorrowCapacity))
        } else if simulated.is_below(BORROW_WARNING_FLOOR) {
            (true, Some(SimulationWarning::BorrowRiskIncreases))
        } else {
            (true, None)
        };

        Ok(BorrowSimulation {
            simulated_health_factor: Some(simulated),
            is_valid_amount,
            warning,
            max_borrowable: Some(max_borrowable),
        })
    }

    /// Predict the position after repaying `amount` units of the debt asset.
    ///
    /// Repaying more than the debt is allowed: the contract refunds the rest.
    pub fn simulate_repay(&self, amount: &str) -> HealthResult<RepaySimulation> {
        let current = self.borrowed_decimal()?;

        let amount = match parse_amount_input(amount) {
            AmountInput::Pending => {
                return Ok(RepaySimulation {
                    max_repayable: Some(current),
                    ..Default::default()
                })
            }
            AmountInput::OutOfRange => Decimal::MAX,
            AmountInput::Amount(amount) => amount,
        };

        let new_borrowed = current.saturating_sub(amount);
        let simulated = if new_borrowed.is_zero() {
            SimulatedHealthFactor::Infinite
        } else {
            let Some(debt_config) = self.priced_config(&self.debt_asset) else {
                return Ok(RepaySimulation {
                    max_repayable: Some(current),
                    ..Default::default()
                });
            };
            let health = self.compute_health()?;
            simulated_ratio(
                health.liquidation_threshold_adjusted_collateral,
                new_borrowed.checked_mul(debt_config.price)?,
            )?
        };

        Ok(RepaySimulation {
            simulated_health_factor: Some(simulated),
            is_valid_amount: true,
            warning: (amount > current).then_some(SimulationWarning::RepayExceedsDebt),
            max_repayable: Some(current),
        })
    }

    /// Predict the position after withdrawing `amount` whole units of `asset`.
    pub fn simulate_withdraw(&self, asset: &str, amount: &str) -> HealthResult<WithdrawSimulation> {
        let Some(config) = self.priced_config(asset) else {
            return Ok(WithdrawSimulation::default());
        };
        if !self.debt_is_priced() {
            return Ok(WithdrawSimulation::default());
        }

        let bounds = WithdrawSimulation {
            max_safe_withdraw: Some(self.max_withdraw_amount_estimate(asset, SAFE_WITHDRAW_FLOOR)?),
            max_absolute_withdraw: Some(
                self.max_withdraw_amount_estimate(asset, LIQUIDATION_FLOOR)?,
            ),
            ..Default::default()
        };

        let exceeds_deposit = WithdrawSimulation {
            warning: Some(SimulationWarning::ExceedsDeposit),
            ..bounds.clone()
        };
        let amount = match parse_amount_input(amount) {
            AmountInput::Pending => return Ok(bounds),
            AmountInput::OutOfRange => return Ok(exceeds_deposit),
            AmountInput::Amount(amount) => amount,
        };

        // Independent of health: you cannot withdraw what you did not deposit
        let deposited = config.amount_to_decimal(self.deposited_amount(asset))?;
        if amount > deposited {
            return Ok(exceeds_deposit);
        }

        let health = self.compute_health()?;
        let removed =
            config.value_of_decimal(amount)?.checked_mul(config.liquidation_threshold)?;
        let new_liq_adjusted = health.liquidation_threshold_adjusted_collateral.saturating_sub(removed);
        let simulated = if health.has_debt() {
            simulated_ratio(new_liq_adjusted, health.total_debt_value)?
        } else {
            SimulatedHealthFactor::Infinite
        };

        let (is_valid_amount, is_safe, warning) = if simulated.is_below(LIQUIDATION_FLOOR) {
            (false, false, Some(SimulationWarning::HealthFactorTooLow))
        } else if simulated.is_below(SAFE_WITHDRAW_FLOOR) {
            (true, false, Some(SimulationWarning::BelowSafeWithdrawFloor))
        } else {
            (true, true, None)
        };

        Ok(WithdrawSimulation {
            simulated_health_factor: Some(simulated),
            is_valid_amount,
            is_safe,
            warning,
            ..bounds
        })
    }

    /// Predict the position after depositing `amount` whole units of `asset`.
    pub fn simulate_deposit(&self, asset: &str, amount: &str) -> HealthResult<DepositSimulation> {
        let Some(config) = self.priced_config(asset) else {
            return Ok(DepositSimulation::default());
        };
        if !self.debt_is_priced() {
            return Ok(DepositSimulation::default());
        }
        let out_of_range = DepositSimulation {
            warning: Some(SimulationWarning::AmountOutOfRange),
            ..Default::default()
        };
        let amount = match parse_amount_input(amount) {
            AmountInput::Pending => return Ok(DepositSimulation::default()),
            AmountInput::OutOfRange => return Ok(out_of_range),
            AmountInput::Amount(amount) => amount,
        };

        if !config.enabled {
            return Ok(DepositSimulation {
                warning: Some(SimulationWarning::AssetDisabled),
                ..Default::default()
            });
        }

        let health = self.compute_health()?;
        let Ok(new_liq_adjusted) = amount
            .checked_mul(config.price)
            .and_then(|value| value.checked_mul(config.liquidation_threshold))
            .and_then(|added| health.liquidation_threshold_adjusted_collateral.checked_add(added))
        else {
            return Ok(out_of_range);
        };
        let simulated = if health.has_debt() {
            simulated_ratio(new_liq_adjusted, health.total_debt_value)?
        } else {
            SimulatedHealthFactor::Infinite
        };

        Ok(DepositSimulation {
            simulated_health_factor: Some(simulated),
            is_valid_amount: true,
            warning: None,
        })
    }
}
