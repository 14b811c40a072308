use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use lendview_math::FormatError;
use thiserror::Error;
#[cfg(feature = "javascript")]
use tsify::Tsify;

/// One row per (user, asset). The amount is in the asset's smallest unit.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CollateralHolding {
    /// Lowercased asset address
    pub asset: String,
    pub amount: Uint128,
}

impl CollateralHolding {
    pub fn new(asset: impl Into<String>, amount: impl Into<Uint128>) -> Self {
        Self {
            asset: asset.into().to_lowercase(),
            amount: amount.into(),
        }
    }
}

#[cw_serde]
#[derive(Copy, Eq, Default)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum PositionStatus {
    #[default]
    Inactive,
    Active,
    Repaid,
    Liquidated,
}

#[cw_serde]
pub enum PositionEvent {
    Borrow {
        amount: Uint128,
    },
    Repay {
        amount: Uint128,
    },
    Liquidate,
}

#[derive(Error, Debug, PartialEq)]
pub enum PositionError {
    #[error("Cannot {action} a position that is {status:?}")]
    InvalidTransition {
        action: String,
        status: PositionStatus,
    },

    #[error("Borrow amount must be greater than zero")]
    ZeroBorrow,

    #[error("{0}")]
    Format(#[from] FormatError),
}

/// Borrow position of a user.
///
/// The protocol allows at most one position per address, so a user maps to
/// `Option<Position>`. A new borrow after a terminal state reopens the same
/// position.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Position {
    pub owner: String,
    /// Raw debt in the debt asset's smallest unit
    pub borrowed_amount: Uint128,
    pub status: PositionStatus,
}

impl Position {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into().to_lowercase(),
            borrowed_amount: Uint128::zero(),
            status: PositionStatus::Inactive,
        }
    }

    /// Build a position from on-chain debt alone. Only `Active` and
    /// `Inactive` can be told apart without history.
    pub fn from_borrowed_amount(owner: impl Into<String>, borrowed_amount: Uint128) -> Self {
        let mut position = Self::new(owner);
        if !borrowed_amount.is_zero() {
            position.borrowed_amount = borrowed_amount;
            position.status = PositionStatus::Active;
        }
        position
    }

    /// Replay events in order on a fresh position.
    pub fn replay<'a>(
        owner: impl Into<String>,
        events: impl IntoIterator<Item = &'a PositionEvent>,
    ) -> Result<Self, PositionError> {
        let mut position = Self::new(owner);
        for event in events {
            position.apply(event)?;
        }
        Ok(position)
    }

    pub fn apply(&mut self, event: &PositionEvent) -> Result<(), PositionError> {
        match event {
            PositionEvent::Borrow {
                amount,
            } => {
                if amount.is_zero() {
                    return Err(PositionError::ZeroBorrow);
                }
                self.borrowed_amount = self.borrowed_amount.saturating_add(*amount);
                self.status = PositionStatus::Active;
            }
            PositionEvent::Repay {
                amount,
            } => {
                self.assert_active("repay")?;
                // overpayment is refunded by the contract
                self.borrowed_amount = self.borrowed_amount.saturating_sub(*amount);
                if self.borrowed_amount.is_zero() {
                    self.status = PositionStatus::Repaid;
                }
            }
            PositionEvent::Liquidate => {
                self.assert_active("liquidate")?;
                self.borrowed_amount = Uint128::zero();
                self.status = PositionStatus::Liquidated;
            }
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == PositionStatus::Active
    }

    fn assert_active(&self, action: &str) -> Result<(), PositionError> {
        if !self.is_active() {
            return Err(PositionError::InvalidTransition {
                action: action.to_string(),
                status: self.status,
            });
        }
        Ok(())
    }
}
