//! Records served by the protocol indexer.
//!
//! The indexer is a source of history and timestamps only. Several of its
//! aggregate fields are known to be wrong and are kept here solely so they
//! can be deserialized; nothing solvency related reads them.

use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use lendview_math::{token_to_decimal, DecimalsOverrides, FormatError};

use crate::position::{CollateralHolding, Position, PositionError, PositionEvent};

#[cw_serde]
pub struct IndexerUser {
    pub id: String,
    /// Sums per-asset amounts in mixed decimal bases. Do not use.
    pub total_collateral_usd: String,
    pub total_borrowed: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[cw_serde]
pub struct IndexerCollateral {
    pub user: String,
    pub asset: String,
    pub symbol: String,
    /// Raw amount in the asset's smallest unit
    pub amount: String,
    /// Reported precision. Wrong for USDC.
    pub decimals: u32,
    /// Holds the user's cross-asset total rather than this row's value. Do not use.
    pub value_usd: String,
    pub updated_at: u64,
}

impl IndexerCollateral {
    /// Only the raw amount and the asset address survive into a holding.
    pub fn to_holding(&self) -> Result<CollateralHolding, FormatError> {
        Ok(CollateralHolding::new(&self.asset, parse_raw(&self.amount)?))
    }

    /// Amount in whole units for history views, with the decimals override
    /// table applied.
    pub fn display_amount(&self, overrides: &DecimalsOverrides) -> Result<Decimal, FormatError> {
        token_to_decimal(&self.amount, self.decimals, Some(&self.symbol), overrides)
    }
}

#[cw_serde]
pub struct IndexerProtocolStats {
    /// Adds up amounts with different decimal bases. Do not use.
    pub total_value_locked: String,
    pub total_borrowed: String,
    pub user_count: u64,
    pub liquidation_count: u64,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Borrow,
    Repay,
    Liquidation,
}

#[cw_serde]
pub struct IndexerTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub user: String,
    pub asset: String,
    pub amount: String,
    pub timestamp: u64,
    pub tx_hash: String,
}

impl IndexerTransaction {
    /// Debt-changing transactions map to a position event; collateral
    /// movements do not touch the position lifecycle.
    pub fn to_position_event(&self) -> Result<Option<PositionEvent>, FormatError> {
        let event = match self.kind {
            TransactionKind::Borrow => Some(PositionEvent::Borrow {
                amount: parse_raw(&self.amount)?,
            }),
            TransactionKind::Repay => Some(PositionEvent::Repay {
                amount: parse_raw(&self.amount)?,
            }),
            TransactionKind::Liquidation => Some(PositionEvent::Liquidate),
            TransactionKind::Deposit | TransactionKind::Withdraw => None,
        };
        Ok(event)
    }
}

/// Rebuild the lifecycle of `user`'s position from transaction history.
///
/// Returns `None` when the user never borrowed.
pub fn position_from_history(
    user: &str,
    transactions: &[IndexerTransaction],
) -> Result<Option<Position>, PositionError> {
    let mut history: Vec<&IndexerTransaction> =
        transactions.iter().filter(|tx| tx.user.eq_ignore_ascii_case(user)).collect();
    history.sort_by_key(|tx| tx.timestamp);

    let events = history
        .into_iter()
        .filter_map(|tx| tx.to_position_event().transpose())
        .collect::<Result<Vec<_>, _>>()?;

    if events.is_empty() {
        return Ok(None);
    }
    Position::replay(user, &events).map(Some)
}

fn parse_raw(raw: &str) -> Result<Uint128, FormatError> {
    Uint128::from_str(raw.trim()).map_err(|_| FormatError::InvalidAmount(raw.to_string()))
}
