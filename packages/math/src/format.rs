use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint128};

use crate::{DecimalsOverrides, FormatError};

/// Precision of ETH, DAI and every 18-decimal USD-equivalent field
pub const WEI_DECIMALS: u32 = 18;

/// Precision of oracle prices
pub const USD_PRICE_DECIMALS: u32 = 8;

/// Convert an 18-decimal fixed-point string (wei) into a decimal amount.
pub fn wei_to_decimal(raw: &str) -> Result<Decimal, FormatError> {
    fixed_point_to_decimal(raw, WEI_DECIMALS)
}

/// Convert an oracle price (8-decimal fixed point) into a decimal USD value.
pub fn usd_to_decimal(raw: &str) -> Result<Decimal, FormatError> {
    fixed_point_to_decimal(raw, USD_PRICE_DECIMALS)
}

/// Convert a token amount in its smallest unit into a decimal amount.
///
/// When a symbol is given and present in `overrides`, the override's decimals
/// replace `decimals`. Upstream sources are known to report the wrong
/// precision for some assets, so callers should always pass the symbol when
/// they have it.
pub fn token_to_decimal(
    raw: &str,
    decimals: u32,
    symbol: Option<&str>,
    overrides: &DecimalsOverrides,
) -> Result<Decimal, FormatError> {
    fixed_point_to_decimal(raw, overrides.resolve(symbol, decimals))
}

/// Same as [`token_to_decimal`] for amounts already parsed at the boundary.
pub fn atomics_to_decimal(amount: Uint128, decimals: u32) -> Result<Decimal, FormatError> {
    Ok(Decimal::from_atomics(amount, decimals)?)
}

/// Max fractional digits a `Decimal` holds
const MAX_FRACTIONAL_DIGITS: usize = 18;

/// A user-entered amount, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountInput {
    /// Empty, zero, negative or non-numeric. The form is not ready yet.
    Pending,
    Amount(Decimal),
    /// A well-formed positive number larger than any `Decimal`
    OutOfRange,
}

impl AmountInput {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            AmountInput::Amount(amount) => Some(*amount),
            _ => None,
        }
    }
}

/// Classify a user-entered amount.
///
/// An empty field is the resting state of a form, not a mistake worth
/// reporting. A number too large to represent is a real amount and must be
/// rejected, not ignored.
pub fn parse_amount_input(input: &str) -> AmountInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return AmountInput::Pending;
    }
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount.is_zero() => AmountInput::Pending,
        Ok(amount) => AmountInput::Amount(amount),
        Err(_) if is_unbounded_positive_number(trimmed) => AmountInput::OutOfRange,
        Err(_) => AmountInput::Pending,
    }
}

/// Parse a user-entered amount. Anything but a representable positive amount
/// is `None`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    parse_amount_input(input).amount()
}

/// Digits with at most one dot, non-zero, within `Decimal`'s fractional
/// precision. Such a string only fails to parse when its integer part is too
/// large.
fn is_unbounded_positive_number(s: &str) -> bool {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && fraction.len() <= MAX_FRACTIONAL_DIGITS
        && whole.bytes().any(|b| b != b'0')
}

fn fixed_point_to_decimal(raw: &str, decimals: u32) -> Result<Decimal, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidAmount(raw.to_string()));
    }
    let atomics =
        Uint128::from_str(trimmed).map_err(|_| FormatError::InvalidAmount(raw.to_string()))?;
    atomics_to_decimal(atomics, decimals)
}
