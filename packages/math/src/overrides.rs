use std::collections::HashMap;

use cosmwasm_schema::cw_serde;

/// Symbol keyed decimals that take precedence over any upstream-reported
/// precision. Keys are stored upper-cased.
#[cw_serde]
pub struct DecimalsOverrides {
    pub by_symbol: HashMap<String, u32>,
}

impl Default for DecimalsOverrides {
    /// The indexer reports USDC with 18 decimals; the token has 6.
    fn default() -> Self {
        Self::from_pairs([("USDC", 6)])
    }
}

impl DecimalsOverrides {
    pub fn empty() -> Self {
        Self {
            by_symbol: HashMap::new(),
        }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self {
            by_symbol: pairs
                .into_iter()
                .map(|(symbol, decimals)| (symbol.to_uppercase(), decimals))
                .collect(),
        }
    }

    pub fn decimals_for(&self, symbol: &str) -> Option<u32> {
        self.by_symbol.get(&symbol.to_uppercase()).copied()
    }

    /// Decimals to use for `symbol`, falling back to the reported value.
    pub fn resolve(&self, symbol: Option<&str>, reported: u32) -> u32 {
        symbol.and_then(|s| self.decimals_for(s)).unwrap_or(reported)
    }
}
