use std::{fs, path::Path, str::FromStr};

use anchor_lang::prelude::Pubkey;
use revenue_distributor::utils::merkle::hash_leaf;
use serde::Deserialize;

use crate::error::{Result, TreeError};

/// One recipient's entitlement in a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRow {
    pub recipient: Pubkey,
    /// Smallest unit of the settlement mint
    pub amount: u64,
}

impl PayoutRow {
    pub fn new(recipient: Pubkey, amount: u64) -> Self {
        Self { recipient, amount }
    }

    pub fn leaf(&self) -> [u8; 32] {
        hash_leaf(&self.recipient, self.amount)
    }
}

/// Parse a recipient the way the program sees a signer: a base58 `Pubkey`.
///
/// Rendering the result with `to_string()` gives the artifact key.
pub fn normalize_recipient(raw: &str) -> Result<Pubkey> {
    Pubkey::from_str(raw.trim()).map_err(|_| TreeError::InvalidRecipient(raw.to_string()))
}

pub(crate) fn parse_amount(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| TreeError::InvalidAmount(raw.to_string()))
}

#[derive(Deserialize)]
struct RawRow {
    #[serde(alias = "account")]
    recipient: String,
    amount: RawAmount,
}

/// Amounts may arrive as JSON numbers or decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(u64),
    Text(String),
}

impl TryFrom<RawRow> for PayoutRow {
    type Error = TreeError;

    fn try_from(raw: RawRow) -> Result<Self> {
        let recipient = normalize_recipient(&raw.recipient)?;
        let amount = match raw.amount {
            RawAmount::Number(amount) => amount,
            RawAmount::Text(text) => parse_amount(&text)?,
        };
        Ok(PayoutRow::new(recipient, amount))
    }
}

/// Parse a JSON array of `{"recipient" | "account", "amount"}` rows.
pub fn parse_payout_rows(json: &str) -> Result<Vec<PayoutRow>> {
    let raw: Vec<RawRow> = serde_json::from_str(json)?;
    raw.into_iter().map(PayoutRow::try_from).collect()
}

pub fn load_payout_rows(path: impl AsRef<Path>) -> Result<Vec<PayoutRow>> {
    let path = path.as_ref();
    let rows = parse_payout_rows(&fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded payout rows");
    Ok(rows)
}
