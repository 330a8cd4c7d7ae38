//! Claim settlement rules.
//!
//! Pure transitions over the account structs. The claim instruction runs them
//! inside one transaction that write-locks the vault, the distribution key and
//! the claim record, then performs the token transfer.

use anchor_lang::prelude::*;

use crate::error::*;
use crate::state::*;

/// Validate and settle a claim of `amount` by `claimant`.
///
/// Check order: committed root, replay guard, proof, pool balance. Every check
/// runs before the first account is written.
pub fn settle_claim(
    vault: &mut RevenueVault,
    distribution: &mut Distribution,
    record: &mut ClaimRecord,
    claimant: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    now: i64,
) -> Result<ClaimReceipt> {
    let root = distribution.committed_root()?;
    require!(!record.is_settled(), RevenueDistributorError::AlreadyClaimed);
    distribution.verify_entitlement(claimant, amount, proof)?;

    // Stage both updates so an overflow leaves the pool and the counters as they were
    let mut next_vault = vault.clone();
    let pool_balance = next_vault.debit(amount)?;
    let mut next_distribution = distribution.clone();
    next_distribution.record_settlement(amount)?;

    *vault = next_vault;
    *distribution = next_distribution;
    record.settled = true;
    record.claimant = *claimant;
    record.amount = amount;
    record.merkle_root = root;
    record.root_version = distribution.root_version;
    record.claimed_at = now;

    Ok(ClaimReceipt {
        period: distribution.period,
        series_id: distribution.series_id,
        claimant: *claimant,
        amount,
        pool_balance,
        root_version: distribution.root_version,
    })
}
