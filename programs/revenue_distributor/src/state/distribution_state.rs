use anchor_lang::prelude::*;
use crate::error::*;
use crate::utils::merkle::{hash_leaf, verify};

/**
 * Commitment record of one distribution key
 *
 * Derivation: ["distribution", revenue_vault, period_le, series_id_le]
 *
 * Lifecycle:
 * 1. Created by the first publish_root for the key (Unset -> Committed)
 * 2. Root replaced by later publish_root calls (Committed -> Committed)
 * 3. Never closed
 *
 * Design Notes:
 * - An all-zero merkle_root means no root is committed
 * - Replacing the root leaves every ClaimRecord of the key untouched, so
 *   settled recipients stay settled while unclaimed proofs for the old root
 *   stop verifying
 */
#[account]
#[derive(Default, Debug)]
pub struct Distribution {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Revenue vault this key belongs to
    pub revenue_vault: Pubkey,

    /// Accounting period of the key
    pub period: u64,

    /// Asset series of the key
    pub series_id: u64,

    /// Currently committed root
    pub merkle_root: [u8; 32],

    /// Number of roots published for this key
    pub root_version: u32,

    /// Unix timestamp of the latest publication
    pub published_at: i64,

    /// Recipients settled under this key, across all root versions
    pub claims_settled: u64,

    /// Amount paid out under this key, across all root versions
    pub amount_settled: u64,
}

impl Distribution {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distribution>();

    pub fn is_committed(&self) -> bool {
        self.merkle_root != [0; 32]
    }

    /// Root claims are checked against, or NoActiveRoot for an unset key.
    pub fn committed_root(&self) -> Result<[u8; 32]> {
        require!(self.is_committed(), RevenueDistributorError::NoActiveRoot);
        Ok(self.merkle_root)
    }

    /// Commit `merkle_root`, returning the root it replaces (zero when unset).
    pub fn publish(&mut self, merkle_root: [u8; 32], now: i64) -> Result<[u8; 32]> {
        require!(
            merkle_root != [0; 32],
            RevenueDistributorError::InvalidMerkleRoot
        );

        let previous_root = self.merkle_root;
        self.merkle_root = merkle_root;
        self.root_version = self
            .root_version
            .checked_add(1)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;
        self.published_at = now;

        Ok(previous_root)
    }

    /// Check that `(claimant, amount)` is a leaf of the committed root.
    ///
    /// Zero amounts are never part of a built tree and are rejected without hashing.
    pub fn verify_entitlement(
        &self,
        claimant: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        let root = self.committed_root()?;
        require!(amount > 0, RevenueDistributorError::InvalidProof);
        require!(
            verify(proof, root, hash_leaf(claimant, amount)),
            RevenueDistributorError::InvalidProof
        );
        Ok(())
    }

    /// Count a settled claim against this key.
    pub fn record_settlement(&mut self, amount: u64) -> Result<()> {
        self.claims_settled = self
            .claims_settled
            .checked_add(1)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;
        self.amount_settled = self
            .amount_settled
            .checked_add(amount)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;
        Ok(())
    }
}
