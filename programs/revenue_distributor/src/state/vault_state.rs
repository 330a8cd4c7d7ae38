use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Revenue vault state account
 *
 * Holds the controller identities and the shared fund pool backing every
 * distribution key of this vault.
 *
 * Derivation: ["revenue_vault", settlement_mint, owner]
 *
 * Lifecycle:
 * 1. Created during initialize_vault
 * 2. Credited by fund, debited by claim
 * 3. Authority rotated by set_authority
 *
 * Design Notes:
 * - The pool is shared across keys: a key's payouts are only as good as the total pool
 * - pool_balance tracks funded minus claimed; tokens sent to the vault outside
 *   of fund are not claimable
 */
#[account]
#[derive(Default, Debug)]
pub struct RevenueVault {
    /// Bump seed for PDA derivation
    /// - Saved to sign vault transfers without recomputation
    pub bump: u8,

    /// Creator of the vault
    /// - Part of the PDA seeds, never changes
    /// - Can rotate the authority
    pub owner: Pubkey,

    /// Controller of the vault
    /// - Can fund the pool and publish roots
    pub authority: Pubkey,

    /// Settlement token mint
    pub settlement_mint: Pubkey,

    /// Token account holding the pooled funds
    /// - Derived from: ["vault", revenue_vault_key]
    pub token_vault: Pubkey,

    /// Funds currently available to claims across all keys
    pub pool_balance: u64,

    /// Lifetime amount added through fund
    pub total_funded: u64,

    /// Lifetime amount paid out through claim
    pub total_claimed: u64,
}

impl RevenueVault {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RevenueVault>();

    /// Add funded tokens to the pool, returning the new balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, RevenueDistributorError::InvalidAmount);

        let pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;
        let total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;

        self.pool_balance = pool_balance;
        self.total_funded = total_funded;

        Ok(self.pool_balance)
    }

    /// Take a claim payout out of the pool, returning the remaining balance.
    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        require!(
            self.pool_balance >= amount,
            RevenueDistributorError::InsufficientPool
        );

        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(RevenueDistributorError::ArithmeticOverflow)?;

        self.pool_balance -= amount;
        self.total_claimed = total_claimed;

        Ok(self.pool_balance)
    }
}
