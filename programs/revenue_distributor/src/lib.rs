use anchor_lang::prelude::*;

declare_id!("3Vr72VgyPBJq55FgKHDL16xcXwreJoYSQhZMp9NNzesK");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::ClaimReceipt;

/**
 * Revenue Distributor Program
 *
 * Distributes periodic revenue to token holders against merkle roots committed
 * per (accounting period, series) key, without an on-chain record of each
 * recipient's entitlement.
 *
 * Key Features:
 * - One shared fund pool per vault, backing every distribution key
 * - Independent commitment lifecycle per (period, series_id) key
 * - Sorted-pair merkle proofs, shared with the off-chain tree builder
 * - One-time settlement per (key, recipient), kept across root replacements
 * - Owner / authority split for controller rotation
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Revenue Vault PDA: authority, settlement mint, pool accounting
 * - Token Vault PDA: holds the pooled settlement tokens
 * - Distribution PDAs: committed root per key
 * - Claim Record PDAs: settled-claims set per key
 *
 * Workflow:
 * 1. Owner creates the revenue vault
 * 2. Authority funds the pool and publishes a root per key
 * 3. Recipients claim with proofs from the distribution artifact
 */
#[program]
pub mod revenue_distributor {
    use super::*;

    /**
     * Creates a revenue vault for one settlement mint
     *
     * @param ctx - Account context containing vault state, token vault, mint and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        handle_initialize_vault(ctx)
    }

    /**
     * Tops up the shared fund pool
     *
     * @param ctx - Account context containing vault state, token vault and authority accounts
     * @param amount - Amount of settlement tokens to add
     *
     * Access Control: Authority only
     */
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        handle_fund(ctx, amount)
    }

    /**
     * Publishes or replaces the merkle root of a distribution key
     *
     * @param ctx - Account context containing vault state, distribution and authority accounts
     * @param period - Accounting period of the key
     * @param series_id - Asset series of the key
     * @param merkle_root - 32-byte root of the distribution tree
     *
     * Access Control: Authority only
     * Note: Settled claims of the key survive a root replacement
     */
    pub fn publish_root(
        ctx: Context<PublishRoot>,
        period: u64,
        series_id: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_publish_root(ctx, period, series_id, merkle_root)
    }

    /**
     * Claims revenue with merkle proof verification
     *
     * @param ctx - Account context containing vault, distribution, claim record and token accounts
     * @param period - Accounting period of the key
     * @param series_id - Asset series of the key
     * @param amount - Amount the claimant is entitled to
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any user with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        period: u64,
        series_id: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<ClaimReceipt> {
        handle_claim(ctx, period, series_id, amount, proof)
    }

    /**
     * Rotates the authority
     *
     * @param ctx - Account context containing vault state and owner accounts
     * @param new_authority - Key of the new authority
     *
     * Access Control: Owner only
     */
    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        handle_set_authority(ctx, new_authority)
    }
}
