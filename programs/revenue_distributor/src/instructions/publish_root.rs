use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for publishing a merkle root
 *
 * Commits the root of an off-chain built distribution tree for one
 * (period, series_id) key. The first publication creates the key's
 * Distribution account; later ones replace the root.
 *
 * Access Control: Only the authority can publish roots
 *
 * Business Logic:
 * - Each leaf in the tree is a (claimant, amount) pair
 * - Replacing a root never touches ClaimRecords: recipients settled under the
 *   old root stay settled, unclaimed proofs for the old root stop verifying
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(period: u64, series_id: u64)]
pub struct PublishRoot<'info> {
    /// The revenue vault the key belongs to
    pub revenue_vault: Account<'info, RevenueVault>,

    /// Commitment record of the key
    /// - Derived from: ["distribution", revenue_vault, period, series_id]
    /// - Created on first publication
    #[account(
        init_if_needed,
        payer = authority,
        space = Distribution::LEN,
        seeds = [
            DISTRIBUTION_SEED.as_bytes(),
            revenue_vault.key().as_ref(),
            period.to_le_bytes().as_ref(),
            series_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distribution: Account<'info, Distribution>,

    /// The authority publishing the root
    /// - Pays for the distribution account on first publication
    #[account(
        mut,
        constraint = authority.key() == revenue_vault.authority @ RevenueDistributorError::OnlyAuthority
    )]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Publishes or replaces the merkle root of a distribution key
 *
 * @param ctx - The account context containing vault, distribution and authority accounts
 * @param period - Accounting period of the key
 * @param series_id - Asset series of the key
 * @param merkle_root - 32-byte root of the distribution tree
 *
 * Validation Rules:
 * - Merkle root cannot be all zeros (reserved for an unset key)
 */
pub fn handle_publish_root(
    ctx: Context<PublishRoot>,
    period: u64,
    series_id: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    let distribution = &mut ctx.accounts.distribution;

    // First publication for this key
    if distribution.root_version == 0 {
        distribution.bump = ctx.bumps.distribution;
        distribution.revenue_vault = ctx.accounts.revenue_vault.key();
        distribution.period = period;
        distribution.series_id = series_id;
    }

    let now = Clock::get()?.unix_timestamp;
    let previous_root = distribution.publish(merkle_root, now)?;

    msg!(
        "Root published: period={} series={} version={}",
        period,
        series_id,
        distribution.root_version
    );

    emit_cpi!(RootPublished {
        distribution: distribution.key(),
        authority: ctx.accounts.authority.key(),
        period,
        series_id,
        previous_root,
        merkle_root,
        root_version: distribution.root_version,
    });

    Ok(())
}
