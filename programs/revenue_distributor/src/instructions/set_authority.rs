use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for rotating the vault authority
 *
 * Access Control: Only the owner can rotate the authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAuthority<'info> {
    /// The revenue vault to update
    #[account(mut)]
    pub revenue_vault: Account<'info, RevenueVault>,

    /// The owner of the vault
    #[account(constraint = owner.key() == revenue_vault.owner @ RevenueDistributorError::OnlyOwner)]
    pub owner: Signer<'info>,
}

/**
 * Replaces the authority allowed to fund the pool and publish roots
 *
 * @param ctx - The account context containing vault and owner accounts
 * @param new_authority - Key of the new authority
 */
pub fn handle_set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        RevenueDistributorError::InvalidAuthority
    );

    let revenue_vault = &mut ctx.accounts.revenue_vault;
    let previous_authority = revenue_vault.authority;
    revenue_vault.authority = new_authority;

    emit_cpi!(AuthorityUpdated {
        revenue_vault: revenue_vault.key(),
        previous_authority,
        new_authority,
    });

    Ok(())
}
