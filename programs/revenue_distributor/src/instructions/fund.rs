use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for funding the shared pool
 *
 * Pulls settlement tokens from the authority into the token vault. The pool is
 * shared by every distribution key, so funding raises claimable capacity for
 * all keys at once.
 *
 * Access Control: Only the authority can fund the pool
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Fund<'info> {
    /// The revenue vault whose pool is credited
    #[account(mut)]
    pub revenue_vault: Account<'info, RevenueVault>,

    /// Token vault receiving the funds
    /// - Derived from: ["vault", revenue_vault_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), revenue_vault.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Authority's token account the funds are pulled from
    #[account(
        mut,
        token::mint = revenue_vault.settlement_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The settlement mint for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = settlement_mint.key() == revenue_vault.settlement_mint @ RevenueDistributorError::TokenMintMismatch
    )]
    pub settlement_mint: InterfaceAccount<'info, Mint>,

    /// The authority funding the pool
    #[account(constraint = authority.key() == revenue_vault.authority @ RevenueDistributorError::OnlyAuthority)]
    pub authority: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Adds `amount` settlement tokens to the shared pool
 *
 * @param ctx - The account context containing vault and authority accounts
 * @param amount - Amount in the settlement mint's smallest unit
 */
pub fn handle_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    let revenue_vault = &mut ctx.accounts.revenue_vault;

    // Rejects zero and overflowing amounts before any tokens move
    let pool_balance = revenue_vault.credit(amount)?;

    transfer_token(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.authority_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.settlement_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.settlement_mint.decimals,
        None, // Authority signs its own transfer
    )?;

    emit_cpi!(PoolFunded {
        revenue_vault: ctx.accounts.revenue_vault.key(),
        authority: ctx.accounts.authority.key(),
        amount,
        pool_balance,
    });

    Ok(())
}
