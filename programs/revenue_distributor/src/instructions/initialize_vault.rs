use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::ensure_supported_mint;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a revenue vault
 *
 * This instruction initializes the shared fund pool for one settlement mint:
 * - Creates the revenue vault state PDA
 * - Creates the token vault PDA that holds pooled funds
 * - Records the authority that may fund the pool and publish roots
 *
 * Access Control: Only the owner can create its vault
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// The revenue vault state account (PDA)
    /// - Derived from: ["revenue_vault", settlement_mint, owner]
    #[account(
        init,
        payer = owner,
        space = RevenueVault::LEN,
        seeds = [
            REVENUE_VAULT_SEED.as_bytes(),
            settlement_mint.key().as_ref(),
            owner.key().as_ref()
        ],
        bump
    )]
    pub revenue_vault: Account<'info, RevenueVault>,

    /// Token vault account (PDA) holding the pooled funds
    /// - Controlled by the revenue vault PDA as token authority
    /// - Derived from: ["vault", revenue_vault_key]
    #[account(
        init,
        token::mint = settlement_mint,
        token::authority = revenue_vault,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), revenue_vault.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The settlement token mint
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub settlement_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the vault
    /// - Pays for account creation
    /// - Can rotate the authority later
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The authority that will fund the pool and publish roots
    /// CHECK: This account is validated by storing its key in the vault state
    pub authority: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new revenue vault with an empty fund pool
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    // Validate authority is not empty account
    require!(
        ctx.accounts.authority.key() != Pubkey::default(),
        RevenueDistributorError::InvalidAuthority
    );

    // pool_balance must always equal the tokens held by the vault
    {
        let mint_info = ctx.accounts.settlement_mint.to_account_info();
        let mint_data = mint_info.try_borrow_data()?;
        ensure_supported_mint(&mint_data[..])?;
    }

    let revenue_vault = &mut ctx.accounts.revenue_vault;

    revenue_vault.bump = ctx.bumps.revenue_vault;
    revenue_vault.owner = ctx.accounts.owner.key();
    revenue_vault.authority = ctx.accounts.authority.key();
    revenue_vault.settlement_mint = ctx.accounts.settlement_mint.key();
    revenue_vault.token_vault = ctx.accounts.token_vault.key();
    // Note: pool_balance, total_funded, total_claimed use default values (0)

    emit_cpi!(VaultInitialized {
        revenue_vault: revenue_vault.key(),
        owner: revenue_vault.owner,
        authority: revenue_vault.authority,
        settlement_mint: revenue_vault.settlement_mint,
        token_vault: revenue_vault.token_vault,
    });

    Ok(())
}
