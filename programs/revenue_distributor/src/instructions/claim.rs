use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::ledger::settle_claim;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming revenue
 *
 * A recipient proves that (claimant, amount) is a leaf of the root committed
 * for (period, series_id) and withdraws the amount from the shared pool.
 *
 * Access Control: Any signer, for its own entitlement
 *
 * Serialization: the vault, distribution and claim record are all writable,
 * so the runtime orders every claim against the same vault. The replay check,
 * pool debit and settled flag are therefore one indivisible step.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(period: u64, series_id: u64)]
pub struct Claim<'info> {
    /// The revenue vault whose pool pays the claim
    #[account(mut)]
    pub revenue_vault: Account<'info, RevenueVault>,

    /// Commitment record of the key
    /// - Derived from: ["distribution", revenue_vault, period, series_id]
    /// CHECK: May not exist yet; loaded in the handler so an unpublished key
    /// reports NoActiveRoot
    #[account(
        mut,
        seeds = [
            DISTRIBUTION_SEED.as_bytes(),
            revenue_vault.key().as_ref(),
            period.to_le_bytes().as_ref(),
            series_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distribution: UncheckedAccount<'info>,

    /// Settlement record of this claimant under this key
    /// - Derived from: ["claim", distribution_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distribution.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the pooled funds
    /// - Derived from: ["vault", revenue_vault_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), revenue_vault.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the funds
    #[account(
        mut,
        token::mint = revenue_vault.settlement_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The settlement mint for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = settlement_mint.key() == revenue_vault.settlement_mint @ RevenueDistributorError::TokenMintMismatch
    )]
    pub settlement_mint: InterfaceAccount<'info, Mint>,

    /// The recipient claiming revenue
    /// - Its key is the recipient encoded in the leaf
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Settles a claim against the committed root
 *
 * @param ctx - The account context containing all required accounts
 * @param period - Accounting period of the key
 * @param series_id - Asset series of the key
 * @param amount - Amount the claimant is entitled to (from the tree)
 * @param proof - Sibling hashes from the claimant's leaf to the root
 *
 * Validation Process:
 * 1. A root is committed for the key (NoActiveRoot)
 * 2. The claimant has not settled under the key (AlreadyClaimed)
 * 3. The proof rebuilds the committed root (InvalidProof)
 * 4. The pool covers the amount (InsufficientPool)
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    period: u64,
    series_id: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<ClaimReceipt> {
    let distribution_info = ctx.accounts.distribution.to_account_info();

    // ===== LOAD COMMITMENT =====

    require!(
        !distribution_info.data_is_empty(),
        RevenueDistributorError::NoActiveRoot
    );
    require!(
        distribution_info.owner == &crate::ID,
        RevenueDistributorError::DistributionNotOwnedByProgram
    );
    let mut distribution = {
        let data = distribution_info.try_borrow_data()?;
        Distribution::try_deserialize(&mut data.as_ref())?
    };

    // ===== VALIDATION + EFFECTS =====

    let claimant = ctx.accounts.claimant.key();
    let now = Clock::get()?.unix_timestamp;

    let claim_record = &mut ctx.accounts.claim_record;
    claim_record.bump = ctx.bumps.claim_record;
    claim_record.distribution = distribution_info.key();

    let receipt = settle_claim(
        &mut ctx.accounts.revenue_vault,
        &mut distribution,
        claim_record,
        &claimant,
        amount,
        &proof,
        now,
    )?;

    {
        let mut data = distribution_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        distribution.try_serialize(&mut writer)?;
    }

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let revenue_vault = &ctx.accounts.revenue_vault;
    let seeds = &[
        REVENUE_VAULT_SEED.as_bytes(),
        revenue_vault.settlement_mint.as_ref(),
        revenue_vault.owner.as_ref(),
        &[revenue_vault.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.revenue_vault.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.settlement_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.settlement_mint.decimals,
        Some(signer),
    )?;

    msg!(
        "Claimed: period={} series={} amount={} pool={}",
        period,
        series_id,
        amount,
        receipt.pool_balance
    );

    emit_cpi!(RevenueClaimed {
        distribution: distribution_info.key(),
        claimant,
        period,
        series_id,
        amount,
        pool_balance: receipt.pool_balance,
    });

    Ok(receipt)
}
