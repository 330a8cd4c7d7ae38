use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{transfer_fee::TransferFeeConfig, BaseStateWithExtensions, StateWithExtensions},
    state::Mint,
};
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::RevenueDistributorError;

/// Reject settlement mints whose transfers can deliver less than the requested amount
/// (Token 2022 transfer fee). Legacy SPL Token mints carry no extensions and always pass.
pub fn ensure_supported_mint(mint_data: &[u8]) -> Result<()> {
    let mint = StateWithExtensions::<Mint>::unpack(mint_data)?;
    require!(
        mint.get_extension::<TransferFeeConfig>().is_err(),
        RevenueDistributorError::UnsupportedMintExtension
    );
    Ok(())
}

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}
