use anchor_lang::prelude::*;

use crate::constants::*;

/// Revenue vault state: ["revenue_vault", settlement_mint, owner]
pub fn find_revenue_vault_address(settlement_mint: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            REVENUE_VAULT_SEED.as_bytes(),
            settlement_mint.as_ref(),
            owner.as_ref(),
        ],
        &crate::ID,
    )
}

/// Token vault holding the pooled funds: ["vault", revenue_vault]
pub fn find_token_vault_address(revenue_vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), revenue_vault.as_ref()], &crate::ID)
}

/// Commitment record of one distribution key: ["distribution", revenue_vault, period, series_id]
pub fn find_distribution_address(revenue_vault: &Pubkey, period: u64, series_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DISTRIBUTION_SEED.as_bytes(),
            revenue_vault.as_ref(),
            period.to_le_bytes().as_ref(),
            series_id.to_le_bytes().as_ref(),
        ],
        &crate::ID,
    )
}

/// Settlement record of one recipient under one key: ["claim", distribution, claimant]
pub fn find_claim_record_address(distribution: &Pubkey, claimant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), distribution.as_ref(), claimant.as_ref()],
        &crate::ID,
    )
}
