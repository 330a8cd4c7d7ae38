use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, merkle hashing prefixes and verification limits shared by the
 * on-chain instructions and the off-chain tree builder.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for revenue vault state PDA derivation
/// - Used in: ["revenue_vault", settlement_mint, owner]
/// - One shared fund pool per (settlement mint, owner) pair
pub const REVENUE_VAULT_SEED: &str = "revenue_vault";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", revenue_vault_key]
/// - Token account holding the pooled settlement funds
pub const VAULT_SEED: &str = "vault";

/// Seed for distribution PDA derivation
/// - Used in: ["distribution", revenue_vault_key, period_le, series_id_le]
/// - One commitment record per (accounting period, series) key
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distribution_key, claimant_key]
/// - Never closed, so a settled recipient stays settled after root replacement
pub const CLAIM_SEED: &str = "claim";

/// ===== MERKLE CONSTANTS =====

/// Domain prefix hashed in front of every leaf encoding
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain prefix hashed in front of every internal node
pub const NODE_PREFIX: u8 = 0x01;

/// Longest proof accepted by claim verification (trees of up to 2^32 leaves)
pub const MAX_PROOF_LEN: usize = 32;
