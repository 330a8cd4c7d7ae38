use anchor_lang::prelude::*;

/**
 * Settlement record of one recipient under one distribution key
 *
 * Derivation: ["claim", distribution_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created zeroed by the first claim attempt that passes every check (init_if_needed)
 * 2. Marked settled in the same transaction as the pool debit and token transfer
 * 3. Never closed: the record is the replay guard for this key
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set once the recipient has withdrawn under this key
    pub settled: bool,

    /// Distribution key account this record belongs to
    pub distribution: Pubkey,

    /// Recipient who claimed
    pub claimant: Pubkey,

    /// Amount paid out
    pub amount: u64,

    /// Root the claim was proven against
    pub merkle_root: [u8; 32],

    /// Root version the claim was proven against
    pub root_version: u32,

    /// Unix timestamp of settlement
    pub claimed_at: i64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Structured result of a successful claim, returned by the claim instruction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Accounting period of the key
    pub period: u64,
    /// Series of the key
    pub series_id: u64,
    /// Recipient who claimed
    pub claimant: Pubkey,
    /// Amount transferred
    pub amount: u64,
    /// Pool balance left after the claim
    pub pool_balance: u64,
    /// Root version the claim was proven against
    pub root_version: u32,
}
