use anchor_lang::prelude::*;

/// Event emitted when a revenue vault is created
#[event]
pub struct VaultInitialized {
    /// The revenue vault state account
    pub revenue_vault: Pubkey,
    /// Owner of the revenue vault
    pub owner: Pubkey,
    /// Authority allowed to fund and publish roots
    pub authority: Pubkey,
    /// Settlement token mint
    pub settlement_mint: Pubkey,
    /// Token vault holding the pooled funds
    pub token_vault: Pubkey,
}

/// Event emitted when the shared pool is topped up
#[event]
pub struct PoolFunded {
    /// The revenue vault state account
    pub revenue_vault: Pubkey,
    /// Authority who funded the pool
    pub authority: Pubkey,
    /// Amount added in this transaction
    pub amount: u64,
    /// Pool balance after funding
    pub pool_balance: u64,
}

/// Event emitted when a root is published or replaced for a distribution key
#[event]
pub struct RootPublished {
    /// The distribution account
    pub distribution: Pubkey,
    /// Authority who published the root
    pub authority: Pubkey,
    /// Accounting period of the key
    pub period: u64,
    /// Series of the key
    pub series_id: u64,
    /// Root that was active before this publication, zero when the key was unset
    pub previous_root: [u8; 32],
    /// Newly committed root
    pub merkle_root: [u8; 32],
    /// Number of publications for this key, including this one
    pub root_version: u32,
}

/// Event emitted when a recipient settles a claim
#[event]
pub struct RevenueClaimed {
    /// The distribution account
    pub distribution: Pubkey,
    /// Recipient who claimed
    pub claimant: Pubkey,
    /// Accounting period of the key
    pub period: u64,
    /// Series of the key
    pub series_id: u64,
    /// Amount transferred to the recipient
    pub amount: u64,
    /// Pool balance left after the claim
    pub pool_balance: u64,
}

/// Event emitted when the owner rotates the authority
#[event]
pub struct AuthorityUpdated {
    /// The revenue vault state account
    pub revenue_vault: Pubkey,
    /// Previous authority
    pub previous_authority: Pubkey,
    /// New authority
    pub new_authority: Pubkey,
}
