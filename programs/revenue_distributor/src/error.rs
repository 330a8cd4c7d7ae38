use anchor_lang::prelude::*;

#[error_code]
pub enum RevenueDistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Only authority can perform this action")]
    OnlyAuthority,
    #[msg("Invalid authority account")]
    InvalidAuthority,

    // Commitment errors
    #[msg("No root has been published for this distribution key")]
    NoActiveRoot,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,

    // Settlement errors
    #[msg("Recipient has already claimed under this distribution key")]
    AlreadyClaimed,
    #[msg("Fund pool balance is insufficient for this claim")]
    InsufficientPool,
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Distribution account must be owned by this program")]
    DistributionNotOwnedByProgram,
    #[msg("Token mint does not match the vault's settlement mint")]
    TokenMintMismatch,
    #[msg("Settlement mint carries a transfer fee extension")]
    UnsupportedMintExtension,
}
