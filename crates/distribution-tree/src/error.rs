use anchor_lang::prelude::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid input: payout list is empty")]
    EmptyInput,
    #[error("Invalid input: duplicate recipient {0}")]
    DuplicateRecipient(Pubkey),
    #[error("Invalid input: zero amount for recipient {0}")]
    ZeroAmount(Pubkey),
    #[error("Invalid input: malformed recipient `{0}`")]
    InvalidRecipient(String),
    #[error("Invalid input: malformed amount `{0}`")]
    InvalidAmount(String),
    #[error("Total distribution amount overflows u64")]
    AmountOverflow,
    #[error("Recipient {0} is not part of this distribution")]
    RecipientNotFound(Pubkey),
    #[error("Malformed hash `{0}`")]
    InvalidHash(String),
    #[error("Proof for recipient {0} does not reproduce the root")]
    ProofMismatch(Pubkey),
    #[error("io Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde Error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl TreeError {
    /// Caller errors in the payout list itself; never worth retrying as-is.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TreeError::EmptyInput
                | TreeError::DuplicateRecipient(_)
                | TreeError::ZeroAmount(_)
                | TreeError::InvalidRecipient(_)
                | TreeError::InvalidAmount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
