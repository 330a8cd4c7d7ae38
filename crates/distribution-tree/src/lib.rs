//! Off-chain builder for `revenue_distributor` distributions.
//!
//! Takes the payout list of one `(period, series)` key, builds the merkle tree
//! with the same primitives the program verifies against, and produces the
//! JSON artifact recipients use to claim.

pub mod artifact;
pub mod error;
pub mod row;
pub mod tree;

pub use artifact::{decode_hash, encode_hash, ArtifactEntry, ClaimArgs, DistributionArtifact};
pub use error::{Result, TreeError};
pub use row::{load_payout_rows, normalize_recipient, parse_payout_rows, PayoutRow};
pub use tree::DistributionTree;
