use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anchor_lang::prelude::Pubkey;
use revenue_distributor::utils::merkle::{hash_leaf, verify};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TreeError},
    row::{normalize_recipient, parse_amount},
    tree::DistributionTree,
};

/// Published form of one distribution: the root plus every recipient's
/// amount and proof, keyed by base58 recipient.
///
/// Hashes are `0x`-prefixed hex and amounts decimal strings, so the file
/// round-trips through JavaScript tooling without precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionArtifact {
    pub root: String,
    pub total_amount: String,
    pub proofs: BTreeMap<String, ArtifactEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub amount: String,
    pub proof: Vec<String>,
}

/// Arguments of the `claim` instruction for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimArgs {
    pub recipient: Pubkey,
    pub amount: u64,
    pub proof: Vec<[u8; 32]>,
}

pub fn encode_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

pub fn decode_hash(raw: &str) -> Result<[u8; 32]> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(digits).map_err(|_| TreeError::InvalidHash(raw.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| TreeError::InvalidHash(raw.to_string()))
}

impl DistributionArtifact {
    pub fn from_tree(tree: &DistributionTree) -> Result<Self> {
        let mut proofs = BTreeMap::new();
        for row in tree.rows() {
            let proof = tree.proof(&row.recipient)?;
            proofs.insert(
                row.recipient.to_string(),
                ArtifactEntry {
                    amount: row.amount.to_string(),
                    proof: proof.iter().map(encode_hash).collect(),
                },
            );
        }

        Ok(DistributionArtifact {
            root: encode_hash(&tree.root()),
            total_amount: tree.total_amount().to_string(),
            proofs,
        })
    }

    pub fn root_bytes(&self) -> Result<[u8; 32]> {
        decode_hash(&self.root)
    }

    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    /// Decode the claim of `recipient`.
    pub fn claim_for(&self, recipient: &Pubkey) -> Result<ClaimArgs> {
        let entry = self
            .proofs
            .get(&recipient.to_string())
            .ok_or(TreeError::RecipientNotFound(*recipient))?;

        Ok(ClaimArgs {
            recipient: *recipient,
            amount: parse_amount(&entry.amount)?,
            proof: entry
                .proof
                .iter()
                .map(|hash| decode_hash(hash))
                .collect::<Result<_>>()?,
        })
    }

    /// Check every entry against the root with the program's verifier.
    pub fn verify(&self) -> Result<()> {
        let root = self.root_bytes()?;
        for key in self.proofs.keys() {
            let recipient = normalize_recipient(key)?;
            let claim = self.claim_for(&recipient)?;
            if !verify(&claim.proof, root, hash_leaf(&recipient, claim.amount)) {
                return Err(TreeError::ProofMismatch(recipient));
            }
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), recipients = self.len(), root = %self.root, "saved distribution artifact");
        Ok(())
    }

    /// Load an artifact, re-rendering recipient keys in canonical form.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut artifact: DistributionArtifact =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;

        let mut proofs = BTreeMap::new();
        for (key, entry) in artifact.proofs {
            let recipient = normalize_recipient(&key)?;
            if proofs.insert(recipient.to_string(), entry).is_some() {
                return Err(TreeError::DuplicateRecipient(recipient));
            }
        }
        artifact.proofs = proofs;

        tracing::debug!(path = %path.display(), recipients = artifact.len(), "loaded distribution artifact");
        Ok(artifact)
    }
}
