use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::Pubkey;
use revenue_distributor::utils::merkle::{parent_level, sibling, verify};

use crate::{
    artifact::{encode_hash, DistributionArtifact},
    error::{Result, TreeError},
    row::PayoutRow,
};

/// Merkle tree over the payout rows of one distribution key.
///
/// Leaves are sorted by hash before pairing, so the root and every proof
/// depend only on the set of rows, never on their input order.
#[derive(Debug, Clone)]
pub struct DistributionTree {
    /// Rows in leaf order
    rows: Vec<PayoutRow>,
    /// `levels[0]` are the leaves, the last level holds only the root
    levels: Vec<Vec<[u8; 32]>>,
    /// Recipient to leaf index
    index: HashMap<Pubkey, usize>,
    total_amount: u64,
}

impl DistributionTree {
    /// Build the tree, rejecting empty lists, duplicate recipients and zero amounts.
    pub fn build(rows: &[PayoutRow]) -> Result<Self> {
        if rows.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let mut seen = HashSet::with_capacity(rows.len());
        let mut total_amount: u64 = 0;
        for row in rows {
            if row.amount == 0 {
                return Err(TreeError::ZeroAmount(row.recipient));
            }
            if !seen.insert(row.recipient) {
                return Err(TreeError::DuplicateRecipient(row.recipient));
            }
            total_amount = total_amount
                .checked_add(row.amount)
                .ok_or(TreeError::AmountOverflow)?;
        }

        let mut ordered: Vec<([u8; 32], PayoutRow)> =
            rows.iter().map(|row| (row.leaf(), *row)).collect();
        ordered.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut levels = vec![ordered.iter().map(|(leaf, _)| *leaf).collect::<Vec<_>>()];
        loop {
            let top = &levels[levels.len() - 1];
            if top.len() <= 1 {
                break;
            }
            let next = parent_level(top);
            levels.push(next);
        }

        let rows: Vec<PayoutRow> = ordered.into_iter().map(|(_, row)| row).collect();
        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.recipient, i))
            .collect();

        let tree = DistributionTree {
            rows,
            levels,
            index,
            total_amount,
        };
        tracing::info!(
            recipients = tree.len(),
            total_amount,
            root = %encode_hash(&tree.root()),
            "built distribution tree"
        );
        Ok(tree)
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all amounts; the pool needs at least this much for every claim to succeed.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    /// Rows in leaf order.
    pub fn rows(&self) -> &[PayoutRow] {
        &self.rows
    }

    pub fn entitlement(&self, recipient: &Pubkey) -> Option<u64> {
        self.index.get(recipient).map(|&i| self.rows[i].amount)
    }

    /// Sibling path from `recipient`'s leaf to the root.
    pub fn proof(&self, recipient: &Pubkey) -> Result<Vec<[u8; 32]>> {
        let mut index = *self
            .index
            .get(recipient)
            .ok_or(TreeError::RecipientNotFound(*recipient))?;

        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(node) = sibling(level, index) {
                proof.push(node);
            }
            index /= 2;
        }
        Ok(proof)
    }

    /// Re-check every proof with the program's verifier.
    pub fn verify_all(&self) -> Result<()> {
        let root = self.root();
        for row in &self.rows {
            let proof = self.proof(&row.recipient)?;
            if !verify(&proof, root, row.leaf()) {
                return Err(TreeError::ProofMismatch(row.recipient));
            }
        }
        Ok(())
    }

    pub fn to_artifact(&self) -> Result<DistributionArtifact> {
        DistributionArtifact::from_tree(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revenue_distributor::utils::merkle::{hash_leaf, hash_pair};

    fn rows(amounts: &[u64]) -> Vec<PayoutRow> {
        amounts
            .iter()
            .map(|&amount| PayoutRow::new(Pubkey::new_unique(), amount))
            .collect()
    }

    #[test]
    fn rejects_degenerate_input() {
        let err = DistributionTree::build(&[]).unwrap_err();
        assert!(matches!(err, TreeError::EmptyInput));
        assert!(err.is_invalid_input());

        let mut duplicate = rows(&[100, 200]);
        duplicate.push(PayoutRow::new(duplicate[0].recipient, 300));
        let err = DistributionTree::build(&duplicate).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateRecipient(r) if r == duplicate[0].recipient));

        let zero = rows(&[100, 0]);
        let err = DistributionTree::build(&zero).unwrap_err();
        assert!(matches!(err, TreeError::ZeroAmount(r) if r == zero[1].recipient));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_total_overflow() {
        let err = DistributionTree::build(&rows(&[u64::MAX, 1])).unwrap_err();
        assert!(matches!(err, TreeError::AmountOverflow));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn single_row_root_is_its_leaf() {
        let input = rows(&[42]);
        let tree = DistributionTree::build(&input).unwrap();

        assert_eq!(tree.root(), hash_leaf(&input[0].recipient, 42));
        assert!(tree.proof(&input[0].recipient).unwrap().is_empty());
        assert_eq!(tree.total_amount(), 42);
    }

    #[test]
    fn three_rows_pair_last_leaf_with_itself() {
        let input = rows(&[100, 200, 300]);
        let tree = DistributionTree::build(&input).unwrap();

        let mut leaves: Vec<[u8; 32]> = input.iter().map(PayoutRow::leaf).collect();
        leaves.sort();
        let expected = hash_pair(
            &hash_pair(&leaves[0], &leaves[1]),
            &hash_pair(&leaves[2], &leaves[2]),
        );
        assert_eq!(tree.root(), expected);
        assert_eq!(tree.total_amount(), 600);
    }

    #[test]
    fn proof_length_is_ceil_log2() {
        for count in 1..=17usize {
            let amounts: Vec<u64> = (1..=count as u64).collect();
            let tree = DistributionTree::build(&rows(&amounts)).unwrap();
            let expected = (count as f64).log2().ceil() as usize;

            for row in tree.rows() {
                assert_eq!(tree.proof(&row.recipient).unwrap().len(), expected);
            }
            tree.verify_all().unwrap();
        }
    }

    #[test]
    fn lookups() {
        let input = rows(&[10, 20]);
        let tree = DistributionTree::build(&input).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.entitlement(&input[1].recipient), Some(20));

        let stranger = Pubkey::new_unique();
        assert_eq!(tree.entitlement(&stranger), None);
        assert!(matches!(
            tree.proof(&stranger),
            Err(TreeError::RecipientNotFound(r)) if r == stranger
        ));
    }
}
