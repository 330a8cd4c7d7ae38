//! Merkle primitives shared by claim verification and the off-chain tree builder.
//!
//! Leaf: `sha256(0x00 || recipient || amount.to_le_bytes())`.
//! Node: `sha256(0x01 || min(a, b) || max(a, b))`, so proofs carry no position bits.
//! A level with an odd node count pairs its last node with itself.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::{LEAF_PREFIX, MAX_PROOF_LEN, NODE_PREFIX};

/// Hash one `(recipient, amount)` entitlement into a leaf.
pub fn hash_leaf(recipient: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&[LEAF_PREFIX], recipient.as_ref(), &amount.to_le_bytes()]).to_bytes()
}

/// Combine two nodes in sorted order.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    hashv(&[&[NODE_PREFIX], lo, hi]).to_bytes()
}

/// Build the parent level of `level`.
pub fn parent_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| hash_pair(&pair[0], pair.get(1).unwrap_or(&pair[0])))
        .collect()
}

/// Sibling of the node at `index`, following the same odd-node rule as [`parent_level`].
pub fn sibling(level: &[[u8; 32]], index: usize) -> Option<[u8; 32]> {
    let node = level.get(index)?;
    Some(*level.get(index ^ 1).unwrap_or(node))
}

/// Fold a proof onto a leaf, returning the root it implies.
pub fn compute_root(leaf: [u8; 32], proof: &[[u8; 32]]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling))
}

/// Check that `proof` connects `leaf` to `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    proof.len() <= MAX_PROOF_LEN && compute_root(leaf, proof) == root
}
