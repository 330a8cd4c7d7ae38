use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;
use std::str::FromStr;

use crate::constants::MAX_PROOF_LEN;
use crate::utils::merkle::*;
use crate::utils::verify;

use super::TestTree;

fn get_test_data() -> Vec<(Pubkey, u64)> {
    vec![
        (
            Pubkey::from_str("3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs").unwrap(),
            1000,
        ),
        (
            Pubkey::from_str("8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx").unwrap(),
            2000,
        ),
        (
            Pubkey::from_str("A4mDtfFCkdt9CqGzEkfiSHhJD8d3bUMasVzwajudGtb2").unwrap(),
            3000,
        ),
        (
            Pubkey::from_str("4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqS").unwrap(),
            4000,
        ),
    ]
}

#[test]
fn test_leaf_encoding() {
    let (claimant, amount) = get_test_data()[0];

    let expected = hashv(&[&[0u8], &claimant.to_bytes(), &amount.to_le_bytes()]).to_bytes();
    assert_eq!(hash_leaf(&claimant, amount), expected);

    // Amount and recipient are both bound
    assert_ne!(hash_leaf(&claimant, amount), hash_leaf(&claimant, amount + 1));
    assert_ne!(
        hash_leaf(&claimant, amount),
        hash_leaf(&get_test_data()[1].0, amount)
    );
}

#[test]
fn test_hash_pair_is_order_free() {
    let a = hash_leaf(&get_test_data()[0].0, 1);
    let b = hash_leaf(&get_test_data()[1].0, 2);

    assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));

    // Internal nodes are domain separated from a plain concatenation hash
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    assert_ne!(hash_pair(&a, &b), hashv(&[&lo, &hi]).to_bytes());
}

#[test]
fn test_odd_level_duplicates_last_node() {
    let data = get_test_data();
    let leaves: Vec<[u8; 32]> = data[..3].iter().map(|(c, a)| hash_leaf(c, *a)).collect();

    let parents = parent_level(&leaves);
    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0], hash_pair(&leaves[0], &leaves[1]));
    assert_eq!(parents[1], hash_pair(&leaves[2], &leaves[2]));

    assert_eq!(sibling(&leaves, 2), Some(leaves[2]));
    assert_eq!(sibling(&leaves, 1), Some(leaves[0]));
    assert_eq!(sibling(&leaves, 3), None);
}

#[test]
fn test_get_proof_and_verify() {
    let tree_nodes = get_test_data();
    let tree = TestTree::new(&tree_nodes);
    let root = tree.root();

    for (claimant, amount) in &tree_nodes {
        let proof = tree.proof(claimant, *amount);
        assert_eq!(proof.len(), 2);
        assert!(
            verify(&proof, root, hash_leaf(claimant, *amount)),
            "Proof verification failed for {}",
            claimant
        );
    }
}

#[test]
fn test_proof_length_matches_tree_height() {
    let data = get_test_data();
    for count in 1..=data.len() {
        let tree = TestTree::new(&data[..count]);
        let expected = (count as f64).log2().ceil() as usize;
        for (claimant, amount) in &data[..count] {
            let proof = tree.proof(claimant, *amount);
            assert_eq!(proof.len(), expected, "leaf count {}", count);
            assert!(verify(&proof, tree.root(), hash_leaf(claimant, *amount)));
        }
    }
}

#[test]
fn test_invalid_proof() {
    let tree_nodes = get_test_data();
    let tree = TestTree::new(&tree_nodes);
    let root = tree.root();
    let (claimant, amount) = tree_nodes[0];

    // Wrong leaf
    let wrong_leaf = hash_leaf(
        &Pubkey::from_str("11111111111111111111111111111112").unwrap(),
        9999,
    );
    let proof = tree.proof(&claimant, amount);
    assert!(!verify(&proof, root, wrong_leaf), "Invalid proof should not verify");

    // Right recipient, wrong amount
    assert!(!verify(&proof, root, hash_leaf(&claimant, amount + 1)));

    // Tampered proof
    let mut tampered_proof = proof.clone();
    tampered_proof[0][0] = tampered_proof[0][0].wrapping_add(1);
    assert!(
        !verify(&tampered_proof, root, hash_leaf(&claimant, amount)),
        "Tampered proof should not verify"
    );

    // Truncated proof
    assert!(!verify(&proof[..1], root, hash_leaf(&claimant, amount)));
}

#[test]
fn test_proof_edge_cases() {
    // Single node: the leaf is the root
    let single_node = vec![get_test_data()[0]];
    let single_tree = TestTree::new(&single_node);
    let (claimant, amount) = single_node[0];
    let single_proof = single_tree.proof(&claimant, amount);

    assert_eq!(single_proof.len(), 0, "Single node should have empty proof");
    assert_eq!(single_tree.root(), hash_leaf(&claimant, amount));
    assert!(verify(&single_proof, single_tree.root(), hash_leaf(&claimant, amount)));
}

#[test]
fn test_overlong_proof_rejected() {
    let (claimant, amount) = get_test_data()[0];
    let leaf = hash_leaf(&claimant, amount);

    let proof = vec![leaf; MAX_PROOF_LEN + 1];
    let root = compute_root(leaf, &proof);
    assert!(!verify(&proof, root, leaf));

    let proof = vec![leaf; MAX_PROOF_LEN];
    let root = compute_root(leaf, &proof);
    assert!(verify(&proof, root, leaf));
}
