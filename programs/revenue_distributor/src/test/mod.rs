pub mod test_merkle;
pub mod test_token;

use anchor_lang::prelude::Pubkey;

use crate::error::RevenueDistributorError;
use crate::utils::merkle::{hash_leaf, parent_level, sibling};

/// Minimal tree over the shared primitives, enough to drive claims in tests.
pub struct TestTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl TestTree {
    pub fn new(entries: &[(Pubkey, u64)]) -> Self {
        let mut leaves: Vec<[u8; 32]> = entries
            .iter()
            .map(|(claimant, amount)| hash_leaf(claimant, *amount))
            .collect();
        leaves.sort();

        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let next = parent_level(levels.last().unwrap());
            levels.push(next);
        }
        TestTree { levels }
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels.last().unwrap()[0]
    }

    pub fn proof(&self, claimant: &Pubkey, amount: u64) -> Vec<[u8; 32]> {
        let leaf = hash_leaf(claimant, amount);
        let mut index = self.levels[0]
            .iter()
            .position(|l| *l == leaf)
            .expect("entry not in tree");

        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            proof.push(sibling(level, index).unwrap());
            index /= 2;
        }
        proof
    }
}

pub fn error_code(err: &anchor_lang::error::Error) -> Option<u32> {
    match err {
        anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
        _ => None,
    }
}

pub fn assert_error<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: RevenueDistributorError,
) {
    let err = result.expect_err("expected an error");
    assert_eq!(error_code(&err), Some(u32::from(expected)), "got {:?}", err);
}
