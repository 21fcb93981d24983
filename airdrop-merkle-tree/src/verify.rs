//! Claim verification.
//!
//! Pure functions, no tree required. This is the same reconstruction the
//! claim contract runs against its stored root: fold every sibling into the
//! leaf with [`combine`] and compare the result to the root.

use tracing::debug;

use crate::{
    Result,
    entry::{Address, Amount},
    hash::{Hash, combine, hash_to_hex, leaf_hash},
    proof::AirdropProof,
};

/// Recompute the root reached from `leaf` through `siblings`.
pub fn compute_root(leaf: &Hash, siblings: &[Hash]) -> Hash {
    siblings
        .iter()
        .fold(*leaf, |current, sibling| combine(&current, sibling))
}

/// Check that `leaf` and `siblings` lead to `root`.
pub fn verify(leaf: &Hash, siblings: &[Hash], root: &Hash) -> bool {
    &compute_root(leaf, siblings) == root
}

/// Check a claim the way the claim contract does: rebuild the leaf from the
/// claimant's address and the amount they ask for, then verify it.
///
/// Errors only if the amount cannot be encoded into a leaf.
pub fn verify_claim(
    address: &Address,
    amount: &Amount,
    siblings: &[Hash],
    root: &Hash,
) -> Result<bool> {
    let leaf = leaf_hash(address, amount)?;
    let computed = compute_root(&leaf, siblings);
    let valid = &computed == root;
    if !valid {
        debug!(
            %address,
            %amount,
            expected = %hash_to_hex(root),
            computed = %hash_to_hex(&computed),
            "claim rejected"
        );
    }
    Ok(valid)
}

impl AirdropProof {
    /// Recompute the root from a leaf through this proof.
    pub fn compute_root(&self, leaf: &Hash) -> Hash {
        compute_root(leaf, &self.siblings)
    }

    /// Check that `leaf` reaches `root` through this proof.
    pub fn verify(&self, leaf: &Hash, root: &Hash) -> bool {
        verify(leaf, &self.siblings, root)
    }

    /// Check an `(address, amount)` claim against `root`.
    pub fn verify_claim(&self, address: &Address, amount: &Amount, root: &Hash) -> Result<bool> {
        verify_claim(address, amount, &self.siblings, root)
    }
}
