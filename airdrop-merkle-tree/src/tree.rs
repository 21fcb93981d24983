use tracing::debug;

use crate::{
    AirdropMerkleError, Result,
    entry::Entry,
    hash::{Hash, combine, hash_entry},
    proof::AirdropProof,
};

/// An immutable binary Merkle tree over allowlist leaves.
///
/// All layers are kept after construction: `layers[0]` holds the leaves in
/// input order and the last layer holds only the root. Keeping every layer
/// makes proof extraction O(log n) with no rehashing.
///
/// An odd-length layer pairs its last node with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropMerkleTree {
    layers: Vec<Vec<Hash>>,
    hash_calls: u64,
}

impl AirdropMerkleTree {
    /// Build a tree from allowlist entries.
    ///
    /// The entry at position `i` becomes leaf `i`, which is the claim index
    /// used for [`proof`](Self::proof). The first entry whose amount cannot
    /// be encoded aborts the build.
    pub fn build(entries: &[Entry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(AirdropMerkleError::EmptyInput);
        }
        let leaves = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                hash_entry(entry).map_err(|e| match e {
                    AirdropMerkleError::Encoding { reason, .. } => AirdropMerkleError::Encoding {
                        index: Some(index),
                        reason,
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<Hash>>>()?;
        Self::from_leaves(leaves)
    }

    /// Build a tree from precomputed leaf hashes, keeping their order.
    pub fn from_leaves(leaves: Vec<Hash>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(AirdropMerkleError::EmptyInput);
        }

        let mut layers = vec![leaves];
        let mut hash_calls = 0u64;

        while let Some(current) = layers.last().filter(|layer| layer.len() > 1) {
            let next: Vec<Hash> = current
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    combine(left, right)
                })
                .collect();
            hash_calls += next.len() as u64;
            layers.push(next);
        }

        debug!(
            leaves = layers[0].len(),
            layers = layers.len(),
            hash_calls,
            "built airdrop merkle tree"
        );

        Ok(Self { layers, hash_calls })
    }

    /// The root hash. For a single-leaf tree this is the leaf itself.
    pub fn root(&self) -> Hash {
        // Construction guarantees at least one layer ending in one node.
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of leaves (claims) in the tree.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of layers including the leaf layer and the root layer.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// All layers, leaves first.
    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// The leaf at a claim index, if it exists.
    pub fn leaf(&self, index: usize) -> Option<Hash> {
        self.layers[0].get(index).copied()
    }

    /// Number of node hashes computed while building.
    pub fn hash_calls(&self) -> u64 {
        self.hash_calls
    }

    /// Extract the inclusion proof for the leaf at `index`.
    ///
    /// Siblings are listed leaf to root. Where a node is the unpaired last
    /// node of an odd layer, the node itself stands in as its sibling.
    pub fn proof(&self, index: usize) -> Result<AirdropProof> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(AirdropMerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(self.layers.len() - 1);
        let mut position = index;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = layer.get(position ^ 1).unwrap_or(&layer[position]);
            siblings.push(*sibling);
            position /= 2;
        }

        debug!(index, siblings = siblings.len(), "extracted proof");

        Ok(AirdropProof::new(index as u64, siblings))
    }
}
