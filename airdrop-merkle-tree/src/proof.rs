//! Claim proofs.
//!
//! An `AirdropProof` lists one sibling hash per tree layer below the root,
//! leaf to root. Because nodes are combined in sorted order, no left/right
//! flags are carried.

use bincode::{Decode, Encode};

use crate::{AirdropMerkleError, Result, hash::Hash};

/// Upper bound on proof length accepted from untrusted bytes. A tree indexed
/// by `u64` never has more layers below its root.
pub const MAX_PROOF_SIBLINGS: usize = 64;

/// An inclusion proof for one claim index.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirdropProof {
    /// Claim index this proof was extracted for. Informational only:
    /// verification does not depend on it.
    pub leaf_index: u64,
    /// Sibling hashes, leaf to root.
    #[cfg_attr(feature = "serde", serde(with = "hex_hashes"))]
    pub siblings: Vec<Hash>,
}

impl AirdropProof {
    /// Create a proof from its parts.
    pub fn new(leaf_index: u64, siblings: Vec<Hash>) -> Self {
        Self {
            leaf_index,
            siblings,
        }
    }

    /// The sibling hashes, leaf to root.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Number of siblings (tree layers minus one).
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof is empty, as for a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| AirdropMerkleError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects proofs with more than [`MAX_PROOF_SIBLINGS`] siblings.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| AirdropMerkleError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(AirdropMerkleError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        if proof.siblings.len() > MAX_PROOF_SIBLINGS {
            return Err(AirdropMerkleError::InvalidProof(format!(
                "proof has {} siblings (max {})",
                proof.siblings.len(),
                MAX_PROOF_SIBLINGS
            )));
        }
        Ok(proof)
    }
}

#[cfg(feature = "serde")]
mod hex_hashes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::hash::{Hash, hash_from_hex, hash_to_hex};

    pub fn serialize<S: Serializer>(hashes: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(hashes.iter().map(hash_to_hex))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Hash>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| hash_from_hex(s).map_err(D::Error::custom))
            .collect()
    }
}
