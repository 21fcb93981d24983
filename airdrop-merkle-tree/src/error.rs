use thiserror::Error;

/// Alias for `core::result::Result<T, AirdropMerkleError>`.
pub type Result<T> = core::result::Result<T, AirdropMerkleError>;

/// Errors from airdrop Merkle tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirdropMerkleError {
    /// A tree was requested over zero entries.
    #[error("cannot build a merkle tree from an empty entry list")]
    EmptyInput,
    /// An amount does not fit in the 32-byte word of the leaf encoding.
    #[error("encoding error{}: {reason}", at_entry(.index))]
    Encoding {
        /// Position of the offending entry, when known.
        index: Option<usize>,
        /// What went wrong.
        reason: String,
    },
    /// A proof was requested for a leaf that does not exist.
    #[error("leaf index {index} is out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested claim index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Malformed textual input (address, amount or hash).
    #[error("invalid data: {0}")]
    InvalidData(String),
    /// Malformed serialized proof.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}

fn at_entry(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at entry {i}"),
        None => String::new(),
    }
}
