//! Keccak-256 binary Merkle tree for airdrop allowlists.
//!
//! Each allowlist entry `(address, amount)` becomes a leaf
//! `keccak256(address || uint256(amount))`, kept in input order so that the
//! position of an entry is its claim index. Layers are built by combining
//! adjacent pairs; the last node of an odd layer is paired with itself.
//! Pairs are hashed smaller-first:
//!
//! `parent = keccak256(min(a, b) || max(a, b))`
//!
//! so a proof is just the list of sibling hashes from leaf to root. A
//! verifier folds the siblings into the leaf and compares the result with
//! the published root; no positional information is needed.
//!
//! ```
//! use airdrop_merkle_tree::{AirdropMerkleTree, Address, Entry, hash_entry, verify};
//!
//! let entries: Vec<Entry> = (1u8..=3)
//!     .map(|i| Entry::new(Address::new([i; 20]), u64::from(i) * 100))
//!     .collect();
//! let tree = AirdropMerkleTree::build(&entries).unwrap();
//! let proof = tree.proof(2).unwrap();
//! let leaf = hash_entry(&entries[2]).unwrap();
//! assert!(verify(&leaf, proof.siblings(), &tree.root()));
//! ```

#![warn(missing_docs)]

mod entry;
mod error;
pub(crate) mod hash;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;


pub use entry::{ADDRESS_LEN, AMOUNT_WORD_LEN, Address, Amount, Entry};
pub use error::{AirdropMerkleError, Result};
pub use hash::{Hash, combine, hash_entry, hash_from_hex, hash_to_hex, keccak256, leaf_hash};
pub use proof::{AirdropProof, MAX_PROOF_SIBLINGS};
pub use tree::AirdropMerkleTree;
pub use verify::{compute_root, verify, verify_claim};
