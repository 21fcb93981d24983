//! Keccak-256 leaf and node hashing.
//!
//! - Leaves:         `keccak256(address || amount as uint256)`
//! - Internal nodes: `keccak256(min(a, b) || max(a, b))`
//!
//! Both match `keccak256(abi.encodePacked(..))` on the verifying contract.

use sha3::{Digest, Keccak256};

use crate::{
    AirdropMerkleError, Result,
    entry::{ADDRESS_LEN, AMOUNT_WORD_LEN, Address, Amount, Entry},
};

/// A 32-byte Keccak-256 digest.
///
/// The derived array ordering is lexicographic, which equals big-endian
/// unsigned integer ordering.
pub type Hash = [u8; 32];

/// Hash arbitrary bytes with Keccak-256.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Compute the leaf hash of an entry.
///
/// Fails with [`AirdropMerkleError::Encoding`] if the amount does not fit in
/// 256 bits.
pub fn hash_entry(entry: &Entry) -> Result<Hash> {
    leaf_hash(&entry.address, &entry.amount)
}

/// Compute the leaf hash of an `(address, amount)` pair.
pub fn leaf_hash(address: &Address, amount: &Amount) -> Result<Hash> {
    let word = amount.to_word()?;
    let mut packed = [0u8; ADDRESS_LEN + AMOUNT_WORD_LEN];
    packed[..ADDRESS_LEN].copy_from_slice(address.as_bytes());
    packed[ADDRESS_LEN..].copy_from_slice(&word);
    Ok(keccak256(&packed))
}

/// Combine two child hashes into their parent.
///
/// The numerically smaller hash is always hashed first, so
/// `combine(a, b) == combine(b, a)` and proofs carry no direction bits.
pub fn combine(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    Keccak256::new()
        .chain_update(first)
        .chain_update(second)
        .finalize()
        .into()
}

/// Render a hash as `0x`-prefixed lowercase hex.
pub fn hash_to_hex(hash: &Hash) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Parse a hash from 64 hex characters, with or without a `0x` prefix.
pub fn hash_from_hex(s: &str) -> Result<Hash> {
    let trimmed = s.trim();
    let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let mut hash = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut hash)
        .map_err(|e| AirdropMerkleError::InvalidData(format!("invalid hash {:?}: {}", s, e)))?;
    Ok(hash)
}
