//! JSON claim reports: the root to publish plus one proof per claimant.

use std::{io::Write, path::Path};

use airdrop_merkle_tree::{
    Address, AirdropMerkleTree, Amount, Entry, Hash, hash_entry, hash_from_hex, hash_to_hex,
    verify_claim,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Everything a distributor needs to publish: the root and every claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReport {
    /// Root hash to store in the claim contract, `0x`-prefixed hex.
    pub root: String,
    /// Number of claims in the tree.
    pub leaf_count: usize,
    /// Claims in index order.
    pub claims: Vec<Claim>,
}

/// One claimant's data: what they submit to the claim contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim index (position in the allowlist).
    pub index: usize,
    /// Claimant address.
    pub address: Address,
    /// Claimable amount.
    pub amount: Amount,
    /// Sibling hashes, leaf to root, `0x`-prefixed hex.
    pub proof: Vec<String>,
}

impl Claim {
    /// Decode the proof hashes.
    pub fn proof_hashes(&self) -> Result<Vec<Hash>> {
        self.proof
            .iter()
            .map(|s| hash_from_hex(s).with_context(|| format!("Bad proof hash {:?}", s)))
            .collect()
    }

    /// Check this claim against a root.
    pub fn verify(&self, root: &Hash) -> Result<bool> {
        let proof = self.proof_hashes()?;
        Ok(verify_claim(&self.address, &self.amount, &proof, root)?)
    }
}

/// Build the claim for one index of a tree built from `entries`.
pub fn claim_for(tree: &AirdropMerkleTree, entries: &[Entry], index: usize) -> Result<Claim> {
    let proof = tree
        .proof(index)
        .with_context(|| format!("Failed to extract proof for index {}", index))?;
    let entry = entries.get(index).with_context(|| {
        format!(
            "No entry for index {} ({} entries given for a tree of {} leaves)",
            index,
            entries.len(),
            tree.leaf_count()
        )
    })?;
    let leaf = hash_entry(entry).with_context(|| format!("Failed to hash entry {}", index))?;
    if tree.leaf(index) != Some(leaf) {
        bail!("Entry {} ({}) does not match leaf {} of the tree", index, entry.address, index);
    }
    Ok(Claim {
        index,
        address: entry.address,
        amount: entry.amount.clone(),
        proof: proof.siblings().iter().map(hash_to_hex).collect(),
    })
}

/// Build the full report for a tree built from `entries`.
pub fn build_report(tree: &AirdropMerkleTree, entries: &[Entry]) -> Result<ClaimReport> {
    if entries.len() != tree.leaf_count() {
        bail!(
            "{} entries given for a tree of {} leaves",
            entries.len(),
            tree.leaf_count()
        );
    }
    let claims = (0..tree.leaf_count())
        .map(|index| claim_for(tree, entries, index))
        .collect::<Result<Vec<_>>>()?;
    Ok(ClaimReport {
        root: hash_to_hex(&tree.root()),
        leaf_count: tree.leaf_count(),
        claims,
    })
}

/// Write `value` as pretty JSON to `path`, replacing it atomically.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut file, value).context("Failed to serialize JSON")?;
    file.write_all(b"\n").context("Failed to write JSON")?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
