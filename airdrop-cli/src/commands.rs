//! Subcommand bodies, separated from argument parsing and process exit.

use std::path::Path;

use airdrop_merkle_tree::{
    Address, AirdropMerkleTree, Amount, Hash, hash_from_hex, hash_to_hex, verify_claim,
};
use anyhow::{Context, Result};
use tracing::info;

use crate::{Claim, ClaimReport, build_report, claim_for, load_allowlist};

/// Load an allowlist and build the full claim report for it.
pub fn build_tree(input: &Path) -> Result<ClaimReport> {
    let entries = load_allowlist(input)?;
    let tree = AirdropMerkleTree::build(&entries).context("Failed to build merkle tree")?;
    info!(
        root = %hash_to_hex(&tree.root()),
        leaves = tree.leaf_count(),
        depth = tree.layer_count() - 1,
        "built merkle tree"
    );
    build_report(&tree, &entries)
}

/// Load an allowlist and extract the claim at `index`.
pub fn prove(input: &Path, index: usize) -> Result<Claim> {
    let entries = load_allowlist(input)?;
    let tree = AirdropMerkleTree::build(&entries).context("Failed to build merkle tree")?;
    let claim = claim_for(&tree, &entries, index)?;
    info!(root = %hash_to_hex(&tree.root()), index, "extracted claim");
    Ok(claim)
}

/// Parse textual claim arguments and check them against `root`.
///
/// Blank proof items are ignored, so an empty `--proof` is the proof of a
/// single-leaf tree.
pub fn verify_args(root: &str, address: &str, amount: &str, proof: &[String]) -> Result<bool> {
    let root = hash_from_hex(root).context("Bad root")?;
    let address: Address = address.parse().context("Bad address")?;
    let amount: Amount = amount.parse().context("Bad amount")?;
    let proof = proof
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| hash_from_hex(s).with_context(|| format!("Bad proof hash {:?}", s)))
        .collect::<Result<Vec<Hash>>>()?;

    Ok(verify_claim(&address, &amount, &proof, &root)?)
}

/// The line `verify` prints for a result.
pub fn verdict(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}
