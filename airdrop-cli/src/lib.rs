//! Allowlist tooling around [`airdrop_merkle_tree`].
//!
//! Loads `address,amount` CSV allowlists, builds the claim report (root plus
//! one proof per claim) and checks individual claims. The `airdrop-merkle`
//! binary is a thin argument-parsing layer over [`commands`].

#![warn(missing_docs)]

/// CSV allowlist loading.
pub mod allowlist;
/// `build-tree`, `prove` and `verify` subcommand bodies.
pub mod commands;
/// JSON claim reports and atomic report writing.
pub mod report;

pub use allowlist::{load_allowlist, parse_allowlist};
pub use commands::{build_tree, prove, verdict, verify_args};
pub use report::{Claim, ClaimReport, build_report, claim_for, write_json_atomic};
