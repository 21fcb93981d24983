//! CSV allowlist loading.
//!
//! One `address,amount` pair per line. Blank lines and lines starting with
//! `#` are skipped, as is a leading `address,amount` header. The order of the
//! remaining lines is the claim index order.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use airdrop_merkle_tree::{Address, Amount, Entry};
use anyhow::{Context, Result, bail};
use tracing::{info, warn};

/// Read an allowlist file.
pub fn load_allowlist(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open allowlist {}", path.display()))?;
    let entries = parse_allowlist(BufReader::new(file))
        .with_context(|| format!("Failed to parse allowlist {}", path.display()))?;
    info!(entries = entries.len(), path = %path.display(), "loaded allowlist");
    Ok(entries)
}

/// Parse allowlist lines from any reader.
pub fn parse_allowlist<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut first_seen: HashMap<Address, usize> = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_num))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if entries.is_empty() && is_header(trimmed) {
            continue;
        }

        let Some((address, amount)) = trimmed.split_once(',') else {
            bail!("Line {}: expected `address,amount`, got {:?}", line_num, trimmed);
        };
        let address: Address = address
            .parse()
            .with_context(|| format!("Line {}: bad address", line_num))?;
        let amount: Amount = amount
            .parse()
            .with_context(|| format!("Line {}: bad amount", line_num))?;

        let index = entries.len();
        if let Some(previous) = first_seen.insert(address, index) {
            warn!(
                %address,
                first_index = previous,
                index,
                "address appears more than once; each line is a separate claim"
            );
        }
        entries.push(Entry { address, amount });
    }

    if entries.is_empty() {
        bail!("Allowlist contains no entries");
    }
    Ok(entries)
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .is_some_and(|field| field.trim().eq_ignore_ascii_case("address"))
}
