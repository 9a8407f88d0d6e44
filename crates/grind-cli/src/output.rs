//! where: calldata-grind output; what: write signed tx hex to disk; why: hand-off to whatever broadcasts it

use anyhow::Context;
use grind_tx::SignedRawTx;
use std::path::Path;

/// One `0x` hex line per transaction, no trailing newline.
pub fn write_signed_txs(path: &Path, txs: &[SignedRawTx]) -> anyhow::Result<()> {
    let body = txs
        .iter()
        .map(SignedRawTx::to_hex)
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

pub fn read_signed_txs(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let hex_part = line.strip_prefix("0x").unwrap_or(line);
            alloy_primitives::hex::decode(hex_part).with_context(|| "decoding tx hex".to_string())
        })
        .collect()
}
