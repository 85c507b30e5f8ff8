//! Enemy rank alphabet
//!
//! Ranks 1-10 are written as plain numbers; 11, 12 and 13 are the S, S+
//! and S++ tiers. Range tokens in the dumps look like `"8 - S"`.

use std::collections::BTreeSet;

/// Lowest valid rank
pub const MIN_RANK: u8 = 1;

/// Highest valid rank (S++)
pub const MAX_RANK: u8 = 13;

/// Past every valid rank; flushes the final run when formatting
const RANK_SENTINEL: u8 = MAX_RANK + 2;

const NAMED_RANKS: [(&str, u8); 3] = [("S", 11), ("S+", 12), ("S++", 13)];

/// Parse one rank token (`"7"`, `"S+"`) into its integer value
pub fn parse_rank(token: &str) -> Option<u8> {
    let token = token.trim();
    if let Some((_, rank)) = NAMED_RANKS.iter().find(|(name, _)| *name == token) {
        return Some(*rank);
    }

    match token.parse::<u8>() {
        Ok(rank) if (MIN_RANK..=10).contains(&rank) => Some(rank),
        _ => None,
    }
}

/// Render a rank back through the alphabet
pub fn rank_name(rank: u8) -> String {
    match NAMED_RANKS.iter().find(|(_, r)| *r == rank) {
        Some((name, _)) => (*name).to_string(),
        None => rank.to_string(),
    }
}

/// Parse a single rank or an inclusive `"X - Y"` range
pub fn parse_rank_token(token: &str) -> Option<Vec<u8>> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start = parse_rank(start)?;
            let end = parse_rank(end)?;
            if start > end {
                return None;
            }
            Some((start..=end).collect())
        }
        None => parse_rank(token).map(|rank| vec![rank]),
    }
}

/// Compress an ascending rank set into `LV` runs.
///
/// `{7, 8, 9, 10}` becomes `"LV7~10"` and `{7, 9}` becomes `"LV7, LV9"`.
pub fn format_ranks(ranks: &BTreeSet<u8>) -> String {
    let mut iter = ranks.iter().copied();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut parts = Vec::new();
    let mut start = first;
    let mut prev = first;

    for rank in iter.chain(std::iter::once(RANK_SENTINEL)) {
        if rank != prev + 1 {
            if start == prev {
                parts.push(format!("LV{}", rank_name(start)));
            } else {
                parts.push(format!("LV{}~{}", rank_name(start), rank_name(prev)));
            }
            start = rank;
        }
        prev = rank;
    }

    parts.join(", ")
}
