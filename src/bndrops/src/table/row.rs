//! Row classification for drop table dumps
//!
//! Each line of an enemy block is tagged with its shape before the parser
//! looks at it. Fields are separated by runs of tabs.

/// Header row that starts the table body
pub const HEADER_PREFIX: &str = "Enemy\t";

/// Number of dashes that mark an enemy block separator
pub const SEPARATOR_WIDTH: usize = 56;

/// Enemy-name sentinel for unused table slots
pub const UNUSED_ENEMY: &str = "Unused";

/// Shape of one reward-scan row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// Dashed line ending the enemy block
    Separator,
    /// Empty line ending an HP-percent group
    Blank,
    /// `reward, rank, percent`, opening a new reward
    NewReward {
        hp: Option<&'a str>,
        reward: &'a str,
        rank: &'a str,
        percent: &'a str,
    },
    /// `rank, percent`, adding ranks to the open reward
    Continuation {
        hp: Option<&'a str>,
        rank: &'a str,
        percent: &'a str,
    },
    /// Any other field count
    Malformed {
        hp: Option<&'a str>,
        fields: Vec<&'a str>,
    },
}

impl<'a> Row<'a> {
    /// HP label carried by the row itself, if any
    pub fn hp(&self) -> Option<&'a str> {
        match self {
            Row::NewReward { hp, .. } | Row::Continuation { hp, .. } | Row::Malformed { hp, .. } => {
                *hp
            }
            Row::Separator | Row::Blank => None,
        }
    }
}

pub fn is_separator(line: &str) -> bool {
    line.len() >= SEPARATOR_WIDTH && line.bytes().take(SEPARATOR_WIDTH).all(|b| b == b'-')
}

/// HP-percent condition labels look like `>37.5%` or `<=37.5%`
pub fn is_hp_label(field: &str) -> bool {
    field.starts_with(['>', '<', '='])
}

/// Fields of a line, split on runs of tabs after trimming
pub fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split('\t').filter(|f| !f.is_empty()).collect()
}

/// Enemy name: everything before the first tab
pub fn enemy_name(line: &str) -> &str {
    line.split('\t').next().unwrap_or_default()
}

/// Drop the leading enemy-name field from the first line of a block
pub fn strip_enemy_name(line: &str) -> &str {
    match line.find('\t') {
        Some(idx) => &line[idx..],
        None => "",
    }
}

/// Tag a line with its shape.
///
/// In HP-banded tables a leading HP label is split off first; rows that
/// leave it out inherit the label of their group.
pub fn classify_row(line: &str, hp_banded: bool) -> Row<'_> {
    let trimmed = line.trim();
    if is_separator(trimmed) {
        return Row::Separator;
    }
    if trimmed.is_empty() {
        return Row::Blank;
    }

    let mut fields = split_fields(trimmed);
    let hp = if hp_banded && fields.first().is_some_and(|f| is_hp_label(f)) {
        Some(fields.remove(0))
    } else {
        None
    };

    match fields.len() {
        3 => Row::NewReward {
            hp,
            reward: fields[0],
            rank: fields[1],
            percent: fields[2],
        },
        2 => Row::Continuation {
            hp,
            rank: fields[0],
            percent: fields[1],
        },
        _ => Row::Malformed { hp, fields },
    }
}

/// Rewards that are not chips: zenny amounts and HP upgrades
pub fn is_skipped_reward(reward: &str) -> bool {
    reward.ends_with('z') || reward.starts_with("HP+") || reward.starts_with("HP Max")
}
