//! Rules for chips whose drop locations differ between the two versions

use crate::drops::{DropEntry, EnemyDrop, ItemDropLocations};
use crate::error::{DropTableError, Result};

/// One version's view of a chip
#[derive(Debug, Clone, Copy)]
pub(super) struct Side<'a> {
    pub locations: &'a ItemDropLocations,
    pub version: &'a str,
    pub source: &'a str,
}

/// `{{6CG}}`, the tag for a location found in one version only
pub(super) fn version_tag(version: &str) -> String {
    format!("{{{{{}}}}}", version)
}

/// `{{4RS2}}`, the short tag used inside a side-by-side pair
fn paired_tag(version: &str) -> String {
    format!("{{{{{}2}}}}", version)
}

/// Both versions' ranks next to each other, for every enemy of the first
/// version. Enemies only the second version has are not listed.
pub(super) fn side_by_side(item: &str, first: Side<'_>, second: Side<'_>) -> Result<String> {
    let mut parts = Vec::with_capacity(first.locations.len());

    for (enemy, drop) in &first.locations.enemy_drops {
        let Some(other) = second.locations.get(enemy) else {
            return Err(mismatch(
                item,
                first,
                second,
                format!("'{}' drops it in {} but not in {}", enemy, first.version, second.version),
            ));
        };

        let ranks = sole_full_entry(item, first, drop)?.format_ranks();
        let other_ranks = sole_full_entry(item, second, other)?.format_ranks();

        parts.push(format!(
            "{} ({}: {}; {}: {})",
            enemy,
            paired_tag(first.version),
            ranks,
            paired_tag(second.version),
            other_ranks
        ));
    }

    Ok(parts.join(", "))
}

/// One version has every enemy of the other plus exactly one more. Shared
/// enemies render plainly, the extra one gets the larger version's tag.
///
/// Returns `None` when the enemy counts are not one apart.
pub(super) fn larger_enemy_set(
    item: &str,
    first: Side<'_>,
    second: Side<'_>,
) -> Option<Result<String>> {
    let (larger, smaller) = if first.locations.len() + 1 == second.locations.len() {
        (second, first)
    } else if second.locations.len() + 1 == first.locations.len() {
        (first, second)
    } else {
        return None;
    };

    Some(render_larger(item, larger, smaller))
}

fn render_larger(item: &str, larger: Side<'_>, smaller: Side<'_>) -> Result<String> {
    if let Some(missing) = smaller
        .locations
        .enemy_drops
        .keys()
        .find(|enemy| larger.locations.get(enemy).is_none())
    {
        return Err(mismatch(
            item,
            smaller,
            larger,
            format!("'{}' drops it in {} only, which also has fewer enemies", missing, smaller.version),
        ));
    }

    let mut parts = Vec::with_capacity(larger.locations.len());

    for (enemy, drop) in &larger.locations.enemy_drops {
        let ranks = sole_full_entry(item, larger, drop)?.format_ranks();

        match smaller.locations.get(enemy) {
            Some(shared) if shared != drop => {
                return Err(mismatch(
                    item,
                    larger,
                    smaller,
                    format!("'{}' drops it differently in each version", enemy),
                ));
            }
            Some(_) => parts.push(format!("{} ({})", enemy, ranks)),
            None => parts.push(format!("{} {} ({})", version_tag(larger.version), enemy, ranks)),
        }
    }

    Ok(parts.join(", "))
}

/// The one entry of a drop that applies at every HP
fn sole_full_entry<'a>(item: &str, side: Side<'_>, drop: &'a EnemyDrop) -> Result<&'a DropEntry> {
    match drop.drop_entries.as_slice() {
        [entry] if entry.hp_percents.len() == 2 => Ok(entry),
        [entry] => Err(DropTableError::consistency(
            side.source,
            format!(
                "'{}' drops '{}' under HP labels {:?}, expected both bands",
                drop.enemy_name, item, entry.hp_percents
            ),
        )),
        entries => Err(DropTableError::consistency(
            side.source,
            format!(
                "'{}' has {} drop entries for '{}', expected 1",
                drop.enemy_name,
                entries.len(),
                item
            ),
        )),
    }
}

fn mismatch(item: &str, a: Side<'_>, b: Side<'_>, detail: String) -> DropTableError {
    DropTableError::consistency(
        format!("{} + {}", a.source, b.source),
        format!("cannot reconcile '{}': {}", item, detail),
    )
}
