//! Tab-delimited enemy drop table parsing
//!
//! Turns a per-game text dump into item → enemy → drop entry maps, skipping
//! unused enemy slots and the enemies listed in an ignored-enemy file.

mod ignored;
mod parser;
mod report;
pub mod row;

pub use ignored::IgnoredEnemies;
pub use parser::DropTable;
pub use report::{enemy_roster, EnemyRoster};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LineCursor;
    use crate::DropTableError;
    use std::collections::BTreeSet;

    fn sep() -> String {
        "-".repeat(row::SEPARATOR_WIDTH)
    }

    fn banded(lines: &[&str]) -> String {
        let sep = sep();
        let mut all = vec!["Enemy\tHP%\tReward\tRank\tChance", sep.as_str()];
        all.extend_from_slice(lines);
        all.join("\n")
    }

    fn labels(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn mettaur_block() -> Vec<String> {
        vec![
            "Mettaur\t>37.5%\tGuard1 A\t7 - 7\t5%".to_string(),
            "\t\t\t8 - S\t10%".to_string(),
            String::new(),
            "\t<=37.5%\tGuard1 A\t7 - 7\t5%".to_string(),
            "\t\t\t8 - S\t10%".to_string(),
            sep(),
        ]
    }

    fn parse_banded(lines: &[String]) -> DropTable {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut table = DropTable::from_text(&banded(&refs), "bn4rs_drops.txt", true);
        table.parse().unwrap();
        table
    }

    #[test]
    fn test_mettaur_block_before_and_after_fold() {
        let mut table = parse_banded(&mettaur_block());

        let guard = table.get("Guard1 A").unwrap();
        let mettaur = guard.get("Mettaur").unwrap();
        assert_eq!(mettaur.drop_entries.len(), 2);
        assert_eq!(mettaur.drop_entries[0].hp_percents, labels(&[">37.5%"]));
        assert_eq!(mettaur.drop_entries[1].hp_percents, labels(&["<=37.5%"]));

        table.fold_same_drop_entries().unwrap();

        let mettaur = table.get("Guard1 A").unwrap().get("Mettaur").unwrap();
        assert_eq!(mettaur.drop_entries.len(), 1);
        assert_eq!(mettaur.drop_entries[0].hp_percents, labels(&[">37.5%", "<=37.5%"]));
        assert_eq!(mettaur.drop_entries[0].format_ranks(), "LV7~S");
        assert_eq!(table.enemy_count(), 1);
    }

    #[test]
    fn test_labelled_continuations() {
        let lines: Vec<String> = [
            "Mettaur\t>37.5%\tGuard1 A\t7 - 7\t5%",
            "\t>37.5%\t\t8 - 10\t10%",
            "\t>37.5%\tShockwav J\t9 - S\t5%",
            "",
            "\t<=37.5%\tShockwav J\t7 - 10\t5%",
        ]
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(sep()))
        .collect();

        let table = parse_banded(&lines);

        let guard = table.get("Guard1 A").unwrap().get("Mettaur").unwrap();
        assert_eq!(guard.drop_entries.len(), 1);
        assert_eq!(guard.drop_entries[0].format_ranks(), "LV7~10");

        let shock = table.get("Shockwav J").unwrap().get("Mettaur").unwrap();
        assert_eq!(shock.drop_entries.len(), 2);
        assert_eq!(shock.drop_entries[0].format_ranks(), "LV9~S");
        assert_eq!(shock.drop_entries[1].format_ranks(), "LV7~10");
    }

    #[test]
    fn test_skipped_rewards_and_unused() {
        let sep = sep();
        let text = banded(&[
            "Unused\t>37.5%\tGuard1 A\t1\t5%",
            &sep,
            "Mettaur\t>37.5%\t100z\t1 - 5\t50%",
            "\t\t\t6 - S\t50%",
            "\t>37.5%\tHP+50\t1\t5%",
            "\t>37.5%\tCannon A\t3\t5%",
            &sep,
        ]);

        let mut table = DropTable::from_text(&text, "t.txt", true);
        table.parse().unwrap();

        assert_eq!(table.items().len(), 1);
        assert_eq!(table.enemy_count(), 2);
        let cannon = table.get("Cannon A").unwrap();
        assert_eq!(cannon.len(), 1);
        assert_eq!(cannon.get("Mettaur").unwrap().drop_entries[0].format_ranks(), "LV3");
    }

    #[test]
    fn test_flat_table() {
        let sep = sep();
        let text = [
            "Enemy\tReward\tRank\tChance",
            &sep,
            "Mettaur\tCannon A\t1 - 3\t20%",
            "\t\t5\t20%",
            "\tCannon B\t4\t10%",
            &sep,
            "Canodumb\tCannon A\t6 - 7\t20%",
            &sep,
        ]
        .join("\n");

        let mut table = DropTable::from_text(&text, "bn2_drops.txt", false);
        table.parse().unwrap();
        table.fold_same_drop_entries().unwrap();

        let cannon = table.get("Cannon A").unwrap();
        let enemies: Vec<&str> = cannon.enemy_drops.keys().map(String::as_str).collect();
        assert_eq!(enemies, vec!["Mettaur", "Canodumb"]);
        assert_eq!(cannon.get("Mettaur").unwrap().drop_entries[0].format_ranks(), "LV1~3, LV5");
        assert_eq!(table.get("Cannon B").unwrap().get("Mettaur").unwrap().drop_entries.len(), 1);
    }

    #[test]
    fn test_ignored_enemy_mismatch() {
        let sep = sep();
        let mut lines = Vec::new();
        for name in ["Mettaur", "Canodumb", "Fishy", "Bar"] {
            lines.push(format!("{}\t>37.5%\tCannon A\t1\t5%", name));
            lines.push(sep.clone());
        }

        let mut ignored = IgnoredEnemies::new();
        ignored.insert(3, "Foo");

        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut table = DropTable::from_text(&banded(&refs), "t.txt", true).with_ignored_enemies(ignored);

        match table.parse() {
            Err(DropTableError::Consistency { message, .. }) => {
                assert!(message.contains("(3, Foo)"));
                assert!(message.contains("(3, Bar)"));
            }
            other => panic!("expected consistency error, got {:?}", other),
        }
        assert!(table.get("Cannon A").map_or(true, |c| c.get("Bar").is_none()));
    }

    #[test]
    fn test_ignored_enemy_skipped() {
        let sep = sep();
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            &sep,
            "Bass\t>37.5%\tCannon A\t9\t5%",
            "\t>37.5%\tnot a row at all\textra\tfields\there",
            &sep,
        ]);

        let mut ignored = IgnoredEnemies::new();
        ignored.insert(1, "Bass");

        let mut table = DropTable::from_text(&text, "t.txt", true).with_ignored_enemies(ignored);
        table.parse().unwrap();

        let cannon = table.get("Cannon A").unwrap();
        assert_eq!(cannon.len(), 1);
        assert!(cannon.get("Bass").is_none());
    }

    #[test]
    fn test_inconsistent_hp_label() {
        let sep = sep();
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            "\t<=37.5%\t\t2\t5%",
            &sep,
        ]);

        let mut table = DropTable::from_text(&text, "t.txt", true);
        let err = table.parse().unwrap_err();
        assert!(matches!(err, DropTableError::Consistency { ref location, .. } if location == "t.txt:4"));
    }

    #[test]
    fn test_row_shape_errors() {
        let sep = sep();

        // Continuation with nothing open
        let text = banded(&["Mettaur\t>37.5%\t1\t5%", &sep]);
        let mut table = DropTable::from_text(&text, "t.txt", true);
        assert!(matches!(table.parse(), Err(DropTableError::Parse { .. })));

        // Four fields while a reward is open
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            "\t>37.5%\ta\tb\tc\td",
            &sep,
        ]);
        let mut table = DropTable::from_text(&text, "t.txt", true);
        assert!(matches!(table.parse(), Err(DropTableError::Parse { .. })));

        // Bad rank token
        let text = banded(&["Mettaur\t>37.5%\tCannon A\tT\t5%", &sep]);
        let mut table = DropTable::from_text(&text, "t.txt", true);
        let err = table.parse().unwrap_err();
        assert!(err.to_string().contains("invalid rank or rank range 'T'"));
    }

    #[test]
    fn test_missing_header() {
        let mut table = DropTable::from_text("Mettaur\tCannon A\t1\t5%", "t.txt", false);
        assert!(matches!(table.parse(), Err(DropTableError::Parse { .. })));
    }

    #[test]
    fn test_input_ends_inside_block() {
        let text = banded(&["Mettaur\t>37.5%\tCannon A\t1\t5%", "\t\t\t2 - 3\t5%"]);
        let mut table = DropTable::from_text(&text, "t.txt", true);
        table.parse().unwrap();

        let entry = &table.get("Cannon A").unwrap().get("Mettaur").unwrap().drop_entries[0];
        assert_eq!(entry.format_ranks(), "LV1~3");
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let mut table = parse_banded(&mettaur_block());
        table.parse().unwrap();
        let mettaur = table.get("Guard1 A").unwrap().get("Mettaur").unwrap();
        assert_eq!(mettaur.drop_entries.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let drops = dir.path().join("bn6g_drops.txt");
        let ignored = dir.path().join("bn6g_ignored_enemies.txt");

        let sep = sep();
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            "",
            "\t<=37.5%\tCannon A\t1\t5%",
            &sep,
            "Bass\t>37.5%\tCannon A\t9\t5%",
            &sep,
        ]);
        std::fs::write(&drops, text).unwrap();
        std::fs::write(&ignored, "  1: Bass\n").unwrap();

        let table =
            DropTable::from_file(&drops, Some(&ignored), true, Some("6CG".to_string())).unwrap();

        assert_eq!(table.version(), Some("6CG"));
        let cannon = table.get("Cannon A").unwrap();
        assert_eq!(cannon.len(), 1);
        assert_eq!(cannon.get("Mettaur").unwrap().drop_entries.len(), 1);
    }

    fn roster_of(text: &str) -> Vec<String> {
        let mut cursor = LineCursor::from_text(text, "bn6g_drops.txt");
        enemy_roster(&mut cursor).unwrap().enemies
    }

    #[test]
    fn test_indented_separator_keeps_numbering() {
        let sep = sep();
        let indented = format!("  {}", sep);
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            &indented,
            "Bass\t>37.5%\tCannon A\t9\t5%",
            &sep,
            "Fishy\t>37.5%\tCannon A\t3\t5%",
            &sep,
        ]);

        let roster = roster_of(&text);
        assert_eq!(roster, vec!["Mettaur", "Bass", "Fishy"]);

        let mut ignored = IgnoredEnemies::new();
        ignored.insert(1, roster[1].as_str());
        let mut table =
            DropTable::from_text(&text, "bn6g_drops.txt", true).with_ignored_enemies(ignored);
        table.parse().unwrap();

        assert_eq!(table.enemy_count(), 3);
        let cannon = table.get("Cannon A").unwrap();
        assert!(cannon.get("Bass").is_none());
        assert!(cannon.get("Fishy").is_some());
    }

    #[test]
    fn test_blank_lines_between_blocks_are_not_enemies() {
        let sep = sep();
        let text = banded(&[
            "Mettaur\t>37.5%\tCannon A\t1\t5%",
            &sep,
            "",
            "Bass\t>37.5%\tCannon A\t9\t5%",
            &sep,
            "",
            "   ",
        ]);

        assert_eq!(roster_of(&text), vec!["Mettaur", "Bass"]);

        let mut table = DropTable::from_text(&text, "bn6g_drops.txt", true);
        table.parse().unwrap();
        assert_eq!(table.enemy_count(), 2);
        assert!(table.get("Cannon A").unwrap().get("").is_none());
    }
}
