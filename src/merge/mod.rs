// src/merge/mod.rs

use std::collections::{HashMap, HashSet};

use crate::catalog;
use crate::fetch::Question;
use crate::table::{Row, Table};

/// Column holding the stable identifier of a problem (its title slug).
pub const KEY: &str = "key";
/// Column holding the problem URL derived from the key.
pub const LOCATOR: &str = "locator";
/// Column flagging rows that are no longer in the fetched list.
pub const IS_OUTDATED: &str = "is_outdated";

/// Value written to `is_outdated` on rows kept only for record-keeping.
pub const OUTDATED_FLAG: &str = "T";

/// Merge a freshly fetched question list against a previously exported
/// table.
///
/// Headers always start with `key`, `locator`, `is_outdated`; any extra
/// columns from the prior export follow in first-seen order. Current
/// questions come first, in fetch order, with custom column values carried
/// over from the prior export; `key` and `locator` are recomputed from the
/// fetched question, never taken from the prior row. Prior rows whose key
/// is gone from the fetched list are appended afterwards, in prior order,
/// with `is_outdated` set to [`OUTDATED_FLAG`] and every other value
/// untouched. No key ever appears twice in the output.
pub fn reconcile(questions: &[Question], prior: Option<&Table>) -> Table {
    let mut headers: Vec<String> = [KEY, LOCATOR, IS_OUTDATED]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(prior) = prior {
        for header in &prior.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
    }

    // Duplicate keys in the prior table: last write wins in the lookup.
    let mut prior_by_key: HashMap<&str, &Row> = HashMap::new();
    if let Some(prior) = prior {
        for row in &prior.rows {
            if let Some(key) = row.get(KEY).filter(|key| !key.is_empty()) {
                prior_by_key.insert(key, row);
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<Row> = Vec::new();

    for question in questions {
        let key = question.title_slug.as_str();
        if !seen.insert(key) {
            continue;
        }

        let mut row = Row::new();
        row.insert(KEY.to_string(), key.to_string());
        row.insert(LOCATOR.to_string(), catalog::problem_url(key));
        row.insert(IS_OUTDATED.to_string(), String::new());

        if let Some(prior_row) = prior_by_key.get(key) {
            for header in &headers {
                if let Some(value) = prior_row.get(header) {
                    row.entry(header.clone()).or_insert_with(|| value.clone());
                }
            }
        }

        rows.push(row);
    }

    if let Some(prior) = prior {
        for prior_row in &prior.rows {
            let key = match prior_row.get(KEY).filter(|key| !key.is_empty()) {
                Some(key) => key.as_str(),
                None => continue,
            };
            if !seen.insert(key) {
                continue;
            }

            let mut row = prior_row.clone();
            row.insert(IS_OUTDATED.to_string(), OUTDATED_FLAG.to_string());
            rows.push(row);
        }
    }

    Table { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse::parse_table;
    use crate::table::write::write_table;

    fn question(slug: &str) -> Question {
        Question {
            title: slug.to_string(),
            title_slug: slug.to_string(),
            difficulty: "Easy".to_string(),
        }
    }

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fresh_export_without_prior_table() {
        let merged = reconcile(&[question("two-sum")], None);

        assert_eq!(merged.headers, vec![KEY, LOCATOR, IS_OUTDATED]);
        assert_eq!(merged.rows.len(), 1);
        assert_eq!(merged.rows[0][KEY], "two-sum");
        assert_eq!(
            merged.rows[0][LOCATOR],
            "https://leetcode.com/problems/two-sum"
        );
        assert_eq!(merged.rows[0][IS_OUTDATED], "");
    }

    #[test]
    fn custom_columns_survive_a_merge() {
        let prior = Table {
            headers: vec![
                KEY.into(),
                LOCATOR.into(),
                IS_OUTDATED.into(),
                "note".into(),
            ],
            rows: vec![row(&[
                (KEY, "two-sum"),
                (LOCATOR, "https://leetcode.com/problems/two-sum"),
                (IS_OUTDATED, ""),
                ("note", "done"),
            ])],
        };

        let merged = reconcile(&[question("two-sum"), question("three-sum")], Some(&prior));

        assert_eq!(merged.headers, vec![KEY, LOCATOR, IS_OUTDATED, "note"]);
        assert_eq!(merged.rows.len(), 2);
        assert_eq!(merged.rows[0][KEY], "two-sum");
        assert_eq!(merged.rows[0]["note"], "done");
        assert_eq!(merged.rows[1][KEY], "three-sum");
        assert!(merged.rows.iter().all(|r| r[IS_OUTDATED] != OUTDATED_FLAG));
    }

    #[test]
    fn missing_questions_are_flagged_not_dropped() {
        let prior = Table {
            headers: vec![KEY.into(), IS_OUTDATED.into()],
            rows: vec![row(&[(KEY, "old-problem"), (IS_OUTDATED, "")])],
        };

        let merged = reconcile(&[question("new-problem")], Some(&prior));

        assert_eq!(merged.rows.len(), 2);
        assert_eq!(merged.rows[0][KEY], "new-problem");
        assert_eq!(merged.rows[0][IS_OUTDATED], "");
        assert_eq!(merged.rows[1][KEY], "old-problem");
        assert_eq!(merged.rows[1][IS_OUTDATED], OUTDATED_FLAG);
    }

    #[test]
    fn empty_fetch_flags_every_prior_row() {
        let prior = Table {
            headers: vec![KEY.into(), "note".into()],
            rows: vec![
                row(&[(KEY, "one"), ("note", "a")]),
                row(&[(KEY, "two"), ("note", "b")]),
            ],
        };

        let merged = reconcile(&[], Some(&prior));

        assert_eq!(merged.rows.len(), 2);
        assert!(merged
            .rows
            .iter()
            .all(|r| r[IS_OUTDATED] == OUTDATED_FLAG));
        // Original values are preserved untouched.
        assert_eq!(merged.rows[0]["note"], "a");
        assert_eq!(merged.rows[1]["note"], "b");
    }

    #[test]
    fn reserved_headers_always_lead() {
        let prior = Table {
            headers: vec!["note".into(), IS_OUTDATED.into(), KEY.into()],
            rows: vec![],
        };

        let merged = reconcile(&[], Some(&prior));
        assert_eq!(merged.headers[..3], [KEY, LOCATOR, IS_OUTDATED]);
        assert_eq!(merged.headers[3..], ["note"]);

        let empty = reconcile(&[], None);
        assert_eq!(empty.headers, vec![KEY, LOCATOR, IS_OUTDATED]);
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn key_and_locator_recomputed_from_fetch() {
        let prior = Table {
            headers: vec![KEY.into(), LOCATOR.into()],
            rows: vec![row(&[(KEY, "two-sum"), (LOCATOR, "https://old-host/x")])],
        };

        let merged = reconcile(&[question("two-sum")], Some(&prior));

        assert_eq!(
            merged.rows[0][LOCATOR],
            "https://leetcode.com/problems/two-sum"
        );
    }

    #[test]
    fn duplicate_prior_keys_last_write_wins() {
        // Documented edge case: the later duplicate replaces the earlier
        // one in the lookup used for current rows.
        let prior = Table {
            headers: vec![KEY.into(), "note".into()],
            rows: vec![
                row(&[(KEY, "two-sum"), ("note", "first")]),
                row(&[(KEY, "two-sum"), ("note", "second")]),
            ],
        };

        let merged = reconcile(&[question("two-sum")], Some(&prior));

        assert_eq!(merged.rows.len(), 1);
        assert_eq!(merged.rows[0]["note"], "second");
    }

    #[test]
    fn duplicate_stale_keys_collapse_to_one_outdated_row() {
        let prior = Table {
            headers: vec![KEY.into(), "note".into()],
            rows: vec![
                row(&[(KEY, "gone"), ("note", "first")]),
                row(&[(KEY, "gone"), ("note", "second")]),
            ],
        };

        let merged = reconcile(&[], Some(&prior));

        assert_eq!(merged.rows.len(), 1);
        assert_eq!(merged.rows[0][KEY], "gone");
        assert_eq!(merged.rows[0][IS_OUTDATED], OUTDATED_FLAG);
    }

    #[test]
    fn duplicate_fetched_slugs_emit_one_row() {
        let merged = reconcile(&[question("two-sum"), question("two-sum")], None);

        assert_eq!(merged.rows.len(), 1);
    }

    #[test]
    fn keyless_prior_rows_never_become_outdated_rows() {
        let prior = Table {
            headers: vec![KEY.into(), "note".into()],
            rows: vec![row(&[(KEY, ""), ("note", "stray")])],
        };

        let merged = reconcile(&[], Some(&prior));

        assert!(merged.rows.is_empty());
    }

    #[test]
    fn prior_columns_keep_first_seen_order() {
        let prior = Table {
            headers: vec!["b".into(), KEY.into(), "a".into(), "c".into()],
            rows: vec![],
        };

        let merged = reconcile(&[], Some(&prior));

        assert_eq!(merged.headers, vec![KEY, LOCATOR, IS_OUTDATED, "b", "a", "c"]);
    }

    #[test]
    fn second_pass_over_own_export_is_stable() {
        let prior = Table {
            headers: vec![KEY.into(), "note".into()],
            rows: vec![
                row(&[(KEY, "two-sum"), ("note", "done")]),
                row(&[(KEY, "gone"), ("note", "old")]),
            ],
        };
        let questions = [question("two-sum"), question("three-sum")];

        let first = reconcile(&questions, Some(&prior));
        let reparsed = parse_table(&write_table(&first));
        let second = reconcile(&questions, Some(&reparsed));

        assert_eq!(write_table(&first), write_table(&second));
    }
}
