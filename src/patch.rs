//! Line-based patch applicator.
//!
//! A patch is a sequence of [`ChangeInstruction`]s whose line numbers are all
//! anchored to the ORIGINAL file, not to intermediate results. Splice-style
//! edits only shift the indices of lines below the edit point, so applying
//! instructions bottom-up (descending `start_line`) keeps every remaining
//! instruction's coordinates valid against the partially edited line array.
//!
//! Instructions come from an external planner and may be malformed; invalid
//! ranges are dropped silently so a partially wrong plan degrades gracefully
//! instead of discarding the whole patch.
use serde::{Deserialize, Serialize};

use crate::model::Plugin;

/// Edit operation kinds, serialized with the planner's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    #[serde(rename = "REPLACE_BLOCK")]
    ReplaceBlock,
    #[serde(rename = "INSERT_BEFORE")]
    InsertBefore,
    #[serde(rename = "INSERT_AFTER")]
    InsertAfter,
    #[serde(rename = "DELETE_BLOCK")]
    DeleteBlock,
}

/// One edit against a specific version of a file's line array. Lines are
/// 1-based; `end_line` only matters for block operations. The fields are
/// signed so that out-of-range planner output still deserializes and is then
/// skipped by the range checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInstruction {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub start_line: i64,
    #[serde(default)]
    pub end_line: i64,
    #[serde(default)]
    pub content: String,
}

/// All changes the planner wants applied to one file of one plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileModificationPlan {
    pub plugin_name: String,
    pub file_name: String,
    pub changes: Vec<ChangeInstruction>,
}

/// Apply a patch to `original`, returning the new text. Pure: the input is
/// never mutated, and malformed instructions never fail the call.
pub fn apply_patch(original: &str, changes: &[ChangeInstruction]) -> String {
    if changes.is_empty() {
        return original.to_string();
    }

    let mut lines: Vec<&str> = original.split('\n').collect();

    // Stable sort keeps input order among same-start_line ties.
    let mut sorted: Vec<&ChangeInstruction> = changes.iter().collect();
    sorted.sort_by(|a, b| b.start_line.cmp(&a.start_line));

    for change in sorted {
        let len = lines.len() as i64;
        let start = change.start_line - 1;
        match change.kind {
            ChangeKind::ReplaceBlock => {
                let end = change.end_line - 1;
                if start < 0 || end >= len || start > end {
                    continue;
                }
                // One slot for the whole block; embedded '\n' in content is
                // preserved verbatim by the final join.
                let (start, end) = (start as usize, end as usize);
                lines[start] = &change.content;
                if end > start {
                    lines.drain(start + 1..=end);
                }
            }
            ChangeKind::InsertBefore => {
                if start < 0 || start > len {
                    continue;
                }
                lines.insert(start as usize, &change.content);
            }
            ChangeKind::InsertAfter => {
                if start < 0 || start >= len {
                    continue;
                }
                lines.insert(start as usize + 1, &change.content);
            }
            ChangeKind::DeleteBlock => {
                let end = change.end_line - 1;
                if start < 0 || end >= len || start > end {
                    continue;
                }
                lines.drain(start as usize..=end as usize);
            }
        }
    }

    lines.join("\n")
}

/// Apply a plan to the matching file of `plugin`, marking it modified.
/// Returns `false` without touching anything when the file is not present.
pub fn apply_plan(plugin: &mut Plugin, plan: &FileModificationPlan) -> bool {
    match plugin.files.iter_mut().find(|f| f.name == plan.file_name) {
        Some(file) => {
            file.code = apply_patch(&file.code, &plan.changes);
            file.modified = true;
            true
        }
        None => {
            tracing::warn!(
                plugin = %plugin.name,
                file = %plan.file_name,
                "modification plan targets unknown file"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PluginFile;

    fn replace(start: i64, end: i64, content: &str) -> ChangeInstruction {
        ChangeInstruction {
            kind: ChangeKind::ReplaceBlock,
            start_line: start,
            end_line: end,
            content: content.to_string(),
        }
    }

    fn insert_before(start: i64, content: &str) -> ChangeInstruction {
        ChangeInstruction {
            kind: ChangeKind::InsertBefore,
            start_line: start,
            end_line: start,
            content: content.to_string(),
        }
    }

    fn insert_after(start: i64, content: &str) -> ChangeInstruction {
        ChangeInstruction {
            kind: ChangeKind::InsertAfter,
            start_line: start,
            end_line: start,
            content: content.to_string(),
        }
    }

    fn delete(start: i64, end: i64) -> ChangeInstruction {
        ChangeInstruction {
            kind: ChangeKind::DeleteBlock,
            start_line: start,
            end_line: end,
            content: String::new(),
        }
    }

    #[test]
    fn empty_patch_is_identity() {
        let code = "a\nb\nc";
        assert_eq!(apply_patch(code, &[]), code);
    }

    #[test]
    fn lines_resolve_against_the_original_file() {
        let original = "one\ntwo\nthree";
        let changes = [
            replace(2, 2, "TWO"),
            insert_before(1, "zero"),
            insert_after(3, "four"),
            delete(2, 2),
        ];
        assert_eq!(apply_patch(original, &changes), "zero\none\nthree\nfour");
    }

    #[test]
    fn out_of_range_instructions_are_dropped() {
        let original = "a\nb";
        let changes = [delete(10, 12), insert_before(-1, "x")];
        assert_eq!(apply_patch(original, &changes), original);
    }

    #[test]
    fn valid_edits_survive_invalid_neighbors() {
        let original = "a\nb\nc";
        let changes = [delete(10, 12), replace(2, 2, "B")];
        assert_eq!(apply_patch(original, &changes), "a\nB\nc");
    }

    #[test]
    fn non_overlapping_replaces_do_not_drift() {
        let original = "l1\nl2\nl3\nl4\nl5";
        let changes = [replace(1, 2, "head"), replace(4, 5, "tail")];
        assert_eq!(apply_patch(original, &changes), "head\nl3\ntail");
    }

    #[test]
    fn multi_line_replacement_content_is_preserved() {
        let original = "a\nb\nc";
        let changes = [replace(2, 2, "x\ny")];
        assert_eq!(apply_patch(original, &changes), "a\nx\ny\nc");
    }

    #[test]
    fn insert_before_past_last_line_appends() {
        let original = "a\nb";
        let changes = [insert_before(3, "c")];
        assert_eq!(apply_patch(original, &changes), "a\nb\nc");
    }

    #[test]
    fn insert_after_last_line_appends() {
        let original = "a\nb";
        let changes = [insert_after(2, "c")];
        assert_eq!(apply_patch(original, &changes), "a\nb\nc");
    }

    #[test]
    fn replace_and_delete_tie_on_start_line_keeps_input_order() {
        let original = "a\nb\nc";
        // Both target line 2; the replace lands first, the delete then
        // removes the replacement. Must not panic, must stay deterministic.
        let changes = [replace(2, 2, "B"), delete(2, 2)];
        assert_eq!(apply_patch(original, &changes), "a\nc");
    }

    #[test]
    fn instruction_deserializes_planner_wire_format() {
        let json = r#"{"type":"REPLACE_BLOCK","startLine":3,"endLine":5,"content":"x"}"#;
        let change: ChangeInstruction = serde_json::from_str(json).unwrap();
        assert_eq!(change.kind, ChangeKind::ReplaceBlock);
        assert_eq!(change.start_line, 3);
        assert_eq!(change.end_line, 5);
    }

    #[test]
    fn insert_without_end_line_deserializes() {
        let json = r#"{"type":"INSERT_AFTER","startLine":1,"content":"x"}"#;
        let change: ChangeInstruction = serde_json::from_str(json).unwrap();
        assert_eq!(change.kind, ChangeKind::InsertAfter);
        assert_eq!(change.end_line, 0);
    }

    #[test]
    fn apply_plan_patches_and_marks_file() {
        let mut plugin = Plugin::new("p", vec![PluginFile::new("a.php", "a\nb")]);
        let plan = FileModificationPlan {
            plugin_name: "p".to_string(),
            file_name: "a.php".to_string(),
            changes: vec![replace(1, 1, "A")],
        };
        assert!(apply_plan(&mut plugin, &plan));
        assert_eq!(plugin.files[0].code, "A\nb");
        assert!(plugin.files[0].modified);
    }

    #[test]
    fn apply_plan_ignores_unknown_file() {
        let mut plugin = Plugin::new("p", vec![PluginFile::new("a.php", "a")]);
        let plan = FileModificationPlan {
            plugin_name: "p".to_string(),
            file_name: "missing.php".to_string(),
            changes: vec![replace(1, 1, "A")],
        };
        assert!(!apply_plan(&mut plugin, &plan));
        assert_eq!(plugin.files[0].code, "a");
        assert!(!plugin.files[0].modified);
    }
}
