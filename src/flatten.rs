//! Flattening of nested match trees into tabular rows.
//!
//! Each rule entry owns a tree of match groups; a group's children are either
//! further groups or concrete file matches. Flattening walks that tree and
//! emits one row per leaf that names a file, stamped with the owning entry's
//! description and launch-services content type.

use crate::signature::{MatchGroup, MatchNode, RuleEntry};
use serde::Serialize;

/// One flattened file-match row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureRow {
    pub name: String,
    pub launch_type: String,
    pub optional: bool,
    pub identity: String,
    pub filetype: String,
    pub uses_pattern: bool,
    pub filename: String,
}

impl SignatureRow {
    /// Output column order for tabular rendering.
    pub const COLUMNS: &'static [&'static str] = &[
        "name",
        "launch_type",
        "optional",
        "identity",
        "filetype",
        "uses_pattern",
        "filename",
    ];

    /// Values in `COLUMNS` order. Booleans render as "1"/"0" to match the
    /// published table schema.
    pub fn column_values(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.launch_type.clone(),
            flag(self.optional),
            self.identity.clone(),
            self.filetype.clone(),
            flag(self.uses_pattern),
            self.filename.clone(),
        ]
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// Append one row per file-bearing leaf under `group`, in document order.
///
/// Optionality is recomputed at every group from that group's own `MatchType`
/// tag; it is not inherited from ancestors. A `MatchAny` nested inside a
/// required group marks only its own direct leaves optional.
pub fn flatten_group(group: &MatchGroup, rows: &mut Vec<SignatureRow>) {
    let optional = group.match_any;

    for child in &group.children {
        match child {
            MatchNode::Group(inner) => flatten_group(inner, rows),
            MatchNode::Leaf(leaf) => {
                // A match entry with no file reference is odd; skip it.
                let Some(file) = &leaf.file else {
                    continue;
                };

                // The download content type is the more specific signal when
                // the signature carries one.
                let filetype = file
                    .download_content_type
                    .clone()
                    .unwrap_or_else(|| file.type_identifier.clone());

                rows.push(SignatureRow {
                    name: String::new(),
                    launch_type: String::new(),
                    optional,
                    identity: leaf.identity.clone(),
                    filetype,
                    uses_pattern: leaf.uses_pattern,
                    filename: file.name.clone(),
                });
            }
        }
    }
}

/// Flatten every entry, stamping rows with entry-level context.
pub fn extract_entries(entries: &[RuleEntry]) -> Vec<SignatureRow> {
    let mut rows = Vec::new();

    for entry in entries {
        let Some(group) = &entry.matches else {
            continue;
        };

        let mut file_matches = Vec::new();
        flatten_group(group, &mut file_matches);

        for mut row in file_matches {
            row.name = entry.name.clone();
            row.launch_type = entry.launch_type.clone();
            rows.push(row);
        }
    }

    rows
}
