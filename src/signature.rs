//! Typed model of XProtect signature entries.
//!
//! The on-disk plist discriminates match groups from leaf matches only
//! structurally (a node is a group iff it carries a `Matches` list). That
//! check is done once here, while building the typed tree, so the flattening
//! pass works on tagged variants instead of re-probing dictionaries.

use crate::config::ExtractLimits;
use crate::error::{ExtractError, Result};
use crate::plist::Value;

// Apple key names used by XProtect.plist.
pub const KEY_DESCRIPTION: &str = "Description";
pub const KEY_LAUNCH_SERVICES: &str = "LaunchServices";
pub const KEY_ITEM_CONTENT_TYPE: &str = "LSItemContentType";
pub const KEY_MATCHES: &str = "Matches";
pub const KEY_MATCH_TYPE: &str = "MatchType";
pub const KEY_IDENTITY: &str = "Identity";
pub const KEY_MATCH_FILE: &str = "MatchFile";
pub const KEY_PATTERN: &str = "Pattern";

// MatchFile can hold any of the Foundation NSURL resource keys; these are
// the ones the table surfaces.
pub const KEY_URL_NAME: &str = "NSURLNameKey";
pub const KEY_URL_TYPE_IDENTIFIER: &str = "NSURLTypeIdentifierKey";
pub const KEY_DOWNLOAD_CONTENT_TYPE: &str = "LSDownloadContentTypeKey";

/// `MatchType` value marking a group's children as alternatives.
pub const MATCH_TYPE_ANY: &str = "MatchAny";

/// One top-level signature definition.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub name: String,
    pub launch_type: String,
    /// The entry's own match list, when it has one. Entries without a
    /// `Matches` key are inert and produce no rows.
    pub matches: Option<MatchGroup>,
}

/// A node combining child matches under an any/all semantic.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchGroup {
    /// True iff this group's own `MatchType` is `MatchAny`. Deliberately not
    /// combined with ancestor groups; each level stands alone.
    pub match_any: bool,
    pub children: Vec<MatchNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchNode {
    Group(MatchGroup),
    Leaf(MatchLeaf),
}

/// A terminal match rule referencing a concrete file.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchLeaf {
    pub identity: String,
    /// Presence of a `Pattern` key; its value is irrelevant here.
    pub uses_pattern: bool,
    /// Absent when the leaf has no `MatchFile` substructure. Such leaves are
    /// tolerated and dropped during flattening.
    pub file: Option<FileInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub type_identifier: String,
    pub download_content_type: Option<String>,
}

/// Build the typed entry list from a parsed plist.
///
/// A top-level value that is not an array yields an empty list, matching the
/// empty-or-malformed-root tolerance of the table. Array members that are not
/// dictionaries are skipped.
pub fn parse_entries(root: &Value, limits: &ExtractLimits) -> Result<Vec<RuleEntry>> {
    let Some(items) = root.as_array() else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .filter(|item| item.as_dict().is_some())
        .map(|item| RuleEntry::from_value(item, limits))
        .collect()
}

impl RuleEntry {
    pub fn from_value(entry: &Value, limits: &ExtractLimits) -> Result<Self> {
        let launch_type = entry
            .get(KEY_LAUNCH_SERVICES)
            .map(|ls| ls.get_str_or_empty(KEY_ITEM_CONTENT_TYPE))
            .unwrap_or_default();

        let matches = if entry.get(KEY_MATCHES).is_some() {
            Some(MatchGroup::from_value(entry, limits.max_match_depth, limits)?)
        } else {
            None
        };

        Ok(Self {
            name: entry.get_str_or_empty(KEY_DESCRIPTION),
            launch_type,
            matches,
        })
    }
}

impl MatchGroup {
    /// Build a group from a dict that owns a `Matches` list. `depth_budget`
    /// shrinks per nesting level; running out means the document nests deeper
    /// than the configured cap.
    fn from_value(owner: &Value, depth_budget: usize, limits: &ExtractLimits) -> Result<Self> {
        if depth_budget == 0 {
            return Err(ExtractError::structure_too_deep(limits.max_match_depth));
        }

        let match_any = owner.get_str_or_empty(KEY_MATCH_TYPE) == MATCH_TYPE_ANY;

        let mut children = Vec::new();
        if let Some(list) = owner.get(KEY_MATCHES).and_then(Value::as_array) {
            for child in list {
                if child.get(KEY_MATCHES).is_some() {
                    children.push(MatchNode::Group(Self::from_value(
                        child,
                        depth_budget - 1,
                        limits,
                    )?));
                } else {
                    children.push(MatchNode::Leaf(MatchLeaf::from_value(child)));
                }
            }
        }

        Ok(Self { match_any, children })
    }
}

impl MatchLeaf {
    fn from_value(node: &Value) -> Self {
        Self {
            identity: node.get_str_or_empty(KEY_IDENTITY),
            uses_pattern: node.get(KEY_PATTERN).is_some(),
            file: node.get(KEY_MATCH_FILE).map(FileInfo::from_value),
        }
    }
}

impl FileInfo {
    fn from_value(file: &Value) -> Self {
        Self {
            name: file.get_str_or_empty(KEY_URL_NAME),
            type_identifier: file.get_str_or_empty(KEY_URL_TYPE_IDENTIFIER),
            download_content_type: file
                .get(KEY_DOWNLOAD_CONTENT_TYPE)
                .and_then(Value::as_text)
                .map(str::to_string),
        }
    }
}
