//! xprotect-extract - Flattens Apple XProtect malware-signature definitions
//! into uniform tabular rows.
//!
//! An XProtect rule entry nests match groups ("match any" vs "match all")
//! arbitrarily deep; each group combines further groups and concrete file
//! matches. This library builds a typed tree from the plist, then flattens it
//! into one row per file match, stamped with the owning entry's description
//! and launch-services content type.
//!
//! # Example
//!
//! ```no_run
//! use xprotect_extract::{extract_rows_from_path, ExtractLimits};
//!
//! let rows = extract_rows_from_path("XProtect.plist", &ExtractLimits::default()).unwrap();
//! for row in &rows {
//!     println!("{}: {} ({})", row.name, row.filename, row.filetype);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod output;
pub mod plist;
pub mod signature;

// Re-export commonly used types at crate root
pub use config::ExtractLimits;
pub use error::{ExtractError, Result};
pub use flatten::{extract_entries, SignatureRow};
pub use signature::{FileInfo, MatchGroup, MatchLeaf, MatchNode, RuleEntry};

use std::path::Path;

/// Flatten signature rows out of an already-parsed plist value.
pub fn extract_rows(document: &plist::Value, limits: &ExtractLimits) -> Result<Vec<SignatureRow>> {
    let entries = signature::parse_entries(document, limits)?;
    Ok(flatten::extract_entries(&entries))
}

/// Load a signature plist from disk and flatten it.
///
/// Missing or unparseable files yield an empty row set; see [`loader`].
pub fn extract_rows_from_path<P: AsRef<Path>>(
    path: P,
    limits: &ExtractLimits,
) -> Result<Vec<SignatureRow>> {
    loader::load_rows_from_path(path, limits)
}
