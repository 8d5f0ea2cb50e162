//! Loading the on-disk signature plist.
//!
//! XProtect definitions are shipped and updated by the vendor; a host where
//! the file is missing or unreadable simply has no rows to report. Only a
//! structural violation inside an otherwise well-formed document (the
//! nesting cap) is a hard error.

use crate::config::ExtractLimits;
use crate::error::Result;
use crate::flatten::{extract_entries, SignatureRow};
use crate::{plist, signature};
use std::path::Path;
use tracing::debug;

/// Well-known location of XProtect.plist.
pub const XPROTECT_PLIST_PATH: &str = "/System/Library/CoreServices/\
                                       CoreTypes.bundle/Contents/Resources/XProtect.plist";

/// Load and flatten signature rows from a plist at `path`.
///
/// A missing, unreadable, or unparseable file yields an empty row set.
pub fn load_rows_from_path<P: AsRef<Path>>(
    path: P,
    limits: &ExtractLimits,
) -> Result<Vec<SignatureRow>> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("Signature plist is missing: {}", path.display());
        return Ok(Vec::new());
    }

    let xml = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Could not read signature plist {}: {e}", path.display());
            return Ok(Vec::new());
        }
    };

    let value = match plist::parse(&xml) {
        Ok(value) => value,
        Err(e) => {
            debug!("Could not parse signature plist {}: {e}", path.display());
            return Ok(Vec::new());
        }
    };

    let entries = signature::parse_entries(&value, limits)?;
    Ok(extract_entries(&entries))
}

/// Load rows from the well-known system path.
pub fn load_default_rows(limits: &ExtractLimits) -> Result<Vec<SignatureRow>> {
    load_rows_from_path(XPROTECT_PLIST_PATH, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_empty() {
        let rows =
            load_rows_from_path("/nonexistent/XProtect.plist", &ExtractLimits::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unparseable_file_yields_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("XProtect.plist");
        std::fs::write(&path, "definitely not a plist").unwrap();

        let rows = load_rows_from_path(&path, &ExtractLimits::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_dict_root_yields_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("XProtect.plist");
        std::fs::write(&path, "<plist><dict/></plist>").unwrap();

        let rows = load_rows_from_path(&path, &ExtractLimits::default()).unwrap();
        assert!(rows.is_empty());
    }
}
