use crate::error::{ExtractError, Result};

/// Default cap on match-tree nesting. The signature plist is vendor-updated
/// and outside our control, so recursion depth is bounded rather than trusted.
pub const MAX_MATCH_DEPTH: usize = 32;

/// Limits applied while building the typed signature model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractLimits {
    /// Maximum nesting depth of match groups within one rule entry.
    pub max_match_depth: usize,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self { max_match_depth: MAX_MATCH_DEPTH }
    }
}

impl ExtractLimits {
    /// Create limits with validation.
    pub fn new(max_match_depth: usize) -> Result<Self> {
        if max_match_depth == 0 {
            return Err(ExtractError::configuration("max_match_depth must be greater than 0"));
        }
        Ok(Self { max_match_depth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        assert_eq!(ExtractLimits::default().max_match_depth, MAX_MATCH_DEPTH);
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(ExtractLimits::new(0).is_err());
        assert_eq!(ExtractLimits::new(4).unwrap().max_match_depth, 4);
    }
}
