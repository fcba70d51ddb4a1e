//! Subversion error codes and their classification

use std::fmt;

/// Numeric Subversion error code (the digits of `E155007` / `W155010`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SvnErrorCode(pub u32);

impl SvnErrorCode {
    pub const ENTRY_NOT_FOUND: Self = Self(150000);
    pub const WC_NOT_WORKING_COPY: Self = Self(155007);
    pub const WC_PATH_NOT_FOUND: Self = Self(155010);
    pub const WC_UPGRADE_REQUIRED: Self = Self(155036);
    pub const UNVERSIONED_RESOURCE: Self = Self(200005);
    pub const ILLEGAL_TARGET: Self = Self(200009);

    /// Codes meaning "this path is not (inside) a working copy" rather than a failure
    pub fn is_unversioned_or_not_found(self) -> bool {
        matches!(
            self,
            Self::WC_PATH_NOT_FOUND
                | Self::UNVERSIONED_RESOURCE
                | Self::WC_NOT_WORKING_COPY
                | Self::ILLEGAL_TARGET
        )
    }
}

impl fmt::Display for SvnErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:06}", self.0)
    }
}

/// Extracts every `E######` / `W######` code from `svn` stderr, in order
///
/// ```
/// use nested_roots::svn::{parse_error_codes, SvnErrorCode};
///
/// let stderr = "svn: warning: W155010: The node '/x' was not found.\n\
///               svn: E200009: Could not display info for all targets\n";
/// assert_eq!(
///     parse_error_codes(stderr),
///     vec![SvnErrorCode::WC_PATH_NOT_FOUND, SvnErrorCode::ILLEGAL_TARGET]
/// );
/// ```
pub fn parse_error_codes(stderr: &str) -> Vec<SvnErrorCode> {
    stderr
        .lines()
        .flat_map(|line| line.split_whitespace())
        .filter_map(|token| {
            let token = token.strip_suffix(':')?;
            let digits = token.strip_prefix('E').or_else(|| token.strip_prefix('W'))?;
            if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok().map(SvnErrorCode)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unversioned_codes() {
        assert!(SvnErrorCode::WC_NOT_WORKING_COPY.is_unversioned_or_not_found());
        assert!(SvnErrorCode::WC_PATH_NOT_FOUND.is_unversioned_or_not_found());
        assert!(SvnErrorCode::UNVERSIONED_RESOURCE.is_unversioned_or_not_found());
        assert!(SvnErrorCode::ILLEGAL_TARGET.is_unversioned_or_not_found());

        assert!(!SvnErrorCode::WC_UPGRADE_REQUIRED.is_unversioned_or_not_found());
        assert!(!SvnErrorCode::ENTRY_NOT_FOUND.is_unversioned_or_not_found());
        assert!(!SvnErrorCode(170013).is_unversioned_or_not_found());
    }

    #[test]
    fn test_parse_not_a_working_copy() {
        let stderr = "svn: E155007: '/tmp/plain' is not a working copy\n";
        assert_eq!(parse_error_codes(stderr), vec![SvnErrorCode::WC_NOT_WORKING_COPY]);
    }

    #[test]
    fn test_parse_ignores_lookalike_tokens() {
        let stderr = "svn: E15500: short\nsvn: Ex55007: letters\nE155007 no colon\n";
        assert!(parse_error_codes(stderr).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(SvnErrorCode(155007).to_string(), "E155007");
        assert_eq!(SvnErrorCode(1).to_string(), "E000001");
    }
}
