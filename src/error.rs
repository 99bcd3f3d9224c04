use thiserror::Error;
use widestring::error::ContainsNul;

use crate::criteria::SearchCriteria;

/// Failures surfaced by the lookup operations. None of them is fatal and
/// none is retried; every error is an ordinary return value.
#[derive(Debug, Error)]
pub enum FindError {
    /// The native call reported failure. `code` is the Win32 last-error
    /// value, or `ERROR_INVALID_PARAMETER` (87) when the native layer
    /// failed without setting one.
    #[error("window system call failed (code {code})")]
    Os { code: u32 },

    /// No live window matched the given criteria.
    #[error("no window matching [{0}] was found")]
    NotFound(SearchCriteria),

    /// A search string could not be converted to a NUL-terminated native
    /// UTF-16 string.
    #[error("search text is not representable as a native string: {0}")]
    Encoding(#[from] ContainsNul<u16>),
}

#[cfg(test)]
mod tests {
    use super::FindError;
    use crate::criteria::{SearchCriteria, TextCriterion};

    #[test]
    fn test_os_display_carries_code() {
        let error = FindError::Os { code: 87 };
        assert_eq!(error.to_string(), "window system call failed (code 87)");
    }

    #[test]
    fn test_not_found_display_carries_criteria() {
        let error = FindError::NotFound(SearchCriteria {
            class_name: TextCriterion::Any,
            window_name: TextCriterion::Exact("Calculator".to_string()),
        });
        assert_eq!(error.to_string(), "no window matching [class=*, title=\"Calculator\"] was found");
    }
}
