use std::fmt::{Display, Formatter};

use widestring::U16CString;

use crate::error::FindError;

/// A single search criterion: either "match any value" or an exact,
/// case-sensitive text match. Replaces the usual empty-string-as-wildcard
/// convention, which cannot distinguish "search for an empty title" from
/// "don't care".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextCriterion {
    #[default]
    Any,
    Exact(String),
}

impl TextCriterion {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            TextCriterion::Any => true,
            TextCriterion::Exact(query) => query == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TextCriterion::Any)
    }

    /// Converts the criterion to the NUL-terminated UTF-16 form the native
    /// lookup calls expect. `Any` becomes `None`, which the caller turns
    /// into a null pointer (the native wildcard).
    pub fn to_wide(&self) -> Result<Option<U16CString>, FindError> {
        match self {
            TextCriterion::Any => Ok(None),
            TextCriterion::Exact(query) => Ok(Some(U16CString::from_str(query)?)),
        }
    }
}

impl Display for TextCriterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextCriterion::Any => write!(f, "*"),
            TextCriterion::Exact(query) => write!(f, "\"{}\"", query),
        }
    }
}

/// Optional class-name/window-name pair used by the lookup operations.
/// Absent fields act as wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub class_name: TextCriterion,
    pub window_name: TextCriterion,
}

impl Display for SearchCriteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "class={}, title={}", self.class_name, self.window_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchCriteria, TextCriterion};
    use crate::error::FindError;

    #[test]
    fn test_any_matches_everything() {
        assert!(TextCriterion::Any.matches("Untitled - Notepad"));
        assert!(TextCriterion::Any.matches(""));
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let criterion = TextCriterion::Exact("Edit".to_string());
        assert!(criterion.matches("Edit"));
        assert!(!criterion.matches("edit"));
        assert!(!criterion.matches("Edit "));
        assert!(!criterion.matches("Ed"));
    }

    #[test]
    fn test_exact_empty_is_not_a_wildcard() {
        let criterion = TextCriterion::Exact(String::new());
        assert!(criterion.matches(""));
        assert!(!criterion.matches("anything"));
    }

    #[test]
    fn test_to_wide() {
        assert_eq!(TextCriterion::Any.to_wide().unwrap(), None);

        let wide = TextCriterion::Exact("Edit".to_string()).to_wide().unwrap().unwrap();
        assert_eq!(wide.to_string_lossy(), "Edit");
    }

    #[test]
    fn test_to_wide_rejects_interior_nul() {
        let criterion = TextCriterion::Exact("Ed\0it".to_string());
        assert!(matches!(criterion.to_wide(), Err(FindError::Encoding(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchCriteria::default().to_string(), "class=*, title=*");

        let criteria = SearchCriteria {
            class_name: TextCriterion::Exact("Edit".to_string()),
            window_name: TextCriterion::Exact("Notes".to_string()),
        };
        assert_eq!(criteria.to_string(), "class=\"Edit\", title=\"Notes\"");
    }
}
