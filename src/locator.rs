use windows::Win32::Foundation::HWND;

use crate::criteria::{SearchCriteria, TextCriterion};
use crate::error::FindError;
use crate::win32::api::window::{enum_windows, find_child_window_handle, find_window_handle, get_window_title};
use crate::win32::window::window_ref::WindowRef;

/// Invokes `visit` once per top-level window, on the calling thread, in
/// OS-defined enumeration order. `true` continues, `false` stops;
/// stopping early is success.
pub fn enumerate_windows(visit: impl FnMut(WindowRef) -> bool) -> Result<(), FindError> {
    enum_windows(visit)
}

/// Finds the first top-level window (in enumeration order) whose title is
/// exactly `title`. Windows whose title cannot be read are skipped rather
/// than aborting the search.
pub fn find_window_by_title(title: &str) -> Result<WindowRef, FindError> {
    let criteria = SearchCriteria {
        class_name: TextCriterion::Any,
        window_name: TextCriterion::Exact(title.to_string()),
    };
    let mut found: Option<WindowRef> = None;
    enum_windows(|window| {
        let current = match get_window_title(window.hwnd) {
            Ok(current) => current,
            Err(error) => {
                log::trace!("Skipping window {:?} with unreadable title: {}", window, error);
                return true;
            }
        };
        if criteria.window_name.matches(&current) {
            found = Some(window);
            return false;
        }
        true
    })?;
    found.ok_or(FindError::NotFound(criteria))
}

/// Resolves a single top-level window matching `criteria` with one native
/// lookup. `Any` criteria act as wildcards.
pub fn find_window(criteria: &SearchCriteria) -> Result<WindowRef, FindError> {
    let class_name = criteria.class_name.to_wide()?;
    let window_name = criteria.window_name.to_wide()?;
    let hwnd = find_window_handle(class_name.as_deref(), window_name.as_deref());
    match WindowRef::new(hwnd) {
        window if window.is_null() => Err(FindError::NotFound(criteria.clone())),
        window => Ok(window),
    }
}

/// Resolves a single child window of `parent` matching `criteria`,
/// resuming the search after `after` when given. Passing the previously
/// found child as `after` steps through siblings without returning the
/// same handle twice.
pub fn find_child_window(
    parent: WindowRef,
    after: Option<WindowRef>,
    criteria: &SearchCriteria,
) -> Result<WindowRef, FindError> {
    let class_name = criteria.class_name.to_wide()?;
    let window_name = criteria.window_name.to_wide()?;
    let after = after.map_or(HWND(0), |window| window.hwnd);
    let hwnd = find_child_window_handle(parent.hwnd, after, class_name.as_deref(), window_name.as_deref());
    match WindowRef::new(hwnd) {
        window if window.is_null() => Err(FindError::NotFound(criteria.clone())),
        window => Ok(window),
    }
}
