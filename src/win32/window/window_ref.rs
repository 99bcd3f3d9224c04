use std::hash::{Hash, Hasher};

use windows::Win32::Foundation::HWND;

use crate::error::FindError;
use crate::win32::api::window::get_window_title;

/// Borrowed reference to a live OS window. The handle is owned by the OS
/// and stays valid only while the underlying window exists; a null handle
/// is the "no window" sentinel.
#[derive(Debug, Clone, Copy, Eq)]
pub struct WindowRef {
    pub hwnd: HWND,
}

impl Hash for WindowRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hwnd.0.hash(state);
    }
}

impl PartialEq for WindowRef {
    fn eq(&self, other: &Self) -> bool {
        self.hwnd.0 == other.hwnd.0
    }
}

impl From<HWND> for WindowRef {
    fn from(hwnd: HWND) -> Self {
        WindowRef { hwnd }
    }
}

impl From<isize> for WindowRef {
    fn from(hwnd: isize) -> Self {
        HWND(hwnd).into()
    }
}

impl WindowRef {
    pub fn new(hwnd: HWND) -> WindowRef {
        WindowRef { hwnd }
    }

    pub fn is_null(&self) -> bool {
        self.hwnd.0 == 0
    }

    pub fn as_raw(&self) -> isize {
        self.hwnd.0
    }

    /// Reads the window's title. See
    /// [`get_window_title`](crate::win32::api::window::get_window_title)
    /// for the empty-title contract.
    pub fn title(&self) -> Result<String, FindError> {
        get_window_title(self.hwnd)
    }
}
