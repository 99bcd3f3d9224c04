use widestring::U16CStr;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, SetLastError, ERROR_INVALID_PARAMETER, HWND, LPARAM, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, FindWindowExW, FindWindowW, GetWindowTextW};

use crate::error::FindError;
use crate::win32::callbacks::enum_windows::{enum_windows_callback, EnumWindowsVisitor};
use crate::win32::window::window_ref::WindowRef;

/// Capacity, in UTF-16 code units, of the buffer used to read window
/// titles. Longer titles are truncated, never an error.
pub const TITLE_BUFFER_LEN: usize = 200;

pub(crate) fn last_os_error() -> FindError {
    match unsafe { GetLastError() } {
        WIN32_ERROR(0) => FindError::Os {
            code: ERROR_INVALID_PARAMETER.0,
        },
        WIN32_ERROR(code) => FindError::Os { code },
    }
}

pub fn enum_windows(mut visit: impl FnMut(WindowRef) -> bool) -> Result<(), FindError> {
    let mut stopped = false;
    let mut visitor: EnumWindowsVisitor = &mut |window| {
        let keep_going = visit(window);
        stopped |= !keep_going;
        keep_going
    };
    let lparam = LPARAM(&mut visitor as *mut EnumWindowsVisitor as isize);

    // EnumWindows reports failure when the callback stops the enumeration,
    // so the stop signal recorded by the visitor takes precedence.
    match unsafe { EnumWindows(Some(enum_windows_callback), lparam) } {
        Ok(()) => Ok(()),
        Err(_) if stopped => Ok(()),
        Err(_) => Err(last_os_error()),
    }
}

/// Copies up to `buf.len() - 1` UTF-16 code units of the window's title
/// into `buf` (the native call NUL-terminates) and returns the copied
/// length.
///
/// A zero-length result is ambiguous at the native level: the last-error
/// slot is cleared before the call, and a zero return is an error only
/// when the native layer attached a code; otherwise it is success with an
/// empty title. Callers needing to tell an empty title from a dead window
/// must check window existence separately.
pub fn get_window_text(hwnd: HWND, buf: &mut [u16]) -> Result<usize, FindError> {
    unsafe { SetLastError(WIN32_ERROR(0)) };
    let len = unsafe { GetWindowTextW(hwnd, buf) };
    if len == 0 {
        return match unsafe { GetLastError() } {
            WIN32_ERROR(0) => Ok(0),
            WIN32_ERROR(code) => Err(FindError::Os { code }),
        };
    }
    Ok(len as usize)
}

pub fn get_window_title(hwnd: HWND) -> Result<String, FindError> {
    let mut buf = [0u16; TITLE_BUFFER_LEN];
    let len = get_window_text(hwnd, &mut buf)?;
    Ok(String::from_utf16_lossy(&buf[..len]))
}

pub fn find_window_handle(class_name: Option<&U16CStr>, window_name: Option<&U16CStr>) -> HWND {
    let class_name = class_name.map_or(PCWSTR::null(), |s| PCWSTR(s.as_ptr()));
    let window_name = window_name.map_or(PCWSTR::null(), |s| PCWSTR(s.as_ptr()));
    unsafe { FindWindowW(class_name, window_name) }
}

pub fn find_child_window_handle(
    parent: HWND,
    after: HWND,
    class_name: Option<&U16CStr>,
    window_name: Option<&U16CStr>,
) -> HWND {
    let class_name = class_name.map_or(PCWSTR::null(), |s| PCWSTR(s.as_ptr()));
    let window_name = window_name.map_or(PCWSTR::null(), |s| PCWSTR(s.as_ptr()));
    unsafe { FindWindowExW(parent, after, class_name, window_name) }
}
