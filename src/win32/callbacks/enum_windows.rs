use windows::Win32::Foundation::{BOOL, HWND, LPARAM};

use crate::win32::window::window_ref::WindowRef;

/// Visitor invoked once per top-level window. Returning `true` continues
/// the enumeration, `false` stops it.
pub(crate) type EnumWindowsVisitor<'a> = &'a mut dyn FnMut(WindowRef) -> bool;

/// Trampoline registered with `EnumWindows`. `param` carries a pointer to
/// the visitor living on the enumerating caller's stack, valid for the
/// duration of the native call only.
pub(crate) extern "system" fn enum_windows_callback(hwnd: HWND, param: LPARAM) -> BOOL {
    let visitor = unsafe { &mut *(param.0 as *mut EnumWindowsVisitor) };
    visitor(WindowRef::new(hwnd)).into()
}
