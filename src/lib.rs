//! Locate Win32 windows and their controls.
//!
//! `winfind` is a thin safe layer over the `user32` window-query entry
//! points: `EnumWindows`, `GetWindowTextW`, `FindWindowW` and
//! `FindWindowExW`. It resolves window handles from class-name/title
//! criteria, enumerates the top-level window set with a caller-supplied
//! visitor, and reads window titles through a fixed-size UTF-16 buffer.
//!
//! Handles are borrowed from the OS: a returned [`WindowRef`] denotes a
//! window that existed at the moment of the call and may vanish right
//! after. The crate performs no window manipulation and owns no state.
//!
//! The search types and the error taxonomy are portable; everything that
//! touches the OS is compiled on Windows only.

pub mod criteria;
pub mod error;
#[cfg(windows)]
pub mod locator;
#[cfg(windows)]
pub mod win32;

pub use criteria::{SearchCriteria, TextCriterion};
pub use error::FindError;
#[cfg(windows)]
pub use locator::{enumerate_windows, find_child_window, find_window, find_window_by_title};
#[cfg(windows)]
pub use win32::api::window::TITLE_BUFFER_LEN;
#[cfg(windows)]
pub use win32::window::window_ref::WindowRef;
