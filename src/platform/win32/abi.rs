// ── ABI bridge to the `windows` crate ─────────────────────────────────────────
//
// Responsibilities in this file:
//   • Prove at compile time that our layout mirrors match the native structs.
//   • Convert between our handle newtypes and the `windows` crate's.
//   • Translate every native failure sentinel into `WinbindError::Win32`.

#![allow(unsafe_code)]

use std::mem::{offset_of, size_of};

use windows::Win32::{
    Foundation::{GetLastError, BOOL, HANDLE, HINSTANCE, HWND, POINT, RECT},
    Graphics::{
        Gdi::{HBRUSH, HDC, HGDIOBJ},
        OpenGL::PIXELFORMATDESCRIPTOR,
    },
    UI::WindowsAndMessaging::{HCURSOR, HICON, HMENU, MSG, WNDCLASSEXW},
};

use crate::{
    error::WinbindError,
    types::{
        Handle, Hbrush, Hcursor, Hdc, Hgdiobj, Hicon, Hinstance, Hmenu, Hwnd, Msg,
        PixelFormatDescriptor, Point, Rect, WndClassEx,
    },
};

// ── Layout checks ─────────────────────────────────────────────────────────────
//
// The forwarding functions cast `&Msg` to `*const MSG` and so on.  These
// assertions are what make those casts sound.

const _: () = {
    assert!(size_of::<Point>() == size_of::<POINT>());
    assert!(size_of::<Rect>() == size_of::<RECT>());

    assert!(size_of::<Msg>() == size_of::<MSG>());
    assert!(offset_of!(Msg, message) == offset_of!(MSG, message));
    assert!(offset_of!(Msg, wparam) == offset_of!(MSG, wParam));
    assert!(offset_of!(Msg, lparam) == offset_of!(MSG, lParam));
    assert!(offset_of!(Msg, time) == offset_of!(MSG, time));
    assert!(offset_of!(Msg, pt) == offset_of!(MSG, pt));

    assert!(size_of::<WndClassEx>() == size_of::<WNDCLASSEXW>());
    assert!(offset_of!(WndClassEx, wnd_proc) == offset_of!(WNDCLASSEXW, lpfnWndProc));
    assert!(offset_of!(WndClassEx, instance) == offset_of!(WNDCLASSEXW, hInstance));
    assert!(offset_of!(WndClassEx, background) == offset_of!(WNDCLASSEXW, hbrBackground));
    assert!(offset_of!(WndClassEx, class_name) == offset_of!(WNDCLASSEXW, lpszClassName));
    assert!(offset_of!(WndClassEx, icon_sm) == offset_of!(WNDCLASSEXW, hIconSm));

    assert!(size_of::<PixelFormatDescriptor>() == size_of::<PIXELFORMATDESCRIPTOR>());
    assert!(
        offset_of!(PixelFormatDescriptor, layer_mask)
            == offset_of!(PIXELFORMATDESCRIPTOR, dwLayerMask)
    );
};

// ── Handle conversions ────────────────────────────────────────────────────────

macro_rules! bridge {
    ($($ours:ident <=> $theirs:ident;)*) => {
        $(
            impl From<$ours> for $theirs {
                fn from(h: $ours) -> Self {
                    Self(h.0)
                }
            }

            impl From<$theirs> for $ours {
                fn from(h: $theirs) -> Self {
                    Self(h.0)
                }
            }
        )*
    };
}

bridge! {
    Handle <=> HANDLE;
    Hwnd <=> HWND;
    Hdc <=> HDC;
    Hinstance <=> HINSTANCE;
    Hicon <=> HICON;
    Hcursor <=> HCURSOR;
    Hbrush <=> HBRUSH;
    Hgdiobj <=> HGDIOBJ;
    Hmenu <=> HMENU;
}

// ── Failure sentinels ─────────────────────────────────────────────────────────

/// Translate a native return value into `Result`, using the entry point's
/// failure sentinel.
///
/// Implemented both for raw returns (`BOOL`, atoms, counts) and for the
/// `windows::core::Result` the `windows` crate already builds for entry points
/// that set the last error, so call sites read the same either way.
pub(super) trait Checked<T> {
    fn checked(self, function: &'static str) -> crate::error::Result<T>;
}

impl Checked<()> for BOOL {
    fn checked(self, function: &'static str) -> crate::error::Result<()> {
        if self.as_bool() {
            Ok(())
        } else {
            Err(last_error(function))
        }
    }
}

impl<T> Checked<T> for windows::core::Result<T> {
    fn checked(self, function: &'static str) -> crate::error::Result<T> {
        self.map_err(|e| hresult_error(function, &e))
    }
}

/// `ATOM` and pixel-format indices: zero means failure.
macro_rules! zero_is_failure {
    ($($ty:ty),*) => {
        $(
            impl Checked<$ty> for $ty {
                fn checked(self, function: &'static str) -> crate::error::Result<$ty> {
                    if self == 0 {
                        Err(last_error(function))
                    } else {
                        Ok(self)
                    }
                }
            }
        )*
    };
}

zero_is_failure!(u16, i32);

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in a `WinbindError`.
///
/// Call immediately after the failing entry point: `GetLastError` reads
/// thread-local state that any subsequent API call can overwrite.
pub(super) fn last_error(function: &'static str) -> WinbindError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() }.0;
    log::debug!("{function} failed, last error {code}");
    WinbindError::Win32 { function, code }
}

/// Wrap an error the `windows` crate already captured as an HRESULT.
pub(super) fn hresult_error(function: &'static str, e: &windows::core::Error) -> WinbindError {
    let err = WinbindError::from_hresult(function, e.code().0 as u32);
    log::debug!("{function} failed: {e}");
    err
}
