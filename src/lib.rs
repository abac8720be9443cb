//! Thin, faithful bindings to the Win32 windowing entry points.
//!
//! Each function in [`platform::win32`] forwards to exactly one native entry
//! point and turns its failure sentinel into [`WinbindError`].  The structures
//! in [`types`] mirror the native layouts byte for byte.
//!
//! Only the forwarding layer is Windows-specific; the layout mirrors,
//! constants, strings and errors build on every host.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod config;
pub mod consts;
pub mod error;
pub mod platform;
pub mod types;
pub mod wide;

pub use config::DemoConfig;
pub use error::{Result, WinbindError};
pub use types::{
    make_int_resource, Atom, Handle, Hbrush, Hcursor, Hdc, Hgdiobj, Hicon, Hinstance, Hmenu, Hwnd,
    LParam, LResult, Msg, PixelFormatDescriptor, Point, Rect, WParam, WndClassEx, WndProc,
};
pub use wide::WideString;
