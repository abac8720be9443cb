// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module in the crate where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Files are split by the DLL that exports the entry point.  Functions whose
// arguments let the OS follow caller-supplied pointers are `unsafe fn`; the
// rest validate their handles in the kernel and are safe to call.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

mod abi; // layout checks, handle conversions, failure sentinels

pub mod gdi32;
pub mod kernel32;
pub mod user32;
pub mod window; // demo: class, window, message loop

pub use gdi32::{choose_pixel_format, get_device_caps, get_stock_object, set_pixel_format, swap_buffers};
pub use kernel32::get_module_handle;
pub use user32::{
    create_window_ex, def_window_proc, destroy_window, dispatch_message, get_client_rect, get_dc,
    get_desktop_window, get_message, load_cursor, load_icon, peek_message, post_message,
    post_quit_message, register_class_ex, release_dc, send_message, set_cursor, show_window,
    translate_message, unregister_class, update_window,
};
