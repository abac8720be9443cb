// ── Demo window ───────────────────────────────────────────────────────────────
//
// Responsibilities in this file:
//   • Register a window class through the bindings.
//   • Create a top-level window, show it, log its client area and the DPI.
//   • Run the message loop until WM_QUIT and return its exit code.
//   • Release the window and the class on every exit path, not just success.
//   • Expose a safe error-dialog helper for use by main().
//
// Everything goes through the crate's own forwarding functions, so the demo
// doubles as an end-to-end check of the bindings.

#![allow(unsafe_code)]

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK},
    },
};

use super::{gdi32, kernel32, user32};
use crate::{
    config::DemoConfig,
    consts::{
        COLOR_WINDOW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, IDC_ARROW, IDI_APPLICATION,
        LOGPIXELSX, PM_REMOVE, SW_SHOWDEFAULT, WM_CLOSE, WM_DESTROY, WM_QUIT,
        WS_OVERLAPPEDWINDOW, WS_VISIBLE,
    },
    error::Result,
    types::{Hbrush, Hinstance, Hmenu, Hwnd, LParam, LResult, Msg, WParam, WndClassEx},
    wide::WideString,
};

// ── Public API ────────────────────────────────────────────────────────────────

/// Register the demo window class, create the window, and drive the message
/// loop until the window is closed.
///
/// Returns the exit code carried by `WM_QUIT`.
pub fn run(config: &DemoConfig) -> Result<i32> {
    let t0 = std::time::Instant::now();

    let hinstance = kernel32::get_module_handle(None)?;
    let class_name = WideString::new(&config.class_name)?;
    let title = WideString::new(&config.title)?;

    // Declaration order matters: the window guard drops before the class guard.
    let class = register_class(hinstance, &class_name)?;
    let window = LiveWindow(create_window(hinstance, &class_name, &title, config, Hwnd::null())?);
    let hwnd = window.0;

    // Previous visibility is irrelevant for a freshly created window.
    let _ = user32::show_window(hwnd, SW_SHOWDEFAULT);
    user32::update_window(hwnd)?;

    log::debug!("window visible in {:.1} ms", t0.elapsed().as_secs_f64() * 1000.0);
    log_surface(hwnd);

    if config.auto_close {
        log::info!("auto_close set, posting WM_CLOSE");
        user32::post_message(hwnd, WM_CLOSE, 0, 0)?;
    }

    let exit_code = message_loop()?;

    // The window is gone by now (WM_QUIT is only posted from WM_DESTROY or
    // after a failed DestroyWindow), so the class can be released.
    window.disarm();
    class.unregister()?;

    log::info!("message loop finished, exit code {exit_code}");
    Ok(exit_code)
}

/// Show a modal error dialog with the given message.
///
/// Safe to call from any context; performs the UTF-16 conversion internally.
/// Used by `main()` when `run()` returns an error.
pub fn show_error_dialog(message: &str) {
    let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: msg_wide is a valid null-terminated UTF-16 string that remains
    // allocated for the duration of the MessageBoxW call; the title is a
    // static literal.  HWND::default() (null) means the dialog has no owner.
    // Return value (button pressed) is intentionally unused for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            w!("winbind demo: fatal error"),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Cleanup guards ────────────────────────────────────────────────────────────

/// A registered window class.  Dropping it unregisters the class.
struct RegisteredClass<'a> {
    class_name: &'a WideString,
    hinstance: Hinstance,
}

impl RegisteredClass<'_> {
    /// Unregister now and report the outcome instead of only logging it.
    fn unregister(self) -> Result<()> {
        let result = user32::unregister_class(self.class_name, self.hinstance);
        std::mem::forget(self);
        result
    }
}

impl Drop for RegisteredClass<'_> {
    fn drop(&mut self) {
        match user32::unregister_class(self.class_name, self.hinstance) {
            Ok(()) => log::debug!("unregistered class {}", self.class_name),
            Err(e) => log::warn!("{e}"),
        }
    }
}

/// A window that still exists.  Dropping it destroys the window.
struct LiveWindow(Hwnd);

impl LiveWindow {
    /// The window was already destroyed through the message loop.
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for LiveWindow {
    fn drop(&mut self) {
        if let Err(e) = user32::destroy_window(self.0) {
            log::warn!("{e}");
            return;
        }
        // WM_DESTROY posted a quit message that no loop will ever retrieve.
        let mut msg = Msg::default();
        while user32::peek_message(&mut msg, Hwnd::null(), WM_QUIT, WM_QUIT, PM_REMOVE) {}
    }
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class<'a>(
    hinstance: Hinstance,
    class_name: &'a WideString,
) -> Result<RegisteredClass<'a>> {
    let icon = user32::load_icon(Hinstance::null(), IDI_APPLICATION)?;
    let cursor = user32::load_cursor(Hinstance::null(), IDC_ARROW)?;

    let wndclass = WndClassEx {
        // CS_HREDRAW | CS_VREDRAW: repaint on resize.
        style: CS_HREDRAW | CS_VREDRAW,
        wnd_proc: Some(wnd_proc),
        instance: hinstance,
        icon,
        cursor,
        background: Hbrush::from_sys_color(COLOR_WINDOW + 1),
        class_name: class_name.as_ptr(),
        icon_sm: icon,
        ..Default::default()
    };

    // SAFETY: class_name outlives this call and menu_name is null.  wnd_proc
    // only forwards to the bindings and never dereferences lparam itself.
    let atom = unsafe { user32::register_class_ex(&wndclass) }?;
    log::debug!("registered class {class_name} as atom {atom:#06x}");

    Ok(RegisteredClass {
        class_name,
        hinstance,
    })
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(
    hinstance: Hinstance,
    class_name: &WideString,
    title: &WideString,
    config: &DemoConfig,
    parent: Hwnd,
) -> Result<Hwnd> {
    // Null parent: top-level window.  Null menu, no creation data.
    user32::create_window_ex(
        0,
        class_name,
        title,
        WS_OVERLAPPEDWINDOW | WS_VISIBLE,
        CW_USEDEFAULT,
        CW_USEDEFAULT,
        config.width,
        config.height,
        parent,
        Hmenu::null(),
        hinstance,
        std::ptr::null(),
    )
}

/// Log the client size and the DPI of the window's DC.  Failures here are
/// reported but never abort the demo.
fn log_surface(hwnd: Hwnd) {
    match user32::get_client_rect(hwnd) {
        Ok(rect) => log::info!("client area {}x{}", rect.width(), rect.height()),
        Err(e) => log::warn!("{e}"),
    }

    match user32::get_dc(hwnd) {
        Ok(hdc) => {
            log::info!("device DPI {}", gdi32::get_device_caps(hdc, LOGPIXELSX));
            if !user32::release_dc(hwnd, hdc) {
                log::warn!("ReleaseDC did not release the window DC");
            }
        }
        Err(e) => log::warn!("{e}"),
    }
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop() -> Result<i32> {
    let mut msg = Msg::default();

    // Null hwnd retrieves messages for every window on this thread; 0,0 filter
    // accepts all.  Returns false once WM_QUIT is retrieved.
    while user32::get_message(&mut msg, Hwnd::null(), 0, 0)? {
        // Whether a character message was generated is irrelevant here.
        let _ = user32::translate_message(&msg);
        // SAFETY: msg was populated by a successful GetMessageW call.
        // The window procedure's LRESULT is intentionally unused.
        let _ = unsafe { user32::dispatch_message(&msg) };
    }

    // WM_QUIT carries the PostQuitMessage exit code in WPARAM.
    Ok(msg.wparam as i32)
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
    match msg {
        WM_CLOSE => {
            // DestroyWindow triggers WM_DESTROY, which posts WM_QUIT.  If it
            // fails no WM_DESTROY follows, so quit with code 1 instead of
            // leaving the loop blocked forever.
            if let Err(e) = user32::destroy_window(hwnd) {
                log::error!("{e}");
                user32::post_quit_message(1);
            }
            0
        }

        WM_DESTROY => {
            user32::post_quit_message(0);
            0
        }

        // Default processing for all unhandled messages.
        // SAFETY: hwnd and message parameters are valid, provided by Windows.
        _ => user32::def_window_proc(hwnd, msg, wparam, lparam),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HWND_MESSAGE;

    /// ERROR_INVALID_WINDOW_HANDLE
    const INVALID_WINDOW_HANDLE: u32 = 1400;

    fn test_config() -> DemoConfig {
        DemoConfig {
            width: 100,
            height: 100,
            ..Default::default()
        }
    }

    fn message_parent() -> Hwnd {
        Hwnd(HWND_MESSAGE as *mut std::ffi::c_void)
    }

    #[test]
    fn failed_creation_releases_the_class() {
        let hinstance = kernel32::get_module_handle(None).expect("module");
        let class_name = WideString::new("winbindGuardedClass").expect("name");
        let title = WideString::new("guarded").expect("title");
        let bogus_parent = Hwnd(0x7FFF_0000 as *mut std::ffi::c_void);

        {
            let _class = register_class(hinstance, &class_name).expect("register");
            let err = create_window(hinstance, &class_name, &title, &test_config(), bogus_parent)
                .expect_err("bogus parent");
            assert_eq!(err.code(), Some(INVALID_WINDOW_HANDLE));
        }

        // The guard unregistered the class, so it registers cleanly again.
        let class = register_class(hinstance, &class_name).expect("re-register");
        class.unregister().expect("unregister");
    }

    #[test]
    fn dropped_window_leaves_no_quit_message_behind() {
        let hinstance = kernel32::get_module_handle(None).expect("module");
        let class_name = WideString::new("winbindDroppedWindowClass").expect("name");
        let title = WideString::new("dropped").expect("title");

        let class = register_class(hinstance, &class_name).expect("register");
        let hwnd = create_window(hinstance, &class_name, &title, &test_config(), message_parent())
            .expect("message-only window");
        drop(LiveWindow(hwnd));

        let mut msg = Msg::default();
        assert!(!user32::peek_message(&mut msg, Hwnd::null(), WM_QUIT, WM_QUIT, PM_REMOVE));
        assert!(user32::destroy_window(hwnd).is_err());
        class.unregister().expect("unregister");
    }

    #[test]
    fn failed_destroy_on_close_still_quits() {
        // SAFETY: wnd_proc never dereferences its arguments; the bogus handle
        // only reaches DestroyWindow, which rejects it.
        let bogus = Hwnd(0x7FFF_0000 as *mut std::ffi::c_void);
        assert_eq!(unsafe { wnd_proc(bogus, WM_CLOSE, 0, 0) }, 0);

        let mut msg = Msg::default();
        assert!(!user32::get_message(&mut msg, Hwnd::null(), 0, 0).expect("get"));
        assert_eq!(msg.message, WM_QUIT);
        assert_eq!(msg.wparam, 1);
    }
}
