// ── user32.dll ────────────────────────────────────────────────────────────────
//
// One function per entry point, arguments in native order.  Structures are
// passed by pointer through the layout mirrors in `crate::types`; the casts
// are justified by the compile-time checks in `abi`.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HINSTANCE, HWND, LPARAM, RECT, WPARAM},
        Graphics::Gdi::{GetDC, ReleaseDC, UpdateWindow, HDC},
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetClientRect,
            GetDesktopWindow, GetMessageW, LoadCursorW, LoadIconW, PeekMessageW, PostMessageW,
            PostQuitMessage, RegisterClassExW, SendMessageW, SetCursor, ShowWindow,
            TranslateMessage, UnregisterClassW, HCURSOR, HMENU, MSG, PEEK_MESSAGE_REMOVE_TYPE,
            SHOW_WINDOW_CMD, WINDOW_EX_STYLE, WINDOW_STYLE, WNDCLASSEXW,
        },
    },
};

use super::abi::{last_error, Checked};
use crate::{
    error::{Result, WinbindError},
    types::{
        make_int_resource, Atom, Hcursor, Hdc, Hicon, Hinstance, Hmenu, Hwnd, LParam, LResult,
        Msg, Rect, WParam, WndClassEx,
    },
    wide::WideString,
};

// ── Window classes ────────────────────────────────────────────────────────────

/// `RegisterClassExW`.
///
/// # Safety
///
/// `wndclass.class_name` and `wndclass.menu_name` must each be null, a
/// `make_int_resource` value, or a NUL-terminated UTF-16 string alive for the
/// duration of the call.  `wndclass.wnd_proc` will be called by the OS for
/// every window of the class and must uphold the window-procedure contract.
pub unsafe fn register_class_ex(wndclass: &WndClassEx) -> Result<Atom> {
    // SAFETY: WndClassEx is a layout mirror of WNDCLASSEXW; the caller
    // guarantees the embedded pointers are valid.
    unsafe { RegisterClassExW(wndclass as *const WndClassEx as *const WNDCLASSEXW) }
        .checked("RegisterClassExW")
}

/// `UnregisterClassW`.  Fails while windows of the class still exist.
pub fn unregister_class(class_name: &WideString, instance: Hinstance) -> Result<()> {
    // SAFETY: class_name is a live NUL-terminated string borrowed for the call.
    unsafe { UnregisterClassW(PCWSTR(class_name.as_ptr()), HINSTANCE::from(instance)) }
        .checked("UnregisterClassW")
}

// ── Windows ───────────────────────────────────────────────────────────────────

/// `CreateWindowExW`.
///
/// `param` is handed to the window procedure in `CREATESTRUCTW::lpCreateParams`
/// and is never dereferenced by the OS.
#[allow(clippy::too_many_arguments)]
pub fn create_window_ex(
    ex_style: u32,
    class_name: &WideString,
    window_name: &WideString,
    style: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    parent: Hwnd,
    menu: Hmenu,
    instance: Hinstance,
    param: *const c_void,
) -> Result<Hwnd> {
    // SAFETY: both strings are live NUL-terminated UTF-16 borrowed for the
    // call.  Handle arguments are validated by the OS, which fails the call
    // (rather than faulting) on stale or foreign handles.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(ex_style),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(window_name.as_ptr()),
            WINDOW_STYLE(style),
            x,
            y,
            width,
            height,
            HWND::from(parent),
            HMENU::from(menu),
            HINSTANCE::from(instance),
            (!param.is_null()).then_some(param),
        )
    }
    .checked("CreateWindowExW")?;

    Ok(Hwnd::from(hwnd))
}

/// `DestroyWindow`.  Must be called on the thread that created the window.
pub fn destroy_window(hwnd: Hwnd) -> Result<()> {
    // SAFETY: invalid handles are rejected by the OS with
    // ERROR_INVALID_WINDOW_HANDLE.
    unsafe { DestroyWindow(HWND::from(hwnd)) }.checked("DestroyWindow")
}

/// `ShowWindow`.  Returns whether the window was previously visible.
pub fn show_window(hwnd: Hwnd, cmd_show: i32) -> bool {
    // SAFETY: handle validated by the OS.
    unsafe { ShowWindow(HWND::from(hwnd), SHOW_WINDOW_CMD(cmd_show)) }.as_bool()
}

/// `UpdateWindow`: send `WM_PAINT` now if the update region is not empty.
pub fn update_window(hwnd: Hwnd) -> Result<()> {
    // SAFETY: handle validated by the OS.
    unsafe { UpdateWindow(HWND::from(hwnd)) }.checked("UpdateWindow")
}

/// `GetDesktopWindow`.  Never fails.
pub fn get_desktop_window() -> Hwnd {
    // SAFETY: no arguments.
    Hwnd::from(unsafe { GetDesktopWindow() })
}

/// `GetClientRect`.  `left` and `top` are always zero.
pub fn get_client_rect(hwnd: Hwnd) -> Result<Rect> {
    let mut rect = Rect::default();
    // SAFETY: Rect is a layout mirror of RECT and outlives the call.
    unsafe { GetClientRect(HWND::from(hwnd), &mut rect as *mut Rect as *mut RECT) }
        .checked("GetClientRect")?;
    Ok(rect)
}

// ── Window procedures ─────────────────────────────────────────────────────────

/// `DefWindowProcW`: default processing for messages a window procedure does
/// not handle.
///
/// # Safety
///
/// `wparam`/`lparam` must be valid for `msg`; several messages carry pointers
/// in `lparam` that the default procedure dereferences.
pub unsafe fn def_window_proc(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
    // SAFETY: forwarded under the caller's guarantee.
    unsafe { DefWindowProcW(HWND::from(hwnd), msg, WPARAM(wparam), LPARAM(lparam)) }.0
}

// ── Message queue ─────────────────────────────────────────────────────────────

/// `PostQuitMessage`: post `WM_QUIT` with `exit_code` to this thread's queue.
pub fn post_quit_message(exit_code: i32) {
    // SAFETY: no pointer arguments; always succeeds.
    unsafe { PostQuitMessage(exit_code) }
}

/// `GetMessageW`: block until a message arrives.
///
/// Returns `Ok(true)` for an ordinary message, `Ok(false)` once `WM_QUIT` is
/// retrieved (its exit code is in `msg.wparam`), and an error when the native
/// call returns -1 (e.g. an invalid `hwnd` filter).
pub fn get_message(msg: &mut Msg, hwnd: Hwnd, filter_min: u32, filter_max: u32) -> Result<bool> {
    // SAFETY: Msg is a layout mirror of MSG; &mut msg is valid for writes.
    let ret = unsafe {
        GetMessageW(msg as *mut Msg as *mut MSG, HWND::from(hwnd), filter_min, filter_max)
    };

    match ret.0 {
        -1 => Err(last_error("GetMessageW")),
        0 => Ok(false),
        _ => Ok(true),
    }
}

/// `PeekMessageW`: non-blocking poll.  Returns `true` if `msg` was filled.
pub fn peek_message(
    msg: &mut Msg,
    hwnd: Hwnd,
    filter_min: u32,
    filter_max: u32,
    remove: u32,
) -> bool {
    // SAFETY: Msg is a layout mirror of MSG; &mut msg is valid for writes.
    unsafe {
        PeekMessageW(
            msg as *mut Msg as *mut MSG,
            HWND::from(hwnd),
            filter_min,
            filter_max,
            PEEK_MESSAGE_REMOVE_TYPE(remove),
        )
    }
    .as_bool()
}

/// `TranslateMessage`: turn virtual-key messages into character messages.
/// Returns `true` if a character message was posted.
pub fn translate_message(msg: &Msg) -> bool {
    // SAFETY: Msg is a layout mirror of MSG; read-only for the call.
    unsafe { TranslateMessage(msg as *const Msg as *const MSG) }.as_bool()
}

/// `DispatchMessageW`: hand `msg` to its window procedure.
///
/// # Safety
///
/// `msg` should come from `get_message`/`peek_message`.  A fabricated message
/// may carry pointers (e.g. a `WM_TIMER` callback in `lparam`) that the OS or
/// the window procedure will follow.
pub unsafe fn dispatch_message(msg: &Msg) -> LResult {
    // SAFETY: forwarded under the caller's guarantee.
    unsafe { DispatchMessageW(msg as *const Msg as *const MSG) }.0
}

/// `SendMessageW`: call the window procedure synchronously.
///
/// # Safety
///
/// `wparam`/`lparam` must be valid for `msg`; pointer-carrying messages are
/// dereferenced by the receiver.
pub unsafe fn send_message(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> LResult {
    // SAFETY: forwarded under the caller's guarantee.
    unsafe { SendMessageW(HWND::from(hwnd), msg, WPARAM(wparam), LPARAM(lparam)) }.0
}

/// `PostMessageW`: queue a message and return immediately.
pub fn post_message(hwnd: Hwnd, msg: u32, wparam: WParam, lparam: LParam) -> Result<()> {
    // SAFETY: the OS refuses to post system messages that carry pointers
    // (ERROR_MESSAGE_SYNC_ONLY), so no pointer is followed here.
    unsafe { PostMessageW(HWND::from(hwnd), msg, WPARAM(wparam), LPARAM(lparam)) }
        .checked("PostMessageW")
}

// ── Icons and cursors ─────────────────────────────────────────────────────────

/// `LoadIconW` by numeric resource id.  Pass a null instance and an `IDI_*`
/// constant for the stock icons.
pub fn load_icon(instance: Hinstance, id: u16) -> Result<Hicon> {
    // SAFETY: make_int_resource values are recognised by the OS and never
    // dereferenced.  Shared icons need no cleanup.
    let icon = unsafe { LoadIconW(HINSTANCE::from(instance), PCWSTR(make_int_resource(id))) }
        .checked("LoadIconW")?;
    Ok(Hicon::from(icon))
}

/// `LoadCursorW` by numeric resource id.  Pass a null instance and an `IDC_*`
/// constant for the stock cursors.
pub fn load_cursor(instance: Hinstance, id: u16) -> Result<Hcursor> {
    // SAFETY: as load_icon.
    let cursor = unsafe { LoadCursorW(HINSTANCE::from(instance), PCWSTR(make_int_resource(id))) }
        .checked("LoadCursorW")?;
    Ok(Hcursor::from(cursor))
}

/// `SetCursor`.  Returns the previous cursor (possibly null).
pub fn set_cursor(cursor: Hcursor) -> Hcursor {
    // SAFETY: a null cursor hides the pointer; other handles are validated.
    Hcursor::from(unsafe { SetCursor(HCURSOR::from(cursor)) })
}

// ── Device contexts ───────────────────────────────────────────────────────────

/// `GetDC`.  A null `hwnd` yields the screen DC.  Pair with `release_dc`.
///
/// `GetDC` does not set the last error, so failures carry code 0.
pub fn get_dc(hwnd: Hwnd) -> Result<Hdc> {
    // SAFETY: handle validated by the OS.
    let hdc = unsafe { GetDC(HWND::from(hwnd)) };
    if hdc.0.is_null() {
        return Err(WinbindError::Win32 {
            function: "GetDC",
            code: 0,
        });
    }
    Ok(Hdc::from(hdc))
}

/// `ReleaseDC`.  Returns `true` if the DC was released.
pub fn release_dc(hwnd: Hwnd, hdc: Hdc) -> bool {
    // SAFETY: both handles validated by the OS.
    unsafe { ReleaseDC(HWND::from(hwnd), HDC::from(hdc)) == 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::consts::{
        HWND_MESSAGE, IDC_ARROW, IDC_IBEAM, IDI_APPLICATION, PM_REMOVE, SW_HIDE, WM_QUIT, WM_USER,
    };

    /// ERROR_CLASS_ALREADY_EXISTS
    const CLASS_ALREADY_EXISTS: u32 = 1410;

    thread_local! {
        static RECEIVED: Cell<usize> = const { Cell::new(0) };
    }

    // WM_USER adds wparam to RECEIVED; WM_USER + 1 answers 42.
    unsafe extern "system" fn counting_proc(
        hwnd: Hwnd,
        msg: u32,
        wparam: WParam,
        lparam: LParam,
    ) -> LResult {
        match msg {
            WM_USER => {
                RECEIVED.with(|n| n.set(n.get() + wparam));
                0
            }
            m if m == WM_USER + 1 => 42,
            _ => def_window_proc(hwnd, msg, wparam, lparam),
        }
    }

    fn counting_class(name: &WideString, instance: Hinstance) -> Result<Atom> {
        let wndclass = WndClassEx {
            wnd_proc: Some(counting_proc),
            instance,
            class_name: name.as_ptr(),
            ..Default::default()
        };
        // SAFETY: name outlives the call; counting_proc never reads lparam.
        unsafe { register_class_ex(&wndclass) }
    }

    /// ERROR_INVALID_WINDOW_HANDLE
    const INVALID_WINDOW_HANDLE: u32 = 1400;

    fn bogus_hwnd() -> Hwnd {
        Hwnd(0x7FFF_0000 as *mut c_void)
    }

    #[test]
    fn stock_icon_and_cursor_load() {
        assert!(!load_icon(Hinstance::null(), IDI_APPLICATION).expect("icon").is_null());
        assert!(!load_cursor(Hinstance::null(), IDC_ARROW).expect("cursor").is_null());
    }

    #[test]
    fn unknown_stock_icon_fails() {
        assert!(load_icon(Hinstance::null(), 1).is_err());
    }

    #[test]
    fn desktop_window_has_a_client_area() {
        let desktop = get_desktop_window();
        assert!(!desktop.is_null());
        let rect = get_client_rect(desktop).expect("desktop rect");
        assert_eq!((rect.left, rect.top), (0, 0));
        assert!(rect.width() > 0 && rect.height() > 0);
    }

    #[test]
    fn client_rect_of_invalid_window_fails_with_code() {
        let err = get_client_rect(bogus_hwnd()).expect_err("invalid hwnd");
        assert_eq!(err.code(), Some(INVALID_WINDOW_HANDLE));
    }

    #[test]
    fn destroy_invalid_window_fails_with_code() {
        let err = destroy_window(bogus_hwnd()).expect_err("invalid hwnd");
        assert_eq!(err.code(), Some(INVALID_WINDOW_HANDLE));
    }

    #[test]
    fn screen_dc_roundtrip() {
        let hdc = get_dc(Hwnd::null()).expect("screen dc");
        assert!(release_dc(Hwnd::null(), hdc));
    }

    #[test]
    fn quit_message_ends_get_message_with_exit_code() {
        let mut msg = Msg::default();
        post_quit_message(3);
        assert!(!get_message(&mut msg, Hwnd::null(), 0, 0).expect("get"));
        assert_eq!(msg.message, WM_QUIT);
        assert_eq!(msg.wparam, 3);
    }

    #[test]
    fn empty_queue_peeks_nothing() {
        let mut msg = Msg::default();
        // Fresh test thread: no windows, nothing posted.
        assert!(!peek_message(&mut msg, Hwnd::null(), 0, 0, PM_REMOVE));
    }

    #[test]
    fn message_only_window_lifecycle() {
        let instance = crate::platform::win32::get_module_handle(None).expect("module");
        let name = WideString::new("winbindCountingClass").expect("name");
        let title = WideString::new("counting").expect("title");
        counting_class(&name, instance).expect("register");

        let hwnd = create_window_ex(
            0,
            &name,
            &title,
            0,
            0,
            0,
            0,
            0,
            Hwnd(HWND_MESSAGE as *mut c_void),
            Hmenu::null(),
            instance,
            std::ptr::null(),
        )
        .expect("create");
        assert!(!hwnd.is_null());

        // Never shown: previous visibility is false.
        assert!(!show_window(hwnd, SW_HIDE));
        update_window(hwnd).expect("update");

        post_message(hwnd, WM_USER, 5, 0).expect("post");
        let mut msg = Msg::default();
        assert!(peek_message(&mut msg, hwnd, WM_USER, WM_USER, PM_REMOVE));
        assert_eq!((msg.message, msg.wparam), (WM_USER, 5));
        // Not a key message: nothing to translate.
        assert!(!translate_message(&msg));
        // SAFETY: msg came from PeekMessageW and targets our own window.
        unsafe { dispatch_message(&msg) };
        assert_eq!(RECEIVED.with(Cell::get), 5);

        // SAFETY: hwnd is live; counting_proc ignores lparam.
        assert_eq!(unsafe { send_message(hwnd, WM_USER + 1, 0, 0) }, 42);

        destroy_window(hwnd).expect("destroy");
        unregister_class(&name, instance).expect("unregister");
    }

    #[test]
    fn duplicate_class_registration_reports_class_exists() {
        let instance = crate::platform::win32::get_module_handle(None).expect("module");
        let name = WideString::new("winbindDuplicateClass").expect("name");
        counting_class(&name, instance).expect("first registration");

        let err = counting_class(&name, instance).expect_err("second registration");
        assert_eq!(err.code(), Some(CLASS_ALREADY_EXISTS));
        unregister_class(&name, instance).expect("unregister");
    }

    #[test]
    fn set_cursor_returns_previous() {
        let arrow = load_cursor(Hinstance::null(), IDC_ARROW).expect("arrow");
        let ibeam = load_cursor(Hinstance::null(), IDC_IBEAM).expect("ibeam");
        set_cursor(arrow);
        assert_eq!(set_cursor(ibeam), arrow);
        assert_eq!(set_cursor(arrow), ibeam);
    }
}
