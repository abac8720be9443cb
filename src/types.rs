// ── Native handle types and structure layout mirrors ──────────────────────────
//
// Field order and widths are dictated by the Win32 ABI and must byte-match it.
// On Windows, `platform::win32` checks the sizes against the `windows` crate's
// own definitions at compile time and passes these structures by pointer.
//
// No `unsafe` here: constructing a mirror is always safe; handing one to the
// OS is what requires care.

use std::ffi::c_void;

// ── Scalars ───────────────────────────────────────────────────────────────────

/// `WPARAM`: unsigned, pointer-sized message parameter.
pub type WParam = usize;
/// `LPARAM`: signed, pointer-sized message parameter.
pub type LParam = isize;
/// `LRESULT`: signed, pointer-sized window-procedure result.
pub type LResult = isize;
/// `ATOM` returned by class registration.
pub type Atom = u16;

/// Window procedure, as stored in `WndClassEx::wnd_proc`.
pub type WndProc = unsafe extern "system" fn(Hwnd, u32, WParam, LParam) -> LResult;

// ── Handles ───────────────────────────────────────────────────────────────────

macro_rules! handle {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub struct $name(pub *mut c_void);

            impl $name {
                /// The null handle.
                pub const fn null() -> Self {
                    Self(std::ptr::null_mut())
                }

                /// `true` for the null handle, the usual failure sentinel.
                pub fn is_null(self) -> bool {
                    self.0.is_null()
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::null()
                }
            }
        )*
    };
}

handle! {
    /// Generic kernel object handle (`HANDLE`).
    Handle;
    /// Window handle (`HWND`).
    Hwnd;
    /// Device context (`HDC`).
    Hdc;
    /// Module instance (`HINSTANCE`).
    Hinstance;
    /// Icon (`HICON`).
    Hicon;
    /// Cursor (`HCURSOR`).
    Hcursor;
    /// Brush (`HBRUSH`).
    Hbrush;
    /// Any GDI object (`HGDIOBJ`).
    Hgdiobj;
    /// Menu (`HMENU`).
    Hmenu;
}

impl Hbrush {
    /// A system colour index used as a class background, the way
    /// `(HBRUSH)(COLOR_WINDOW + 1)` is written in C.
    pub fn from_sys_color(index: i32) -> Self {
        Self(index as isize as *mut c_void)
    }
}

/// `MAKEINTRESOURCEW`: encode a numeric resource id where the API expects a
/// string pointer.  The result must never be dereferenced.
pub fn make_int_resource(id: u16) -> *const u16 {
    id as usize as *const u16
}

// ── POINT / RECT ──────────────────────────────────────────────────────────────

/// `POINT`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// `RECT`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

// Wrapping, as the C expressions `right - left` / `bottom - top` behave.
impl Rect {
    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }
}

// ── MSG ───────────────────────────────────────────────────────────────────────

/// `MSG`: one entry of a thread's message queue.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Msg {
    pub hwnd: Hwnd,
    pub message: u32,
    pub wparam: WParam,
    pub lparam: LParam,
    pub time: u32,
    pub pt: Point,
}

// ── WNDCLASSEXW ───────────────────────────────────────────────────────────────

/// `WNDCLASSEXW`: window-class descriptor for `RegisterClassExW`.
///
/// `menu_name` and `class_name` are raw wide-string pointers (or
/// `make_int_resource` values); the caller keeps the pointed-to buffers alive
/// until registration returns.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct WndClassEx {
    pub size: u32,
    pub style: u32,
    pub wnd_proc: Option<WndProc>,
    pub cls_extra: i32,
    pub wnd_extra: i32,
    pub instance: Hinstance,
    pub icon: Hicon,
    pub cursor: Hcursor,
    pub background: Hbrush,
    pub menu_name: *const u16,
    pub class_name: *const u16,
    pub icon_sm: Hicon,
}

impl WndClassEx {
    /// Value of `cbSize`.  The structure is well under 4 GiB, so the cast is
    /// lossless.
    pub const SIZE: u32 = std::mem::size_of::<Self>() as u32;
}

impl Default for WndClassEx {
    fn default() -> Self {
        Self {
            size: Self::SIZE,
            style: 0,
            wnd_proc: None,
            cls_extra: 0,
            wnd_extra: 0,
            instance: Hinstance::null(),
            icon: Hicon::null(),
            cursor: Hcursor::null(),
            background: Hbrush::null(),
            menu_name: std::ptr::null(),
            class_name: std::ptr::null(),
            icon_sm: Hicon::null(),
        }
    }
}

// ── PIXELFORMATDESCRIPTOR ─────────────────────────────────────────────────────

/// `PIXELFORMATDESCRIPTOR`: pixel format of a drawing surface.
///
/// See <http://msdn.microsoft.com/en-us/library/windows/desktop/dd368826.aspx>.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormatDescriptor {
    pub size: u16,
    pub version: u16,
    pub flags: u32,
    pub pixel_type: u8,
    pub color_bits: u8,
    pub red_bits: u8,
    pub red_shift: u8,
    pub green_bits: u8,
    pub green_shift: u8,
    pub blue_bits: u8,
    pub blue_shift: u8,
    pub alpha_bits: u8,
    pub alpha_shift: u8,
    pub accum_bits: u8,
    pub accum_red_bits: u8,
    pub accum_green_bits: u8,
    pub accum_blue_bits: u8,
    pub accum_alpha_bits: u8,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub aux_buffers: u8,
    pub layer_type: u8,
    pub reserved: u8,
    pub layer_mask: u32,
    pub visible_mask: u32,
    pub damage_mask: u32,
}

impl PixelFormatDescriptor {
    /// Value of `nSize`.
    pub const SIZE: u16 = std::mem::size_of::<Self>() as u16;
    /// The only defined `nVersion`.
    pub const VERSION: u16 = 1;
}

impl Default for PixelFormatDescriptor {
    fn default() -> Self {
        Self {
            size: Self::SIZE,
            version: Self::VERSION,
            flags: 0,
            pixel_type: 0,
            color_bits: 0,
            red_bits: 0,
            red_shift: 0,
            green_bits: 0,
            green_shift: 0,
            blue_bits: 0,
            blue_shift: 0,
            alpha_bits: 0,
            alpha_shift: 0,
            accum_bits: 0,
            accum_red_bits: 0,
            accum_green_bits: 0,
            accum_blue_bits: 0,
            accum_alpha_bits: 0,
            depth_bits: 0,
            stencil_bits: 0,
            aux_buffers: 0,
            layer_type: 0,
            reserved: 0,
            layer_mask: 0,
            visible_mask: 0,
            damage_mask: 0,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    // ── Sizes every target agrees on ──────────────────────────────────────────

    #[test]
    fn point_and_rect_sizes() {
        assert_eq!(size_of::<Point>(), 8);
        assert_eq!(size_of::<Rect>(), 16);
    }

    #[test]
    fn pixel_format_descriptor_layout() {
        assert_eq!(size_of::<PixelFormatDescriptor>(), 40);
        assert_eq!(offset_of!(PixelFormatDescriptor, flags), 4);
        assert_eq!(offset_of!(PixelFormatDescriptor, pixel_type), 8);
        assert_eq!(offset_of!(PixelFormatDescriptor, reserved), 27);
        assert_eq!(offset_of!(PixelFormatDescriptor, layer_mask), 28);
        assert_eq!(offset_of!(PixelFormatDescriptor, damage_mask), 36);
    }

    #[test]
    fn handles_are_pointer_sized() {
        assert_eq!(size_of::<Hwnd>(), size_of::<usize>());
        assert_eq!(align_of::<Hwnd>(), align_of::<usize>());
        assert_eq!(size_of::<Option<WndProc>>(), size_of::<usize>());
    }

    // ── 64-bit layouts (x86_64 / aarch64 Windows) ─────────────────────────────

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn msg_layout_64() {
        assert_eq!(size_of::<Msg>(), 48);
        assert_eq!(offset_of!(Msg, message), 8);
        assert_eq!(offset_of!(Msg, wparam), 16);
        assert_eq!(offset_of!(Msg, lparam), 24);
        assert_eq!(offset_of!(Msg, time), 32);
        assert_eq!(offset_of!(Msg, pt), 36);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn wndclassex_layout_64() {
        assert_eq!(size_of::<WndClassEx>(), 80);
        assert_eq!(offset_of!(WndClassEx, wnd_proc), 8);
        assert_eq!(offset_of!(WndClassEx, cls_extra), 16);
        assert_eq!(offset_of!(WndClassEx, instance), 24);
        assert_eq!(offset_of!(WndClassEx, background), 48);
        assert_eq!(offset_of!(WndClassEx, class_name), 64);
        assert_eq!(offset_of!(WndClassEx, icon_sm), 72);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn layouts_32() {
        assert_eq!(size_of::<Msg>(), 28);
        assert_eq!(size_of::<WndClassEx>(), 48);
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn wndclassex_default_sets_size() {
        let wc = WndClassEx::default();
        assert_eq!(wc.size as usize, size_of::<WndClassEx>());
        assert!(wc.wnd_proc.is_none());
        assert!(wc.class_name.is_null());
        assert!(wc.instance.is_null());
    }

    #[test]
    fn pixel_format_descriptor_default_sets_size_and_version() {
        let pfd = PixelFormatDescriptor::default();
        assert_eq!(pfd.size, 40);
        assert_eq!(pfd.version, 1);
        assert_eq!(pfd.flags, 0);
    }

    #[test]
    fn msg_default_is_zeroed() {
        let msg = Msg::default();
        assert!(msg.hwnd.is_null());
        assert_eq!(msg.message, 0);
        assert_eq!(msg.pt, Point::default());
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    #[test]
    fn make_int_resource_encodes_id_in_pointer() {
        assert_eq!(make_int_resource(32512) as usize, 32512);
        assert!(make_int_resource(0).is_null());
    }

    #[test]
    fn sys_color_brush_carries_index() {
        // COLOR_WINDOW (5) + 1
        assert_eq!(Hbrush::from_sys_color(6).0 as usize, 6);
        assert!(!Hbrush::from_sys_color(6).is_null());
    }

    #[test]
    fn rect_dimensions() {
        let r = Rect {
            left: 10,
            top: 20,
            right: 410,
            bottom: 320,
        };
        assert_eq!(r.width(), 400);
        assert_eq!(r.height(), 300);
    }

    #[test]
    fn rect_dimensions_wrap_on_extreme_coordinates() {
        let r = Rect {
            left: i32::MIN,
            top: i32::MAX,
            right: i32::MAX,
            bottom: i32::MIN,
        };
        assert_eq!(r.width(), -1);
        assert_eq!(r.height(), 1);
    }

    #[test]
    fn null_handles_compare_equal() {
        assert_eq!(Hwnd::default(), Hwnd::null());
        assert!(Hdc::null().is_null());
    }
}
