// ── Native constants ──────────────────────────────────────────────────────────
//
// Source of truth: WinUser.h / WinGDI.h.  Only the subset the bindings and the
// demo window use is listed here.  Values are ABI, not choices.

// ── Window styles (WS_*) ──────────────────────────────────────────────────────

pub const WS_OVERLAPPED: u32 = 0x0000_0000;
pub const WS_POPUP: u32 = 0x8000_0000;
pub const WS_CHILD: u32 = 0x4000_0000;
pub const WS_VISIBLE: u32 = 0x1000_0000;
pub const WS_CLIPSIBLINGS: u32 = 0x0400_0000;
pub const WS_CLIPCHILDREN: u32 = 0x0200_0000;
pub const WS_CAPTION: u32 = 0x00C0_0000;
pub const WS_SYSMENU: u32 = 0x0008_0000;
pub const WS_THICKFRAME: u32 = 0x0004_0000;
pub const WS_MINIMIZEBOX: u32 = 0x0002_0000;
pub const WS_MAXIMIZEBOX: u32 = 0x0001_0000;
pub const WS_OVERLAPPEDWINDOW: u32 = WS_OVERLAPPED
    | WS_CAPTION
    | WS_SYSMENU
    | WS_THICKFRAME
    | WS_MINIMIZEBOX
    | WS_MAXIMIZEBOX;

// ── Extended window styles (WS_EX_*) ──────────────────────────────────────────

pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;
pub const WS_EX_CLIENTEDGE: u32 = 0x0000_0200;

// ── Special parent handles ────────────────────────────────────────────────────

/// Parent for message-only windows: `Hwnd(HWND_MESSAGE as *mut c_void)`.
pub const HWND_MESSAGE: isize = -3;

// ── Class styles (CS_*) ───────────────────────────────────────────────────────

pub const CS_VREDRAW: u32 = 0x0001;
pub const CS_HREDRAW: u32 = 0x0002;
pub const CS_DBLCLKS: u32 = 0x0008;
/// Own device context per window; required by most OpenGL setups.
pub const CS_OWNDC: u32 = 0x0020;

/// Let the system pick a position or size.
pub const CW_USEDEFAULT: i32 = 0x8000_0000_u32 as i32;

// ── ShowWindow commands (SW_*) ────────────────────────────────────────────────

pub const SW_HIDE: i32 = 0;
pub const SW_SHOWNORMAL: i32 = 1;
pub const SW_SHOWMINIMIZED: i32 = 2;
pub const SW_SHOWMAXIMIZED: i32 = 3;
pub const SW_SHOW: i32 = 5;
pub const SW_SHOWDEFAULT: i32 = 10;

// ── Window messages (WM_*) ────────────────────────────────────────────────────

pub const WM_NULL: u32 = 0x0000;
pub const WM_CREATE: u32 = 0x0001;
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_PAINT: u32 = 0x000F;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_QUIT: u32 = 0x0012;
pub const WM_SETCURSOR: u32 = 0x0020;
pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_CHAR: u32 = 0x0102;
pub const WM_USER: u32 = 0x0400;

// ── PeekMessage flags (PM_*) ──────────────────────────────────────────────────

pub const PM_NOREMOVE: u32 = 0x0000;
pub const PM_REMOVE: u32 = 0x0001;
pub const PM_NOYIELD: u32 = 0x0002;

// ── Stock cursors (IDC_*) ─────────────────────────────────────────────────────
//
// Pass to `load_cursor` with a null instance.

pub const IDC_ARROW: u16 = 32512;
pub const IDC_IBEAM: u16 = 32513;
pub const IDC_WAIT: u16 = 32514;
pub const IDC_CROSS: u16 = 32515;

// ── Stock icons (IDI_*) ───────────────────────────────────────────────────────
//
// Pass to `load_icon` with a null instance.

pub const IDI_APPLICATION: u16 = 32512;
pub const IDI_HAND: u16 = 32513;
pub const IDI_QUESTION: u16 = 32514;
pub const IDI_EXCLAMATION: u16 = 32515;
pub const IDI_ASTERISK: u16 = 32516;
pub const IDI_WINLOGO: u16 = 32517;
pub const IDI_WARNING: u16 = IDI_EXCLAMATION;
pub const IDI_ERROR: u16 = IDI_HAND;
pub const IDI_INFORMATION: u16 = IDI_ASTERISK;

// ── System colours (COLOR_*) ──────────────────────────────────────────────────
//
// As a class background, pass `Hbrush::from_sys_color(COLOR_x + 1)`.

pub const COLOR_BACKGROUND: i32 = 1;
pub const COLOR_WINDOW: i32 = 5;
pub const COLOR_WINDOWTEXT: i32 = 8;
pub const COLOR_BTNFACE: i32 = 15;

// ── Stock GDI objects ─────────────────────────────────────────────────────────

pub const WHITE_BRUSH: i32 = 0;
pub const LTGRAY_BRUSH: i32 = 1;
pub const GRAY_BRUSH: i32 = 2;
pub const DKGRAY_BRUSH: i32 = 3;
pub const BLACK_BRUSH: i32 = 4;
pub const NULL_BRUSH: i32 = 5;
pub const WHITE_PEN: i32 = 6;
pub const BLACK_PEN: i32 = 7;
pub const SYSTEM_FONT: i32 = 13;
pub const DC_BRUSH: i32 = 18;

// ── GetDeviceCaps indices ─────────────────────────────────────────────────────

pub const HORZRES: i32 = 8;
pub const VERTRES: i32 = 10;
pub const BITSPIXEL: i32 = 12;
pub const PLANES: i32 = 14;
pub const LOGPIXELSX: i32 = 88;
pub const LOGPIXELSY: i32 = 90;

// ── PIXELFORMATDESCRIPTOR flags and types ─────────────────────────────────────

pub const PFD_DOUBLEBUFFER: u32 = 0x0000_0001;
pub const PFD_STEREO: u32 = 0x0000_0002;
pub const PFD_DRAW_TO_WINDOW: u32 = 0x0000_0004;
pub const PFD_DRAW_TO_BITMAP: u32 = 0x0000_0008;
pub const PFD_SUPPORT_GDI: u32 = 0x0000_0010;
pub const PFD_SUPPORT_OPENGL: u32 = 0x0000_0020;

pub const PFD_TYPE_RGBA: u8 = 0;
pub const PFD_TYPE_COLORINDEX: u8 = 1;

pub const PFD_MAIN_PLANE: u8 = 0;
