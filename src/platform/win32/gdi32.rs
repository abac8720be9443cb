// ── gdi32.dll ─────────────────────────────────────────────────────────────────

#![allow(unsafe_code)]

use windows::Win32::Graphics::{
    Gdi::{GetDeviceCaps, GetStockObject, GET_DEVICE_CAPS_INDEX, GET_STOCK_OBJECT_FLAGS, HDC},
    OpenGL::{ChoosePixelFormat, SetPixelFormat, SwapBuffers, PIXELFORMATDESCRIPTOR},
};

use super::abi::Checked;
use crate::{
    error::Result,
    types::{Hdc, Hgdiobj, PixelFormatDescriptor},
};

/// `GetStockObject`: one of the predefined pens, brushes or fonts
/// (`WHITE_BRUSH`, `BLACK_PEN`, …).  Null for an unknown index.
pub fn get_stock_object(index: i32) -> Hgdiobj {
    // SAFETY: stock objects are owned by the system; no cleanup required.
    Hgdiobj::from(unsafe { GetStockObject(GET_STOCK_OBJECT_FLAGS(index as _)) })
}

/// `GetDeviceCaps`: `HORZRES`, `LOGPIXELSX`, `BITSPIXEL`, …
pub fn get_device_caps(hdc: Hdc, index: i32) -> i32 {
    // SAFETY: the DC handle is validated by the OS; a bad one yields 0.
    unsafe { GetDeviceCaps(HDC::from(hdc), GET_DEVICE_CAPS_INDEX(index as _)) }
}

// ── Pixel formats ─────────────────────────────────────────────────────────────

/// `ChoosePixelFormat`: the 1-based index of the closest format the device
/// supports.
pub fn choose_pixel_format(hdc: Hdc, pfd: &PixelFormatDescriptor) -> Result<i32> {
    // SAFETY: PixelFormatDescriptor is a layout mirror of PIXELFORMATDESCRIPTOR
    // and is only read for the duration of the call.
    unsafe {
        ChoosePixelFormat(
            HDC::from(hdc),
            pfd as *const PixelFormatDescriptor as *const PIXELFORMATDESCRIPTOR,
        )
    }
    .checked("ChoosePixelFormat")
}

/// `SetPixelFormat`.  A window's pixel format can be set only once.
pub fn set_pixel_format(hdc: Hdc, format: i32, pfd: &PixelFormatDescriptor) -> Result<()> {
    // SAFETY: as choose_pixel_format.
    unsafe {
        SetPixelFormat(
            HDC::from(hdc),
            format,
            pfd as *const PixelFormatDescriptor as *const PIXELFORMATDESCRIPTOR,
        )
    }
    .checked("SetPixelFormat")
}

/// `SwapBuffers`: present the back buffer of a double-buffered format.
pub fn swap_buffers(hdc: Hdc) -> Result<()> {
    // SAFETY: the DC handle is validated by the OS.
    unsafe { SwapBuffers(HDC::from(hdc)) }.checked("SwapBuffers")
}
