// ── kernel32.dll ──────────────────────────────────────────────────────────────

#![allow(unsafe_code)]

use windows::{core::PCWSTR, Win32::System::LibraryLoader::GetModuleHandleW};

use super::abi::Checked;
use crate::{error::Result, types::Hinstance, wide::WideString};

/// `GetModuleHandleW`.  `None` returns the handle of the running executable.
pub fn get_module_handle(module_name: Option<&WideString>) -> Result<Hinstance> {
    let name = module_name.map_or(PCWSTR::null(), |n| PCWSTR(n.as_ptr()));

    // SAFETY: name is null or points into a live NUL-terminated WideString
    // borrowed for the duration of the call.  The returned module handle is
    // not reference-counted; nothing needs releasing.
    let module = unsafe { GetModuleHandleW(name) }.checked("GetModuleHandleW")?;

    // HINSTANCE and HMODULE represent the same underlying value on Windows.
    Ok(Hinstance(module.0))
}
