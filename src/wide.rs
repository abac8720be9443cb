// ── UTF-16 strings for wide-character entry points ────────────────────────────

use crate::error::{Result, WinbindError};

/// Owned, NUL-terminated UTF-16 string.
///
/// `as_ptr()` is valid for as long as the `WideString` is alive; keep it in a
/// binding that outlives the native call it is passed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Encode `s` as UTF-16 and append the terminator.
    ///
    /// Rejects interior NULs: the OS would stop reading at the first one.
    pub fn new(s: &str) -> Result<Self> {
        let buf: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
        match buf.iter().position(|&c| c == 0) {
            Some(pos) if pos + 1 != buf.len() => Err(WinbindError::InvalidString { position: pos }),
            _ => Ok(Self(buf)),
        }
    }

    pub fn as_ptr(&self) -> *const u16 {
        self.0.as_ptr()
    }

    /// Code units including the terminator.
    pub fn as_slice_with_nul(&self) -> &[u16] {
        &self.0
    }

    /// Length in code units, excluding the terminator.
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for WideString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&from_wide_buf(&self.0))
    }
}

/// Decode a NUL-terminated (or full) UTF-16 buffer, replacing invalid
/// surrogates.
pub fn from_wide_buf(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
