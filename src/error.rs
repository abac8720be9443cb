// ── Central error type ────────────────────────────────────────────────────────
//
// Every forwarding call in `platform::win32` turns the native failure sentinel
// (null handle, zero BOOL/ATOM, -1) into `WinbindError::Win32` carrying the
// thread's last-error code.  No panics in production paths.

/// `FACILITY_WIN32` HRESULTs have this high word: `0x8007xxxx`.
const HRESULT_FROM_WIN32_MASK: u32 = 0xFFFF_0000;
const HRESULT_FROM_WIN32_TAG: u32 = 0x8007_0000;

/// Every error that winbind can produce.
#[derive(Debug)]
pub enum WinbindError {
    /// A Win32 entry point returned its failure sentinel.
    Win32 {
        /// The name of the failing entry point, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value).  Zero when the
        /// entry point fails without setting one (e.g. `GetDC`).
        code: u32,
    },

    /// Text destined for a wide-character parameter contains a NUL at
    /// `position` (in UTF-16 code units); the OS would silently truncate it.
    InvalidString { position: usize },

    /// Reading the demo configuration file failed.
    Io(std::io::Error),

    /// The demo configuration file is not valid JSON for `DemoConfig`.
    Config(serde_json::Error),
}

impl WinbindError {
    /// Build a `Win32` error from an HRESULT, unwrapping `HRESULT_FROM_WIN32`
    /// values back to the plain Win32 code.
    pub fn from_hresult(function: &'static str, hresult: u32) -> Self {
        Self::Win32 {
            function,
            code: win32_code_from_hresult(hresult),
        }
    }

    /// The native error code, if this error came from a Win32 call.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Win32 { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinbindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code: 0 } => {
                write!(f, "{function} failed (no error code reported)")
            }
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::InvalidString { position } => {
                write!(f, "string contains an interior NUL at offset {position}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for WinbindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Win32 { .. } | Self::InvalidString { .. } => None,
        }
    }
}

impl From<std::io::Error> for WinbindError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for WinbindError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

/// Recover the Win32 code from an `HRESULT_FROM_WIN32` value.  Any other
/// HRESULT is returned unchanged.
pub fn win32_code_from_hresult(hresult: u32) -> u32 {
    if hresult & HRESULT_FROM_WIN32_MASK == HRESULT_FROM_WIN32_TAG {
        hresult & 0xFFFF
    } else {
        hresult
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WinbindError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
