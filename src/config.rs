// ── Demo window configuration ─────────────────────────────────────────────────
//
// Optional JSON file passed as the demo binary's first argument.  Every field
// has a default, so `{}` (or no file at all) gives the stock demo window.
// No `unsafe`: pure safe Rust + serde_json.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for `platform::win32::window::run`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Name the window class is registered under.
    pub class_name: String,
    /// Title bar text.
    pub title: String,
    /// Initial outer width in device pixels.
    pub width: i32,
    /// Initial outer height in device pixels.
    pub height: i32,
    /// Post `WM_CLOSE` right after the window is shown, so the message loop
    /// runs once and exits.  Used by the smoke test.
    pub auto_close: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            class_name: "myWindowClass".to_owned(),
            title: "Simple Rust Window!".to_owned(),
            width: 400,
            height: 400,
            auto_close: false,
        }
    }
}

impl DemoConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_json(&data)
    }

    /// Parse a configuration from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
