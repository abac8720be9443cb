// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that log output is visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::Path;

use winbind::{DemoConfig, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match load_config().and_then(|config| run(&config)) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            report_fatal(&e.to_string());
            1
        }
    };

    std::process::exit(exit_code);
}

/// First argument, if any, is the path to a JSON `DemoConfig`.
fn load_config() -> Result<DemoConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", Path::new(&path).display());
            DemoConfig::load(Path::new(&path))
        }
        None => Ok(DemoConfig::default()),
    }
}

#[cfg(windows)]
fn run(config: &DemoConfig) -> Result<i32> {
    winbind::platform::win32::window::run(config)
}

#[cfg(not(windows))]
fn run(_config: &DemoConfig) -> Result<i32> {
    log::error!("the demo window needs Windows; nothing to do on this host");
    Ok(1)
}

// Startup failed before or during the message loop.
// Show a modal error dialog, the only visible output path in a GUI app.
#[cfg(windows)]
fn report_fatal(message: &str) {
    winbind::platform::win32::window::show_error_dialog(message);
}

#[cfg(not(windows))]
fn report_fatal(_message: &str) {}
