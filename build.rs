/// winbind build script.
///
/// Only the `platform::win32` forwarding layer is Windows-specific; the layout
/// mirrors, constants and helpers build everywhere.  Warn rather than fail so
/// that non-Windows hosts can still run the portable unit tests.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=winbind: target OS is {target_os:?}; \
             the Win32 entry points and the demo window are compiled out"
        );
    }
}
