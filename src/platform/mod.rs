// ── Platform layer ────────────────────────────────────────────────────────────
//
// All native entry points live in the `win32` sub-module, which only exists
// when compiling for Windows.  Everything above it (layout mirrors, constants,
// strings, errors, configuration) is host-independent.

#[cfg(windows)]
pub mod win32;
