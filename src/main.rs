// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

/// Desktop entry point for the ServitechApp shell
///
/// This is a thin wrapper that delegates to the library crate.
/// All application code, modules, and Tauri setup lives in lib.rs.
fn main() {
    servitech_shell_lib::run();
}
