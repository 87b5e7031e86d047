// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
//
// ServitechApp shell - a single-window wrapper around the hosted
// application. The window is locked to the configured URL; the only other
// surface is the "Cambiar URL" menu command.

// Declare modules
pub mod config;
pub mod error;
pub mod navigation;
pub mod prompt;
pub mod shell;
pub mod target;
pub mod window;

use log::error;
use tauri::menu::MenuBuilder;
use tauri::Manager;

use crate::config::ConfigStore;
use crate::shell::ShellContext;

/// Menu id of the single application command
const MENU_CHANGE_URL: &str = "change-url";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    let store = ConfigStore::from_default_location()
        .expect("could not resolve the user configuration directory");

    tauri::Builder::default()
        .manage(ShellContext::new(store))
        .menu(|handle| MenuBuilder::new(handle).text(MENU_CHANGE_URL, "Cambiar URL").build())
        .on_menu_event(|app, event| {
            if event.id().as_ref() == MENU_CHANGE_URL {
                let handle = app.clone();
                tauri::async_runtime::spawn(async move {
                    let ctx = handle.state::<ShellContext>();
                    if let Err(e) = ctx.change_url(&handle).await {
                        error!("change-url flow failed: {}", e);
                    }
                });
            }
        })
        .setup(|app| {
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let ctx = handle.state::<ShellContext>();
                if let Err(e) = ctx.startup(&handle).await {
                    error!("startup flow failed: {}", e);
                }
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(handle_run_event);
}

/// Platform lifecycle: macOS keeps the process resident after the last
/// window closes and re-derives the window on dock reactivation; everywhere
/// else the default quit-on-last-window behavior applies.
#[cfg(target_os = "macos")]
fn handle_run_event(app: &tauri::AppHandle, event: tauri::RunEvent) {
    match event {
        tauri::RunEvent::ExitRequested { code, api, .. } if code.is_none() => {
            api.prevent_exit();
        }
        tauri::RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => {
            let handle = app.clone();
            tauri::async_runtime::spawn(async move {
                let ctx = handle.state::<ShellContext>();
                if let Err(e) = ctx.reactivate(&handle).await {
                    error!("reactivation failed: {}", e);
                }
            });
        }
        _ => {}
    }
}

#[cfg(not(target_os = "macos"))]
fn handle_run_event(_app: &tauri::AppHandle, _event: tauri::RunEvent) {}
