//! Main Window
//!
//! Creates the single application window and its placeholder page.

use base64::{engine::general_purpose::STANDARD, Engine};
use log::info;
use tauri::{AppHandle, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::error::ShellResult;
use crate::navigation::NavigationPolicy;

/// Label of the single application window
pub const MAIN_LABEL: &str = "main";

const WINDOW_TITLE: &str = "ServitechApp";
const WINDOW_WIDTH: f64 = 1200.0;
const WINDOW_HEIGHT: f64 = 800.0;

/// Shown when no URL is configured
const PLACEHOLDER_HTML: &str =
    r#"<h2>Por favor, ingresa una URL desde el menú "Cambiar URL"</h2>"#;

/// Encode a static HTML document as a `data:` URL
pub(crate) fn html_data_url(html: &str) -> ShellResult<Url> {
    let encoded = STANDARD.encode(html);
    Ok(Url::parse(&format!("data:text/html;base64,{}", encoded))?)
}

/// Create the main window at `target`, or at the placeholder page when no
/// URL is configured. The navigation policy is installed as the window's
/// navigation hook for its whole lifetime.
pub fn create_main(
    app: &AppHandle,
    policy: &NavigationPolicy,
    target: Option<Url>,
) -> ShellResult<WebviewWindow> {
    let url = match target {
        Some(url) => url,
        None => html_data_url(PLACEHOLDER_HTML)?,
    };

    info!("opening main window at {}", url);

    let guard = policy.clone();
    let window = WebviewWindowBuilder::new(app, MAIN_LABEL, WebviewUrl::External(url))
        .title(WINDOW_TITLE)
        .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .on_navigation(move |candidate| guard.permits(candidate))
        .build()?;

    Ok(window)
}
