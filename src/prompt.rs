//! URL Prompt
//!
//! Modal dialog asking the user for the application suffix. The dialog is a
//! small webview window rendering a static form; submission and cancellation
//! come back as navigations on a private callback scheme, so the page needs
//! no IPC surface at all.

use log::warn;
use parking_lot::Mutex;
use std::sync::Arc;
use tauri::{AppHandle, Manager, Url, WebviewUrl, WebviewWindowBuilder, WindowEvent};
use tokio::sync::oneshot;

use crate::error::ShellResult;
use crate::target::BASE_URL;
use crate::window::html_data_url;

/// Label of the prompt window
pub const PROMPT_LABEL: &str = "url-prompt";

/// Private scheme the prompt form submits to
const CALLBACK_SCHEME: &str = "servitech";

const PROMPT_WIDTH: f64 = 500.0;
const PROMPT_HEIGHT: f64 = 250.0;

/// Which flow opened the prompt. Behavior is identical; only the window
/// title differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    FirstRun,
    ChangeUrl,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstRun => "Configuración inicial",
            Self::ChangeUrl => "Cambiar URL",
        }
    }
}

/// How the prompt was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// Render the prompt form. The base URL is displayed but not editable; only
/// the suffix field travels back through the callback.
fn render_html() -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  body {{ font-family: sans-serif; margin: 16px; }}
  p {{ font-size: 14px; margin-bottom: 10px; }}
  #prompt-input {{ width: 100%; padding: 5px; box-sizing: border-box; }}
  .actions {{ margin-top: 14px; text-align: right; }}
  .actions a {{ margin-right: 12px; font-size: 13px; }}
</style>
</head>
<body>
  <p>URL base (no modificable): <strong>{base}</strong></p>
  <p>Ingresa la dirección URL otorgada por ServitechApp:</p>
  <form action="{scheme}://submit" method="get">
    <input id="prompt-input" name="suffix" type="text" placeholder="nombre-app" autofocus>
    <div class="actions">
      <a href="{scheme}://cancel">Cancelar</a>
      <button type="submit">Aceptar</button>
    </div>
  </form>
</body>
</html>"##,
        base = BASE_URL,
        scheme = CALLBACK_SCHEME,
    )
}

/// Interpret a navigation out of the prompt page. Returns `None` for
/// navigations that are not callbacks (those are simply blocked).
fn parse_callback(url: &Url) -> Option<PromptOutcome> {
    if url.scheme() != CALLBACK_SCHEME {
        return None;
    }

    match url.host_str() {
        Some("submit") => {
            let suffix = url
                .query_pairs()
                .find(|(key, _)| key == "suffix")
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default();
            Some(PromptOutcome::Submitted(suffix))
        }
        Some("cancel") => Some(PromptOutcome::Cancelled),
        _ => None,
    }
}

/// Show the prompt and suspend until the user submits or dismisses it.
///
/// The window resolves a oneshot channel exactly once: through the callback
/// navigation, or through window destruction (treated as cancel). There is
/// no timeout; the prompt waits indefinitely.
pub async fn show(app: &AppHandle, kind: PromptKind) -> ShellResult<PromptOutcome> {
    // A prompt is already open; bring it forward instead of stacking.
    if let Some(existing) = app.get_webview_window(PROMPT_LABEL) {
        existing.set_focus()?;
        return Ok(PromptOutcome::Cancelled);
    }

    let (tx, rx) = oneshot::channel();
    let reply = Arc::new(Mutex::new(Some(tx)));

    let page = html_data_url(&render_html())?;

    let nav_reply = reply.clone();
    let window = WebviewWindowBuilder::new(app, PROMPT_LABEL, WebviewUrl::External(page))
        .title(kind.title())
        .inner_size(PROMPT_WIDTH, PROMPT_HEIGHT)
        .resizable(false)
        .on_navigation(move |url| {
            if url.scheme() == "data" {
                return true;
            }
            if let Some(outcome) = parse_callback(url) {
                if let Some(tx) = nav_reply.lock().take() {
                    let _ = tx.send(outcome);
                }
            }
            false
        })
        .build()?;

    let close_reply = reply.clone();
    window.on_window_event(move |event| {
        if let WindowEvent::Destroyed = event {
            if let Some(tx) = close_reply.lock().take() {
                let _ = tx.send(PromptOutcome::Cancelled);
            }
        }
    });

    let outcome = rx.await.unwrap_or_else(|_| {
        warn!("prompt channel dropped without a reply");
        PromptOutcome::Cancelled
    });

    if let Some(window) = app.get_webview_window(PROMPT_LABEL) {
        let _ = window.close();
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_submit_callback_carries_suffix() {
        let outcome = parse_callback(&url("servitech://submit?suffix=myapp")).unwrap();
        assert_eq!(outcome, PromptOutcome::Submitted("myapp".to_string()));
    }

    #[test]
    fn test_submit_without_suffix_is_empty() {
        let outcome = parse_callback(&url("servitech://submit")).unwrap();
        assert_eq!(outcome, PromptOutcome::Submitted(String::new()));
    }

    #[test]
    fn test_cancel_callback() {
        let outcome = parse_callback(&url("servitech://cancel")).unwrap();
        assert_eq!(outcome, PromptOutcome::Cancelled);
    }

    #[test]
    fn test_foreign_navigation_is_not_a_callback() {
        assert!(parse_callback(&url("https://cloud.servitechapp.com/myapp")).is_none());
        assert!(parse_callback(&url("servitech://other")).is_none());
    }

    #[test]
    fn test_form_targets_callback_scheme() {
        let html = render_html();
        assert!(html.contains("servitech://submit"));
        assert!(html.contains("servitech://cancel"));
        assert!(html.contains(BASE_URL));
        assert!(html.contains("nombre-app"));
    }

    #[test]
    fn test_titles_differ_per_kind() {
        assert_eq!(PromptKind::FirstRun.title(), "Configuración inicial");
        assert_eq!(PromptKind::ChangeUrl.title(), "Cambiar URL");
    }
}
