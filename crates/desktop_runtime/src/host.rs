//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics never touch the browser directly. Page reloads, prompts, and viewport
//! queries live behind [`DesktopHostContext`] so non-wasm builds (and tests) compile to inert
//! fallbacks.

use leptos::logging;

use crate::{
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, Default)]
/// Browser host boundary for desktop runtime side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ReloadShell => self.reload_shell(),
            RuntimeEffect::PromptFolderRename {
                folder_id,
                current_name,
            } => {
                if let Some(name) = self.prompt_text("Enter new name:", &current_name) {
                    runtime.dispatch_action(DesktopAction::RenameFolder { folder_id, name });
                }
            }
            RuntimeEffect::ConfirmPowerAction { action } => {
                let message = action.confirm_message().unwrap_or(action.label());
                if self.confirm(message) {
                    runtime.dispatch_action(DesktopAction::ApplyPowerAction { action });
                }
            }
            RuntimeEffect::ScheduleShutdownComplete { delay_ms } => {
                self.schedule(delay_ms, move || {
                    runtime.dispatch_action(DesktopAction::CompleteShutdown);
                });
            }
        }
    }

    /// Shows a blocking yes/no dialog. Outside a browser the answer is always no.
    pub fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            match window.confirm_with_message(message) {
                Ok(answer) => return answer,
                Err(err) => logging::warn!("confirm dialog failed: {err:?}"),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
        false
    }

    /// Runs `callback` once after `delay_ms`. Outside a browser nothing is scheduled.
    pub fn schedule(&self, delay_ms: u64, callback: impl FnOnce() + 'static) {
        #[cfg(target_arch = "wasm32")]
        leptos::set_timeout(callback, std::time::Duration::from_millis(delay_ms));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (delay_ms, callback);
    }

    /// Reloads the page hosting the shell.
    pub fn reload_shell(&self) {
        logging::log!("desktop shell reload requested");
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                logging::warn!("shell reload skipped: no browser window");
                return;
            };
            if let Err(err) = window.location().reload() {
                logging::warn!("shell reload failed: {err:?}");
            }
        }
    }

    /// Shows a blocking text prompt. Returns `None` when the user cancels.
    pub fn prompt_text(&self, message: &str, default_value: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            match window.prompt_with_message_and_default(message, default_value) {
                Ok(answer) => return answer,
                Err(err) => logging::warn!("rename prompt failed: {err:?}"),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (message, default_value);
        None
    }

    /// Returns the desktop area available to windows: the browser viewport minus the taskbar.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

                return WindowRect {
                    x: 0,
                    y: 0,
                    w: width.max(320),
                    h: (height - taskbar_height_px).max(220),
                };
            }
        }

        WindowRect {
            x: 0,
            y: 0,
            w: FALLBACK_VIEWPORT_WIDTH,
            h: FALLBACK_VIEWPORT_HEIGHT - taskbar_height_px,
        }
    }
}

/// Clamps a menu anchor so a `menu_w` x `menu_h` popup stays inside `viewport`.
pub fn clamp_menu_anchor(
    viewport: WindowRect,
    x: i32,
    y: i32,
    menu_w: i32,
    menu_h: i32,
) -> (i32, i32) {
    let max_x = (viewport.x + viewport.w - menu_w).max(viewport.x);
    let max_y = (viewport.y + viewport.h - menu_h).max(viewport.y);
    (x.clamp(viewport.x, max_x), y.clamp(viewport.y, max_y))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fallback_viewport_excludes_taskbar() {
        let rect = DesktopHostContext.desktop_viewport_rect(48);
        assert_eq!(
            rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1024,
                h: 720
            }
        );
    }

    #[test]
    fn menu_anchor_is_pulled_back_inside_viewport() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 800,
            h: 600,
        };
        assert_eq!(clamp_menu_anchor(viewport, 790, 590, 160, 120), (640, 480));
        assert_eq!(clamp_menu_anchor(viewport, -5, 12, 160, 120), (0, 12));
        assert_eq!(clamp_menu_anchor(viewport, 100, 100, 160, 120), (100, 100));
    }

    #[test]
    fn prompt_outside_browser_is_cancelled() {
        assert_eq!(DesktopHostContext.prompt_text("Enter new name:", "Docs"), None);
    }

    #[test]
    fn confirm_outside_browser_is_declined() {
        assert!(!DesktopHostContext.confirm("Go to sleep?"));
    }
}
