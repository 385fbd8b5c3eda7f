use std::rc::Rc;

use super::*;
use crate::model::{WindowId, WindowRecord, WindowRect};
use desktop_app_contract::{AppCloseHandle, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Frame attributes derived from a window record. Everything here may change on any action
/// without touching the mounted body.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WindowChrome {
    class: String,
    style: String,
    maximize_label: &'static str,
    maximize_glyph: &'static str,
}

impl WindowChrome {
    fn from_record(win: &WindowRecord, viewport: WindowRect) -> Self {
        let rect = win.presentation.effective_rect(viewport);
        let mut class = String::from("desktop-window");
        if win.is_focused {
            class.push_str(" focused");
        }
        if win.is_minimized() {
            class.push_str(" minimized");
        }
        if win.is_maximized() {
            class.push_str(" maximized");
        }
        let (maximize_label, maximize_glyph) = if win.is_maximized() {
            ("Restore window", "\u{2750}")
        } else {
            ("Maximize window", "\u{25a1}")
        };

        Self {
            class,
            style: format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                rect.x, rect.y, rect.w, rect.h, win.z_index
            ),
            maximize_label,
            maximize_glyph,
        }
    }
}

/// Identity the window body is mounted for. It only changes if the handle starts hosting
/// something else, which never happens, so the body is mounted exactly once.
fn body_mount_key(win: &WindowRecord) -> (WindowId, LaunchTarget) {
    (win.id, win.target)
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let title = create_memo(move |_| {
        let desktop = runtime.state.get();
        desktop
            .window(window_id)
            .map(|win| desktop.window_title(win))
            .unwrap_or_default()
    });
    let chrome = create_memo(move |_| {
        window
            .get()
            .map(|win| WindowChrome::from_record(&win, runtime.viewport()))
    });
    let mount_key = create_memo(move |_| window.get().map(|win| body_mount_key(&win)));
    let resizable = create_memo(move |_| {
        window
            .get()
            .map(|w| !w.is_maximized() && !w.is_minimized())
            .unwrap_or(false)
    });
    let icon_ref = window
        .get_untracked()
        .map(|w| w.icon_ref)
        .unwrap_or_default();

    let focus = move |_| {
        let should_focus = window
            .get_untracked()
            .map(|w| !w.is_focused)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };

    view! {
        <section
            class=move || chrome.get().map(|c| c.class).unwrap_or_default()
            style=move || chrome.get().map(|c| c.style).unwrap_or_default()
            on:pointerdown=focus
            on:contextmenu=move |ev| ev.stop_propagation()
            role="dialog"
            aria-label=move || title.get()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <img class="titlebar-app-icon" src=icon_ref alt="" />
                    <span>{move || title.get()}</span>
                </div>
                <div class="titlebar-controls">
                    <TitlebarButton
                        label="Minimize window"
                        glyph="\u{2013}"
                        action=DesktopAction::MinimizeWindow { window_id }
                    />
                    <TitlebarButton
                        label=Signal::derive(move || {
                            chrome.get().map(|c| c.maximize_label).unwrap_or("Maximize window")
                        })
                        glyph=Signal::derive(move || {
                            chrome.get().map(|c| c.maximize_glyph).unwrap_or("\u{25a1}")
                        })
                        action=DesktopAction::ToggleMaximize { window_id }
                    />
                    <TitlebarButton
                        label="Close window"
                        glyph="\u{2715}"
                        action=DesktopAction::CloseWindow { window_id }
                    />
                </div>
            </header>
            <div class="window-body">
                {move || {
                    mount_key
                        .get()
                        .map(|(window_id, target)| {
                            view! { <WindowBody window_id=window_id target=target /> }
                        })
                }}
            </div>
            <Show when=move || resizable.get() fallback=|| ()>
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::North />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::South />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::East />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::West />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
            </Show>
        </section>
    }
}

#[component]
fn TitlebarButton(
    #[prop(into)] label: MaybeSignal<&'static str>,
    #[prop(into)] glyph: MaybeSignal<&'static str>,
    action: DesktopAction,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <button
            aria-label=move || label.get()
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:dblclick=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(action.clone());
            }
        >
            {move || glyph.get()}
        </button>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

/// Mounts the module hosted by `target`. The module only receives a close capability bound to
/// this window's handle.
#[component]
fn WindowBody(window_id: WindowId, target: LaunchTarget) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let close = AppCloseHandle::new(Rc::new(move || {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    }));
    let contents = apps::app_module(target).mount(AppMountContext::new(close));

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, DesktopState, InteractionState},
        reducer::reduce_desktop,
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 720,
    };

    #[test]
    fn focus_drag_and_mode_changes_restyle_frame_but_keep_body_mounted() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mut dispatch = |state: &mut DesktopState, action| {
            reduce_desktop(state, &mut interaction, action).expect("reduce");
        };

        dispatch(
            &mut state,
            DesktopAction::Launch {
                target: LaunchTarget::App(AppId::Browser),
            },
        );
        let browser = state.windows.last().expect("browser").id;
        dispatch(
            &mut state,
            DesktopAction::Launch {
                target: LaunchTarget::App(AppId::Notepad),
            },
        );

        let record = |state: &DesktopState| state.window(browser).cloned().expect("record");
        let key = body_mount_key(&record(&state));
        let mut frames = vec![WindowChrome::from_record(&record(&state), VIEWPORT)];

        let steps = [
            DesktopAction::FocusWindow { window_id: browser },
            DesktopAction::BeginMove {
                window_id: browser,
                pointer: PointerPosition { x: 100, y: 60 },
            },
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 180, y: 90 },
            },
            DesktopAction::EndMove,
            DesktopAction::ToggleMaximize { window_id: browser },
            DesktopAction::MinimizeWindow { window_id: browser },
            DesktopAction::RestoreWindow { window_id: browser },
        ];
        for step in steps {
            dispatch(&mut state, step);
            assert_eq!(body_mount_key(&record(&state)), key);
            frames.push(WindowChrome::from_record(&record(&state), VIEWPORT));
        }

        frames.dedup();
        assert!(frames.len() > 4);
    }

    #[test]
    fn chrome_reflects_mode_and_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Launch {
                target: LaunchTarget::App(AppId::Calculator),
            },
        )
        .expect("launch");
        let window_id = state.windows[0].id;

        let chrome = WindowChrome::from_record(&state.windows[0], VIEWPORT);
        assert_eq!(chrome.class, "desktop-window focused");
        assert_eq!(chrome.maximize_label, "Maximize window");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id },
        )
        .expect("maximize");
        let chrome = WindowChrome::from_record(&state.windows[0], VIEWPORT);
        assert_eq!(chrome.class, "desktop-window focused maximized");
        assert_eq!(chrome.maximize_label, "Restore window");
        assert_eq!(
            chrome.style,
            "left:0px;top:0px;width:1024px;height:720px;z-index:1;"
        );
    }
}
