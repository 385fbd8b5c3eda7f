//! Desktop shell UI composition and interaction surfaces.

mod clock;
mod menus;
mod power;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    menus::{DesktopContextMenu, FolderContextMenu, StartMenu},
    power::{BlankScreen, LockScreenOverlay},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps,
    context_menu::ContextMenuOrigin,
    model::{DesktopState, FolderId, LaunchTarget, PointerPosition, ResizeEdge, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const WELCOME_MESSAGE: &str = "Heyy Welcome to Our OS UI !!";

fn wallpaper_style(state: &DesktopState) -> String {
    let filter = state.quick_settings.brightness_filter();
    match state.background_url() {
        Some(url) => format!("background-image:url('{url}');{filter}"),
        None => filter,
    }
}

/// Open windows in handle order. Stacking comes from `z-index`, so the DOM order stays put
/// when focus changes.
fn windows_by_handle(state: &DesktopState) -> Vec<WindowId> {
    let mut ids: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
    ids.sort_unstable();
    ids
}

#[component]
/// Renders the full desktop shell UI: wallpaper, icons, windows, menus, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let welcome_banner_ms = runtime.config.with_value(|config| config.welcome_banner_ms);

    if let Ok(timeout) = set_timeout_with_handle(
        move || runtime.dispatch_action(DesktopAction::DismissWelcome),
        Duration::from_millis(welcome_banner_ms),
    ) {
        on_cleanup(move || timeout.clear());
    }

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let desktop = state.get_untracked();
        if desktop.menus.any_visible() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::DismissContextMenus);
        }
        if desktop.start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
        if desktop.quick_settings.open {
            runtime.dispatch_action(DesktopAction::ToggleQuickSettings);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            style=move || wallpaper_style(&state.get())
            on:click=move |_| {
                if state.get_untracked().menus.any_visible() {
                    runtime.dispatch_action(DesktopAction::DismissContextMenus);
                }
            }
            on:contextmenu=move |ev| {
                ev.prevent_default();
                runtime.dispatch_action(background_context_menu(pointer_from_mouse_event(&ev)));
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-dismiss-layer"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            />

            <Show when=move || state.get().ambient.welcome_visible fallback=|| ()>
                <div class="welcome-banner" role="status">{WELCOME_MESSAGE}</div>
            </Show>

            <div class="desktop-icon-grid">
                <For each=move || apps::desktop_icon_apps() key=|app| app.app_id let:app>
                    {{
                        let app_id = app.app_id;
                        view! {
                            <button
                                class="desktop-icon"
                                on:dblclick=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::Launch {
                                        target: LaunchTarget::App(app_id),
                                    });
                                }
                                on:contextmenu=move |ev| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::OpenContextMenu {
                                        origin: ContextMenuOrigin::AppIcon(app_id),
                                        pointer: pointer_from_mouse_event(&ev),
                                    });
                                }
                            >
                                <img src=app.icon_ref.clone() alt=app.display_name.clone() />
                                <span>{app.display_name.clone()}</span>
                            </button>
                        }
                    }}
                </For>
                <For
                    each=move || { state.get().folders.iter().cloned().collect::<Vec<_>>() }
                    key=|folder| (folder.id, folder.name.clone())
                    let:folder
                >
                    <FolderIcon folder_id=folder.id name=folder.name icon_ref=folder.icon_ref />
                </For>
            </div>

            <div class="desktop-window-layer">
                <For each=move || windows_by_handle(&state.get()) key=|id| id.0 let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <DesktopContextMenu />
            <FolderContextMenu />
            <StartMenu />
            <Taskbar />
            <BlankScreen />
            <LockScreenOverlay />
        </div>
    }
}

#[component]
fn FolderIcon(folder_id: FolderId, name: String, icon_ref: String) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <button
            class="desktop-icon desktop-folder"
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::Launch {
                    target: LaunchTarget::Folder(folder_id),
                });
            }
            on:contextmenu=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::OpenContextMenu {
                    origin: ContextMenuOrigin::FolderIcon(folder_id),
                    pointer: pointer_from_mouse_event(&ev),
                });
            }
        >
            <img src=icon_ref alt=name.clone() />
            <span>{name}</span>
        </button>
    }
}

/// Right-clicks reaching the shell root landed on no icon, window, or menu: those stop
/// propagation, so anything left is desktop background, including gaps in the icon grid.
fn background_context_menu(pointer: PointerPosition) -> DesktopAction {
    DesktopAction::OpenContextMenu {
        origin: ContextMenuOrigin::Background,
        pointer,
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
