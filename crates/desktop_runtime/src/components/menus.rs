use super::*;
use crate::{
    context_menu::{DesktopMenuItem, FolderMenuItem, MenuSite},
    host::clamp_menu_anchor,
    power::PowerAction,
};

const CONTEXT_MENU_WIDTH_PX: i32 = 180;
const CONTEXT_MENU_ITEM_HEIGHT_PX: i32 = 36;

fn menu_style(runtime: DesktopRuntimeContext, x: i32, y: i32, item_count: usize) -> String {
    let (x, y) = clamp_menu_anchor(
        runtime.viewport(),
        x,
        y,
        CONTEXT_MENU_WIDTH_PX,
        CONTEXT_MENU_ITEM_HEIGHT_PX * item_count as i32,
    );
    format!("left:{x}px;top:{y}px;")
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu = create_memo(move |_| *state.get().menus.menu(MenuSite::Desktop));

    view! {
        <Show when=move || menu.get().visible fallback=|| ()>
            <ul
                id="desktop-context-menu"
                class="context-menu desktop-context-menu"
                role="menu"
                aria-label="Desktop context menu"
                style=move || {
                    let menu = menu.get();
                    menu_style(runtime, menu.anchor_x, menu.anchor_y, DesktopMenuItem::ALL.len())
                }
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                {DesktopMenuItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li
                                id=item.dom_id()
                                role="menuitem"
                                class="context-menu-item"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ActivateDesktopMenuItem { item });
                                }
                            >
                                {item.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Show>
    }
}

#[component]
pub(super) fn FolderContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu = create_memo(move |_| *state.get().menus.menu(MenuSite::Folder));

    view! {
        <Show when=move || menu.get().visible fallback=|| ()>
            <ul
                id="folder-context-menu"
                class="context-menu folder-context-menu"
                role="menu"
                aria-label="Folder context menu"
                style=move || {
                    let menu = menu.get();
                    menu_style(runtime, menu.anchor_x, menu.anchor_y, FolderMenuItem::ALL.len())
                }
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                {FolderMenuItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li
                                id=item.dom_id()
                                role="menuitem"
                                class="context-menu-item"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ActivateFolderMenuItem { item });
                                }
                            >
                                {item.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Show>
    }
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let bottom_offset = runtime.config.with_value(|config| config.taskbar_height_px);

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                style=format!("bottom:{bottom_offset}px;")
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
            >
                <For each=move || apps::launcher_apps() key=|app| app.app_id let:app>
                    {{
                        let app_id = app.app_id;
                        view! {
                            <button
                                id=format!("desktop-launcher-item-{}", app_id.as_str())
                                role="menuitem"
                                class="start-menu-item"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::Launch {
                                        target: LaunchTarget::App(app_id),
                                    });
                                }
                            >
                                <img src=app.icon_ref.clone() alt="" />
                                <span>{app.launcher_label()}</span>
                            </button>
                        }
                    }}
                </For>
                <div class="start-menu-footer">
                    <span class="start-menu-user">"User"</span>
                    <PowerButton />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn PowerButton() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div class="power-button-anchor">
            <button
                id="start-menu-power-button"
                class="start-menu-power"
                aria-haspopup="menu"
                aria-expanded=move || state.get().power.menu_open.to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::TogglePowerMenu);
                }
            >
                "\u{23fb} Power"
            </button>
            <Show when=move || state.get().power.menu_open fallback=|| ()>
                <ul class="power-menu" role="menu" aria-label="Power options">
                    {PowerAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <li
                                    id=action.dom_id()
                                    role="menuitem"
                                    class="context-menu-item"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.dispatch_action(DesktopAction::RequestPowerAction {
                                            action,
                                        });
                                    }
                                >
                                    {action.label()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
