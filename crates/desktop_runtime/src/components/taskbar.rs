use super::*;
use crate::{
    model::{WindowId, WindowRecord},
    quick_settings::{BRIGHTNESS_RANGE, VOLUME_RANGE},
};
use super::clock::{format_clock_time, use_clock};

fn taskbar_window_button_class(win: &WindowRecord) -> &'static str {
    if win.is_minimized() {
        "taskbar-window-button minimized"
    } else if win.is_focused {
        "taskbar-window-button focused"
    } else {
        "taskbar-window-button"
    }
}

fn taskbar_window_button_dom_id(window_id: WindowId) -> String {
    format!("taskbar-window-button-{}", window_id.0)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let (taskbar_height_px, clock_tick_ms) = runtime
        .config
        .with_value(|config| (config.taskbar_height_px, config.clock_tick_ms));
    let clock_now = use_clock(clock_tick_ms);

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!("height:{taskbar_height_px}px;")
            on:mousedown=move |ev| ev.stop_propagation()
            on:contextmenu=move |ev| stop_mouse_event(&ev)
        >
            <button
                id="taskbar-start-button"
                class="taskbar-start"
                aria-haspopup="menu"
                aria-expanded=move || state.get().start_menu_open.to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "Start"
            </button>

            <div class="taskbar-pins">
                <For each=move || apps::pinned_apps() key=|app| app.app_id let:app>
                    {{
                        let app_id = app.app_id;
                        view! {
                            <button
                                class="taskbar-pin"
                                title=app.taskbar_label()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::Launch {
                                        target: LaunchTarget::App(app_id),
                                    });
                                }
                            >
                                <img src=app.icon_ref.clone() alt="" />
                                <span>{app.taskbar_label()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-windows">
                <For each=move || windows_by_handle(&state.get()) key=|id| id.0 let:window_id>
                    {{
                        let icon_ref = state
                            .get_untracked()
                            .window(window_id)
                            .map(|win| win.icon_ref.clone())
                            .unwrap_or_default();
                        let record = create_memo(move |_| state.get().window(window_id).cloned());
                        let title = create_memo(move |_| {
                            let desktop = state.get();
                            desktop
                                .window(window_id)
                                .map(|record| desktop.window_title(record))
                                .unwrap_or_default()
                        });
                        view! {
                            <button
                                id=taskbar_window_button_dom_id(window_id)
                                class=move || {
                                    record
                                        .get()
                                        .map(|win| taskbar_window_button_class(&win))
                                        .unwrap_or("taskbar-window-button")
                                }
                                aria-pressed=move || {
                                    record
                                        .get()
                                        .map(|win| win.is_focused)
                                        .unwrap_or(false)
                                        .to_string()
                                }
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id,
                                    });
                                }
                            >
                                <img src=icon_ref alt="" />
                                <span>{move || title.get()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <button
                id="taskbar-quick-settings-button"
                class="taskbar-status"
                aria-label="Quick settings"
                aria-expanded=move || state.get().quick_settings.open.to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleQuickSettings);
                }
            >
                "\u{1f50a} \u{1f50b} \u{1f4f6}"
            </button>

            <div class="taskbar-clock" aria-live="off">
                {move || format_clock_time(clock_now.get())}
            </div>

            <QuickSettingsPanel />
        </footer>
    }
}

fn parse_percent(raw: &str) -> Option<u16> {
    raw.trim().parse::<f64>().ok().map(|value| value.round().clamp(0.0, 1_000.0) as u16)
}

fn on_off_label(on: bool, on_text: &'static str) -> &'static str {
    if on {
        on_text
    } else {
        "Off"
    }
}

#[component]
fn QuickSettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let settings = create_memo(move |_| state.get().quick_settings);

    view! {
        <Show when=move || settings.get().open fallback=|| ()>
            <div
                id="quick-settings-panel"
                class="quick-settings"
                role="dialog"
                aria-label="Quick settings"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <label class="quick-settings-row">
                    <span>"Brightness"</span>
                    <input
                        type="range"
                        min={BRIGHTNESS_RANGE.0.to_string()}
                        max={BRIGHTNESS_RANGE.1.to_string()}
                        prop:value=move || settings.get().brightness_pct.to_string()
                        on:input=move |ev| {
                            if let Some(percent) = parse_percent(&event_target_value(&ev)) {
                                runtime.dispatch_action(DesktopAction::SetBrightness { percent });
                            }
                        }
                    />
                </label>
                <label class="quick-settings-row">
                    <span>"Volume"</span>
                    <input
                        type="range"
                        min={VOLUME_RANGE.0.to_string()}
                        max={VOLUME_RANGE.1.to_string()}
                        prop:value=move || settings.get().volume_pct.to_string()
                        on:input=move |ev| {
                            if let Some(percent) = parse_percent(&event_target_value(&ev)) {
                                runtime.dispatch_action(DesktopAction::SetVolume { percent });
                            }
                        }
                    />
                </label>
                <div class="quick-settings-row">
                    <span>"Wi-Fi"</span>
                    <span class="quick-settings-chip">
                        {move || on_off_label(settings.get().wifi_connected, "Connected")}
                    </span>
                </div>
                <div class="quick-settings-row">
                    <span>"Bluetooth"</span>
                    <span class="quick-settings-chip">
                        {move || on_off_label(settings.get().bluetooth_on, "On")}
                    </span>
                </div>
                <div class="quick-settings-row">
                    <span>
                        {move || format!("Notifications ({})", settings.get().notifications.len())}
                    </span>
                    <button
                        class="quick-settings-chip"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ClearNotifications);
                        }
                    >
                        "Clear All"
                    </button>
                </div>
                <div class="quick-settings-row">
                    <span>"Battery"</span>
                    <span>{move || format!("{}%", settings.get().battery_pct)}</span>
                </div>
            </div>
        </Show>
    }
}
