use super::*;
use super::clock::{format_lock_date, format_lock_time, use_clock};
use crate::power::DisplayMode;

const SHUTDOWN_NOTICE: &str = "Shutting down...";

fn blank_screen_text(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::ShuttingDown => SHUTDOWN_NOTICE,
        DisplayMode::On | DisplayMode::Off | DisplayMode::Asleep => "",
    }
}

/// Black overlay for shutdown and sleep. Any click wakes the display.
#[component]
pub(super) fn BlankScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let display = create_memo(move |_| runtime.state.get().power.display);

    view! {
        <Show when=move || display.get().is_blank() fallback=|| ()>
            <div
                class="blank-screen"
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::WakeDisplay);
                }
            >
                {move || blank_screen_text(display.get())}
            </div>
        </Show>
    }
}

#[component]
pub(super) fn LockScreenOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let lock = create_memo(move |_| runtime.state.get().power.lock);
    let wallpaper = runtime
        .config
        .with_value(|config| format!("background-image:url('{}');", config.lock_wallpaper));

    view! {
        <Show when=move || lock.get().locked fallback=|| ()>
            <div
                class="lock-screen"
                style=wallpaper.clone()
                on:mousedown=move |ev| ev.stop_propagation()
                on:contextmenu=move |ev| stop_mouse_event(&ev)
                on:click=move |ev| ev.stop_propagation()
            >
                <Show
                    when=move || lock.get().pin_prompt_visible
                    fallback=move || view! { <LockClock /> }
                >
                    <UnlockForm />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn LockClock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let tick_ms = runtime.config.with_value(|config| config.clock_tick_ms);
    let now = use_clock(tick_ms);

    view! {
        <h1 class="lock-time">{move || format_lock_time(now.get())}</h1>
        <p class="lock-date">{move || format_lock_date(now.get())}</p>
        <button
            class="lock-unlock"
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::ShowUnlockPrompt);
            }
        >
            "Click to unlock"
        </button>
    }
}

#[component]
fn UnlockForm() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let error = create_memo(move |_| runtime.state.get().power.lock.error);
    let pin = create_rw_signal(String::new());

    let submit = move || {
        let entered = pin.get_untracked();
        pin.set(String::new());
        runtime.dispatch_action(DesktopAction::SubmitUnlockPin { pin: entered });
    };

    view! {
        <div class="unlock-form">
            <h2>"\u{1f512} Enter PIN"</h2>
            <input
                type="password"
                placeholder="Enter PIN"
                prop:value=move || pin.get()
                on:input=move |ev| pin.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    submit();
                }
            >
                "Unlock"
            </button>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="unlock-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_shutdown_shows_a_notice() {
        assert_eq!(blank_screen_text(DisplayMode::ShuttingDown), "Shutting down...");
        assert_eq!(blank_screen_text(DisplayMode::Off), "");
        assert_eq!(blank_screen_text(DisplayMode::Asleep), "");
    }
}
