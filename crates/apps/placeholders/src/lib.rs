//! Static app surfaces hosted by the desktop session manager.
//!
//! Every module here is opaque to the runtime: it is mounted with an [`AppMountContext`] and
//! owns whatever local state it renders. None of them persist anything.

use desktop_app_contract::{AppCloseHandle, AppModule, AppMountContext};
use leptos::*;

pub const EXPLORER_MODULE: AppModule = AppModule::new(mount_explorer);
pub const RECYCLE_BIN_MODULE: AppModule = AppModule::new(mount_recycle_bin);
pub const FILES_MODULE: AppModule = AppModule::new(mount_files);
pub const BROWSER_MODULE: AppModule = AppModule::new(mount_browser);
pub const AUDIO_MODULE: AppModule = AppModule::new(mount_audio);
pub const SETTINGS_MODULE: AppModule = AppModule::new(mount_settings);
pub const PHOTOS_MODULE: AppModule = AppModule::new(mount_photos);
pub const CALCULATOR_MODULE: AppModule = AppModule::new(mount_calculator);
pub const NOTEPAD_MODULE: AppModule = AppModule::new(mount_notepad);
/// Surface shown inside a user-created desktop folder window.
pub const FOLDER_MODULE: AppModule = AppModule::new(mount_folder);

fn mount_explorer(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-explorer" close=context.close>
            <p>"Quick access"</p>
            <ul class="app-list">
                <li>"Desktop"</li>
                <li>"Documents"</li>
                <li>"Downloads"</li>
                <li>"Pictures"</li>
            </ul>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_recycle_bin(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-recycle-bin" close=context.close>
            <p>"Recycle Bin is empty."</p>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_files(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-files" close=context.close>
            <ul class="app-list">
                <li>"Documents/"</li>
                <li>"Music/"</li>
                <li>"Pictures/"</li>
                <li>"readme.txt"</li>
            </ul>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_browser(context: AppMountContext) -> View {
    let address = create_rw_signal(String::from("https://example.com"));
    view! {
        <PlaceholderSurface surface_class="app-browser" close=context.close>
            <input
                class="app-address-bar"
                type="text"
                prop:value=move || address.get()
                on:input=move |ev| address.set(event_target_value(&ev))
            />
            <p>{move || format!("Viewing {}", address.get())}</p>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_audio(context: AppMountContext) -> View {
    let playing = create_rw_signal(false);
    view! {
        <PlaceholderSurface surface_class="app-audio" close=context.close>
            <button type="button" on:click=move |_| playing.update(|p| *p = !*p)>
                {move || if playing.get() { "Pause" } else { "Play" }}
            </button>
            <span>{move || if playing.get() { "Now playing" } else { "Stopped" }}</span>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_settings(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-settings" close=context.close>
            <p>"System"</p>
            <p>"Personalization"</p>
            <p>"Accounts"</p>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_photos(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-photos" close=context.close>
            <p>"No photos imported yet."</p>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_calculator(context: AppMountContext) -> View {
    let input = create_rw_signal(String::new());
    view! {
        <PlaceholderSurface surface_class="app-calculator" close=context.close>
            <output class="app-display">{move || input.get()}</output>
            <div class="app-keypad">
                {["7", "8", "9", "4", "5", "6", "1", "2", "3", "0"]
                    .into_iter()
                    .map(|digit| {
                        view! {
                            <button type="button" on:click=move |_| input.update(|s| s.push_str(digit))>
                                {digit}
                            </button>
                        }
                    })
                    .collect_view()}
                <button type="button" on:click=move |_| input.set(String::new())>"C"</button>
            </div>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_notepad(context: AppMountContext) -> View {
    let text = create_rw_signal(String::new());
    view! {
        <PlaceholderSurface surface_class="app-notepad" close=context.close>
            <textarea
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <span>{move || format!("{} characters", text.get().chars().count())}</span>
        </PlaceholderSurface>
    }
    .into_view()
}

fn mount_folder(context: AppMountContext) -> View {
    view! {
        <PlaceholderSurface surface_class="app-folder" close=context.close>
            <p>"This folder is empty."</p>
        </PlaceholderSurface>
    }
    .into_view()
}

#[component]
fn PlaceholderSurface(
    surface_class: &'static str,
    close: AppCloseHandle,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("app-shell {surface_class}")>
            <div class="app-body">{children()}</div>
            <div class="app-statusbar">
                <button type="button" class="app-action" on:click=move |_| close.close()>
                    "Exit"
                </button>
            </div>
        </div>
    }
}
