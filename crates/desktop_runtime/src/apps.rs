//! App catalog lookups and the mapping from launch targets to app modules.

use std::sync::OnceLock;

use desktop_app_contract::AppModule;
use leptos::logging;
use serde::Deserialize;

use crate::model::{AppId, LaunchTarget};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq)]
/// Catalog metadata for one desktop app.
pub struct AppDescriptor {
    /// Stable app identifier.
    pub app_id: AppId,
    /// Window title and desktop icon label.
    pub display_name: String,
    /// Icon image reference.
    pub icon_ref: String,
    /// Whether the app has a desktop icon.
    pub show_on_desktop: bool,
    /// Whether the app appears in the start menu.
    pub show_in_launcher: bool,
    /// Start-menu label, when it differs from the display name.
    pub launcher_label: Option<String>,
    /// Whether the taskbar carries a pinned launcher for the app.
    pub pinned: bool,
    /// Pinned taskbar label.
    pub taskbar_label: Option<String>,
}

impl AppDescriptor {
    /// Label shown in the start menu.
    pub fn launcher_label(&self) -> &str {
        self.launcher_label.as_deref().unwrap_or(&self.display_name)
    }

    /// Label shown on the pinned taskbar launcher.
    pub fn taskbar_label(&self) -> &str {
        self.taskbar_label.as_deref().unwrap_or(&self.display_name)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    app_id: String,
    display_name: String,
    icon_ref: String,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    show_in_launcher: bool,
    #[serde(default)]
    launcher_label: Option<String>,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    taskbar_label: Option<String>,
}

fn parse_catalog(raw: &str) -> Vec<AppDescriptor> {
    let entries: Vec<CatalogEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("app catalog decode failed: {err}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let Some(app_id) = AppId::parse(&entry.app_id) else {
                logging::warn!("skipping unknown catalog app id `{}`", entry.app_id);
                return None;
            };
            Some(AppDescriptor {
                app_id,
                display_name: entry.display_name,
                icon_ref: entry.icon_ref,
                show_on_desktop: entry.show_on_desktop,
                show_in_launcher: entry.show_in_launcher,
                launcher_label: entry.launcher_label,
                pinned: entry.pinned,
                taskbar_label: entry.taskbar_label,
            })
        })
        .collect()
}

/// Returns the catalog in desktop icon order.
pub fn app_registry() -> &'static [AppDescriptor] {
    static REGISTRY: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| parse_catalog(APP_CATALOG_JSON))
}

/// Looks up the descriptor for `app_id`.
pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

pub fn desktop_icon_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.show_on_desktop)
}

pub fn launcher_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.show_in_launcher)
}

pub fn pinned_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.pinned)
}

/// Resolves the module mounted inside a window for `target`.
pub fn app_module(target: LaunchTarget) -> AppModule {
    use desktop_app_placeholders as modules;

    match target {
        LaunchTarget::Folder(_) => modules::FOLDER_MODULE,
        LaunchTarget::App(app_id) => match app_id {
            AppId::Explorer => modules::EXPLORER_MODULE,
            AppId::RecycleBin => modules::RECYCLE_BIN_MODULE,
            AppId::Files => modules::FILES_MODULE,
            AppId::Browser => modules::BROWSER_MODULE,
            AppId::Audio => modules::AUDIO_MODULE,
            AppId::Settings => modules::SETTINGS_MODULE,
            AppId::Photos => modules::PHOTOS_MODULE,
            AppId::Calculator => modules::CALCULATOR_MODULE,
            AppId::Notepad => modules::NOTEPAD_MODULE,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_covers_every_app_in_desktop_order() {
        let ids: Vec<AppId> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        assert!(desktop_icon_apps().count() == AppId::ALL.len());
    }

    #[test]
    fn launcher_and_pinned_labels_follow_catalog() {
        let launcher: Vec<(AppId, &str)> = launcher_apps()
            .map(|entry| (entry.app_id, entry.launcher_label()))
            .collect();
        assert_eq!(
            launcher,
            vec![
                (AppId::Explorer, "Explorer"),
                (AppId::Files, "File"),
                (AppId::Browser, "Browser"),
                (AppId::Audio, "Music"),
                (AppId::Settings, "Settings"),
                (AppId::Photos, "Photos"),
            ]
        );

        let pinned: Vec<&str> = pinned_apps().map(AppDescriptor::taskbar_label).collect();
        assert_eq!(pinned, vec!["Explorer", "Files", "Browser"]);
    }

    #[test]
    fn descriptor_lookup_returns_display_names() {
        let files = app_descriptor(AppId::Files).expect("files descriptor");
        assert_eq!(files.display_name, "File Explorer");
        assert_eq!(
            app_descriptor(AppId::RecycleBin).map(|d| d.display_name.as_str()),
            Some("Recycle Bin")
        );
    }

    #[test]
    fn unknown_catalog_ids_are_skipped() {
        let parsed = parse_catalog(
            r#"[
                {"app_id": "calculator", "display_name": "Calc", "icon_ref": "c.png"},
                {"app_id": "paint", "display_name": "Paint", "icon_ref": "p.png"}
            ]"#,
        );
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].app_id, AppId::Calculator);
        assert!(!parsed[0].show_on_desktop);
        assert_eq!(parsed[0].launcher_label(), "Calc");
    }
}
