use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const KNOWN_APP_IDS: [&str; 9] = [
    "explorer",
    "recyclebin",
    "files",
    "browser",
    "audio",
    "settings",
    "photos",
    "calculator",
    "notepad",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalogEntry {
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

#[derive(Debug, Clone, Deserialize)]
struct AppCatalogFile {
    schema_version: u32,
    apps: Vec<AppCatalogEntry>,
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn write_generated(out_dir: &Path, file_name: &str, doc: &str, const_name: &str, json: &str) {
    let generated = format!(
        "/// {doc}\n\
#[allow(dead_code)]\n\
pub const {const_name}: &str = r##\"{json}\"##;\n"
    );
    let out_file = out_dir.join(file_name);
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

fn validate_catalog(path: &Path, catalog: &AppCatalogFile) {
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.apps {
        if !KNOWN_APP_IDS.contains(&entry.app_id.as_str()) {
            panic!("unknown app id `{}` in {}", entry.app_id, path.display());
        }
        if !seen.insert(entry.app_id.as_str()) {
            panic!("duplicate app id `{}` in {}", entry.app_id, path.display());
        }
        if entry.display_name.trim().is_empty() {
            panic!("app `{}` has an empty display name", entry.app_id);
        }
        if entry.show_in_launcher && entry.launcher_label.is_none() {
            panic!("launcher app `{}` needs a launcher_label", entry.app_id);
        }
        if entry.pinned && entry.taskbar_label.is_none() {
            panic!("pinned app `{}` needs a taskbar_label", entry.app_id);
        }
    }

    let missing: Vec<_> = KNOWN_APP_IDS
        .iter()
        .filter(|id| !seen.contains(**id))
        .collect();
    if !missing.is_empty() {
        panic!("catalog {} is missing apps: {missing:?}", path.display());
    }
}

fn validate_shell_config(path: &Path, config: &toml::Table) {
    if let Some(mode) = config.get("menu_exclusion") {
        match mode.as_str() {
            Some("global" | "per-site") => {}
            _ => panic!(
                "menu_exclusion in {} must be \"global\" or \"per-site\"",
                path.display()
            ),
        }
    }
    if let Some(backgrounds) = config.get("backgrounds") {
        let ok = backgrounds
            .as_array()
            .is_some_and(|list| !list.is_empty() && list.iter().all(|url| url.is_str()));
        if !ok {
            panic!(
                "backgrounds in {} must be a non-empty list of URLs",
                path.display()
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));

    let catalog_path = crate_root.join("app_catalog.toml");
    let catalog: AppCatalogFile = read_toml(&catalog_path);
    validate_catalog(&catalog_path, &catalog);
    let catalog_json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    write_generated(
        &out_dir,
        "app_catalog_generated.rs",
        "Build-time generated app catalog JSON.",
        "APP_CATALOG_JSON",
        &catalog_json,
    );

    let config_path = crate_root.join("shell.config.toml");
    let config: toml::Table = read_toml(&config_path);
    validate_shell_config(&config_path, &config);
    let config_json = serde_json::to_string_pretty(&config).expect("serialize shell config");
    write_generated(
        &out_dir,
        "shell_config_generated.rs",
        "Build-time generated shell configuration JSON.",
        "SHELL_CONFIG_JSON",
        &config_json,
    );
}
