use serde::{Deserialize, Serialize};

use crate::{
    config::ShellConfig, context_menu::ContextMenuController, folders::FolderStore,
    power::PowerState, quick_settings::QuickSettings, window_manager::WindowPresentation,
};

pub const DEFAULT_WINDOW_WIDTH: i32 = 560;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 380;

/// Handle of one open window instance. Handles are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Identity of a user-created desktop folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FolderId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Explorer,
    RecycleBin,
    Files,
    Browser,
    Audio,
    Settings,
    Photos,
    Calculator,
    Notepad,
}

impl AppId {
    pub const ALL: [AppId; 9] = [
        Self::Explorer,
        Self::RecycleBin,
        Self::Files,
        Self::Browser,
        Self::Audio,
        Self::Settings,
        Self::Photos,
        Self::Calculator,
        Self::Notepad,
    ];

    /// Plain catalog identifier, as used by launchers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::RecycleBin => "recyclebin",
            Self::Files => "files",
            Self::Browser => "browser",
            Self::Audio => "audio",
            Self::Settings => "settings",
            Self::Photos => "photos",
            Self::Calculator => "calculator",
            Self::Notepad => "notepad",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw.trim())
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a window instance hosts: a catalog app or a desktop folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LaunchTarget {
    App(AppId),
    Folder(FolderId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// A user-created desktop folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub icon_ref: String,
}

/// One open window instance and its presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub target: LaunchTarget,
    /// Last-known title; kept in sync with folder renames while the folder exists.
    pub title: String,
    pub icon_ref: String,
    pub presentation: WindowPresentation,
    pub z_index: u32,
    pub is_focused: bool,
}

impl WindowRecord {
    pub fn is_minimized(&self) -> bool {
        self.presentation.is_minimized()
    }

    pub fn is_maximized(&self) -> bool {
        self.presentation.is_maximized()
    }
}

/// Cosmetic shell state with no bearing on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientState {
    /// 1-based index into the configured backgrounds.
    pub background_index: u8,
    pub welcome_visible: bool,
}

impl Default for AmbientState {
    fn default() -> Self {
        Self {
            background_index: 1,
            welcome_visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub folders: FolderStore,
    pub menus: ContextMenuController,
    pub start_menu_open: bool,
    pub quick_settings: QuickSettings,
    pub power: PowerState,
    pub ambient: AmbientState,
    pub config: ShellConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(ShellConfig::default())
    }
}

impl DesktopState {
    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            folders: FolderStore::with_icon(config.folder_icon.clone()),
            menus: ContextMenuController::new(config.menu_exclusion),
            start_menu_open: false,
            quick_settings: QuickSettings::default(),
            power: PowerState::default(),
            ambient: AmbientState::default(),
            config,
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Resolves the title shown for a window: the live folder name when the folder still
    /// exists, otherwise the record's last-known title.
    pub fn window_title(&self, window: &WindowRecord) -> String {
        match window.target {
            LaunchTarget::Folder(folder_id) => self
                .folders
                .get(folder_id)
                .map(|folder| folder.name.clone())
                .unwrap_or_else(|| window.title.clone()),
            LaunchTarget::App(_) => window.title.clone(),
        }
    }

    /// Current background URL for the 1-based background counter.
    pub fn background_url(&self) -> Option<&str> {
        let index = usize::from(self.ambient.background_index.max(1)) - 1;
        self.config.backgrounds.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launch_target_serializes_as_tagged_variant() {
        let app = serde_json::to_value(LaunchTarget::App(AppId::RecycleBin)).unwrap();
        assert_eq!(app, serde_json::json!({ "kind": "app", "id": "recyclebin" }));

        let folder: LaunchTarget =
            serde_json::from_value(serde_json::json!({ "kind": "folder", "id": 7 })).unwrap();
        assert_eq!(folder, LaunchTarget::Folder(FolderId(7)));
    }

    #[test]
    fn app_id_parse_accepts_plain_catalog_identifiers() {
        assert_eq!(AppId::parse("calculator"), Some(AppId::Calculator));
        assert_eq!(AppId::parse(" files "), Some(AppId::Files));
        assert_eq!(AppId::parse("paint"), None);
        assert!(AppId::ALL.iter().all(|id| AppId::parse(id.as_str()) == Some(*id)));
    }

    #[test]
    fn detached_folder_window_keeps_last_known_title() {
        let mut state = DesktopState::default();
        let folder = state.folders.create();
        let record = WindowRecord {
            id: WindowId(1),
            target: LaunchTarget::Folder(folder.id),
            title: "Taxes".to_string(),
            icon_ref: folder.icon_ref.clone(),
            presentation: WindowPresentation::new(WindowRect::default()),
            z_index: 1,
            is_focused: true,
        };
        assert_eq!(state.window_title(&record), "New Folder 1");

        state.folders.delete(folder.id);
        assert_eq!(state.window_title(&record), "Taxes");
    }
}
