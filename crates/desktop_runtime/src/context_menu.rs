//! Position-anchored popup menu state for the desktop background and folder icons.

use serde::{Deserialize, Serialize};

use crate::model::{AppId, FolderId};

/// Fixed UI location that owns one popup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuSite {
    Desktop,
    Folder,
}

/// How visible menus at different sites interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuExclusion {
    /// At most one menu is visible across all sites.
    #[default]
    Global,
    /// Each site shows and hides independently.
    PerSite,
}

/// Where a right-click landed on the desktop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextMenuOrigin {
    /// Empty desktop space.
    Background,
    /// The body of a catalog app icon. Suppressed: no menu opens.
    AppIcon(AppId),
    /// The body of a folder icon.
    FolderIcon(FolderId),
}

/// Entries of the desktop background menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesktopMenuItem {
    Refresh,
    NewFolder,
    ChangeBackground,
}

impl DesktopMenuItem {
    pub const ALL: [DesktopMenuItem; 3] = [Self::Refresh, Self::NewFolder, Self::ChangeBackground];

    pub fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::NewFolder => "New Folder",
            Self::ChangeBackground => "Change Background",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Refresh => "desktop-context-menu-item-refresh",
            Self::NewFolder => "desktop-context-menu-item-new-folder",
            Self::ChangeBackground => "desktop-context-menu-item-background",
        }
    }
}

/// Entries of the per-folder menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderMenuItem {
    Rename,
    Delete,
}

impl FolderMenuItem {
    pub const ALL: [FolderMenuItem; 2] = [Self::Rename, Self::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Rename => "folder-context-menu-item-rename",
            Self::Delete => "folder-context-menu-item-delete",
        }
    }
}

/// Show/hide/anchor state machine for a single menu site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextMenu {
    pub visible: bool,
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub target: Option<FolderId>,
}

impl ContextMenu {
    pub fn show_at(&mut self, x: i32, y: i32, target: Option<FolderId>) {
        self.visible = true;
        self.anchor_x = x;
        self.anchor_y = y;
        self.target = target;
    }

    /// Hides the menu; the last anchor and target are kept for the closing render.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Target of a visible menu.
    pub fn active_target(&self) -> Option<FolderId> {
        self.visible.then_some(self.target).flatten()
    }
}

/// Coordinates the per-site menus under a [`MenuExclusion`] policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenuController {
    desktop: ContextMenu,
    folder: ContextMenu,
    exclusion: MenuExclusion,
}

impl ContextMenuController {
    pub fn new(exclusion: MenuExclusion) -> Self {
        Self {
            exclusion,
            ..Self::default()
        }
    }

    pub fn menu(&self, site: MenuSite) -> &ContextMenu {
        match site {
            MenuSite::Desktop => &self.desktop,
            MenuSite::Folder => &self.folder,
        }
    }

    fn menu_mut(&mut self, site: MenuSite) -> &mut ContextMenu {
        match site {
            MenuSite::Desktop => &mut self.desktop,
            MenuSite::Folder => &mut self.folder,
        }
    }

    pub fn is_visible(&self, site: MenuSite) -> bool {
        self.menu(site).visible
    }

    pub fn any_visible(&self) -> bool {
        self.desktop.visible || self.folder.visible
    }

    /// Shows the menu at `site`. Under [`MenuExclusion::Global`] every other site is hidden.
    pub fn show_at(&mut self, site: MenuSite, x: i32, y: i32, target: Option<FolderId>) {
        if self.exclusion == MenuExclusion::Global {
            self.hide_all();
        }
        self.menu_mut(site).show_at(x, y, target);
    }

    pub fn hide(&mut self, site: MenuSite) {
        self.menu_mut(site).hide();
    }

    pub fn hide_all(&mut self) {
        self.desktop.hide();
        self.folder.hide();
    }

    pub fn exclusion(&self) -> MenuExclusion {
        self.exclusion
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show_sets_anchor_and_target() {
        let mut menus = ContextMenuController::default();
        menus.show_at(MenuSite::Folder, 12, 34, Some(FolderId(7)));

        let menu = menus.menu(MenuSite::Folder);
        assert!(menu.visible);
        assert_eq!((menu.anchor_x, menu.anchor_y), (12, 34));
        assert_eq!(menu.active_target(), Some(FolderId(7)));
    }

    #[test]
    fn global_exclusion_hides_other_sites() {
        let mut menus = ContextMenuController::new(MenuExclusion::Global);
        menus.show_at(MenuSite::Folder, 1, 1, Some(FolderId(1)));
        menus.show_at(MenuSite::Desktop, 5, 5, None);

        assert!(menus.is_visible(MenuSite::Desktop));
        assert!(!menus.is_visible(MenuSite::Folder));
    }

    #[test]
    fn per_site_exclusion_allows_both_menus() {
        let mut menus = ContextMenuController::new(MenuExclusion::PerSite);
        menus.show_at(MenuSite::Folder, 1, 1, Some(FolderId(1)));
        menus.show_at(MenuSite::Desktop, 5, 5, None);

        assert!(menus.is_visible(MenuSite::Desktop));
        assert!(menus.is_visible(MenuSite::Folder));

        menus.hide_all();
        assert!(!menus.any_visible());
    }

    #[test]
    fn hidden_menu_has_no_active_target() {
        let mut menu = ContextMenu::default();
        menu.show_at(0, 0, Some(FolderId(3)));
        menu.hide();
        assert_eq!(menu.active_target(), None);
        assert_eq!(menu.target, Some(FolderId(3)));
    }
}
