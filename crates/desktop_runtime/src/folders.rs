//! In-memory store of user-created desktop folders.

use crate::model::{Folder, FolderId};

/// Owns the desktop folder collection. Append order is desktop display order.
///
/// Ids come from a monotonic counter owned by the store, so folders created back to back
/// never collide and ids are not reused after a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderStore {
    folders: Vec<Folder>,
    next_id: u64,
    icon_ref: String,
}

impl Default for FolderStore {
    fn default() -> Self {
        Self::with_icon(String::new())
    }
}

impl FolderStore {
    /// Creates an empty store whose folders use `icon_ref` as their icon.
    pub fn with_icon(icon_ref: String) -> Self {
        Self {
            folders: Vec::new(),
            next_id: 1,
            icon_ref,
        }
    }

    /// Creates a folder named `New Folder {n}` where `n` is the current count plus one.
    pub fn create(&mut self) -> Folder {
        let id = FolderId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let folder = Folder {
            id,
            name: format!("New Folder {}", self.folders.len() + 1),
            icon_ref: self.icon_ref.clone(),
        };
        self.folders.push(folder.clone());
        folder
    }

    /// Renames a folder. Blank names and unknown ids are ignored.
    ///
    /// Returns `true` when the folder name changed.
    pub fn rename(&mut self, id: FolderId, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        if folder.name == trimmed {
            return false;
        }
        folder.name = trimmed.to_string();
        true
    }

    /// Removes a folder. Returns `true` when a folder was removed.
    pub fn delete(&mut self, id: FolderId) -> bool {
        let before = self.folders.len();
        self.folders.retain(|f| f.id != id);
        self.folders.len() != before
    }

    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FolderId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn back_to_back_creates_get_distinct_ids_and_numbered_names() {
        let mut store = FolderStore::default();
        let first = store.create();
        let second = store.create();

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "New Folder 1");
        assert_eq!(second.name, "New Folder 2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn default_name_follows_current_count_after_delete() {
        let mut store = FolderStore::default();
        let first = store.create();
        let _second = store.create();
        store.delete(first.id);

        let third = store.create();
        assert_eq!(third.name, "New Folder 2");
        assert!(store.iter().all(|f| f.id != first.id));
        assert_ne!(third.id, first.id);
    }

    #[test]
    fn blank_rename_keeps_original_name() {
        let mut store = FolderStore::default();
        let folder = store.create();

        assert!(!store.rename(folder.id, ""));
        assert!(!store.rename(folder.id, "   "));
        assert_eq!(store.get(folder.id).unwrap().name, "New Folder 1");

        assert!(store.rename(folder.id, "Reports"));
        assert_eq!(store.get(folder.id).unwrap().name, "Reports");
    }

    #[test]
    fn rename_and_delete_of_unknown_id_are_noops() {
        let mut store = FolderStore::default();
        let folder = store.create();
        let before = store.clone();

        assert!(!store.rename(FolderId(99), "Ghost"));
        assert!(!store.delete(FolderId(99)));
        assert_eq!(store, before);
        assert!(store.contains(folder.id));
    }

    #[test]
    fn new_folders_use_configured_icon() {
        let mut store = FolderStore::with_icon("folder.png".to_string());
        assert_eq!(store.create().icon_ref, "folder.png");
    }
}
