//! Reducer actions, side-effect intents, and transition logic for the desktop session.

use thiserror::Error;

use crate::{
    apps,
    context_menu::{ContextMenuOrigin, DesktopMenuItem, FolderMenuItem, MenuExclusion, MenuSite},
    model::{
        DesktopState, DragSession, FolderId, InteractionState, LaunchTarget, PointerPosition,
        ResizeEdge, ResizeSession, WindowId, WindowRecord,
    },
    power::{DisplayMode, PowerAction},
    window_manager::{
        normalize_window_stack, raise_window, resize_rect, WindowMode, WindowPresentation,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window for a catalog app or a desktop folder.
    Launch {
        /// What the new window hosts.
        target: LaunchTarget,
    },
    /// Close a window by handle.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack without changing its mode.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a Normal window.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Title-bar maximize button and double-click.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Toggle taskbar behavior for a window (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Right-click on the desktop surface.
    OpenContextMenu {
        /// What was under the pointer.
        origin: ContextMenuOrigin,
        /// Menu anchor.
        pointer: PointerPosition,
    },
    /// Background click or Escape: hide every context menu.
    DismissContextMenus,
    /// Run an entry of the desktop background menu.
    ActivateDesktopMenuItem {
        /// Chosen entry.
        item: DesktopMenuItem,
    },
    /// Run an entry of the folder menu against its current target.
    ActivateFolderMenuItem {
        /// Chosen entry.
        item: FolderMenuItem,
    },
    /// Apply a rename entered at the rename prompt.
    RenameFolder {
        /// Folder to rename.
        folder_id: FolderId,
        /// Raw prompt input.
        name: String,
    },
    /// Hide the one-shot welcome banner.
    DismissWelcome,
    /// Taskbar status button: open or close the quick-settings panel.
    ToggleQuickSettings,
    /// Brightness slider moved.
    SetBrightness {
        /// New level in percent.
        percent: u16,
    },
    /// Volume slider moved.
    SetVolume {
        /// New level in percent.
        percent: u16,
    },
    /// Quick-settings "Clear All".
    ClearNotifications,
    /// Start-menu Power button: open or close the power drop-up.
    TogglePowerMenu,
    /// Choose a power drop-up entry. Sleep and Lock ask for confirmation first.
    RequestPowerAction {
        /// Chosen entry.
        action: PowerAction,
    },
    /// Run a power action that needs no further confirmation.
    ApplyPowerAction {
        /// Action to run.
        action: PowerAction,
    },
    /// The shutdown notice elapsed: blank the screen completely.
    CompleteShutdown,
    /// Click on a blank screen.
    WakeDisplay,
    /// Lock-screen "Click to unlock".
    ShowUnlockPrompt,
    /// Lock-screen PIN submitted.
    SubmitUnlockPin {
        /// PIN as typed.
        pin: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Reload the whole shell surface.
    ReloadShell,
    /// Ask the user for a new folder name and dispatch [`DesktopAction::RenameFolder`].
    PromptFolderRename {
        /// Folder being renamed.
        folder_id: FolderId,
        /// Name pre-filled in the prompt.
        current_name: String,
    },
    /// Ask the user to confirm a power action and dispatch [`DesktopAction::ApplyPowerAction`].
    ConfirmPowerAction {
        /// Action awaiting confirmation.
        action: PowerAction,
    },
    /// Dispatch [`DesktopAction::CompleteShutdown`] after `delay_ms`.
    ScheduleShutdownComplete {
        /// Delay before the screen goes fully black.
        delay_ms: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a closed window).
pub enum ReducerError {
    /// The target window handle was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Folder references that are no longer valid (stale launches, renames or deletes of removed
/// folders, blank rename input) are absorbed as no-ops.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window handle that is
/// not open.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Launch { target } => {
            let Some((title, icon_ref)) = resolve_launch_target(state, target) else {
                return Ok(effects);
            };
            let window_id = next_window_id(state);
            let slot = i32::try_from(window_id.0.saturating_sub(1) % 8).unwrap_or(0);
            let cascade = slot * state.config.cascade_step_px;
            let rect = state.config.default_window.offset(cascade, cascade);
            state.windows.push(WindowRecord {
                id: window_id,
                target,
                title,
                icon_ref,
                presentation: WindowPresentation::new(rect),
                z_index: 0,
                is_focused: false,
            });
            raise_window(state, window_id);
            close_start_menu(state);
            state.quick_settings.close();
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.resizing = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if !raise_window(state, window_id) {
                return Err(ReducerError::WindowNotFound);
            }
            close_start_menu(state);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.presentation.minimize();
            window.is_focused = false;
        }
        DesktopAction::MaximizeWindow { window_id } => {
            find_window_mut(state, window_id)?.presentation.maximize();
            raise_window(state, window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            find_window_mut(state, window_id)?.presentation.restore();
            raise_window(state, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            find_window_mut(state, window_id)?
                .presentation
                .toggle_maximize();
            raise_window(state, window_id);
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let focused = state.focused_window_id() == Some(window_id);
            let minimized = state
                .window(window_id)
                .map(WindowRecord::is_minimized)
                .ok_or(ReducerError::WindowNotFound)?;
            let next = if minimized {
                DesktopAction::RestoreWindow { window_id }
            } else if focused {
                DesktopAction::MinimizeWindow { window_id }
            } else {
                DesktopAction::FocusWindow { window_id }
            };
            effects.extend(reduce_desktop(state, interaction, next)?);
        }
        DesktopAction::ToggleStartMenu => {
            if state.start_menu_open {
                close_start_menu(state);
            } else {
                state.start_menu_open = true;
                state.menus.hide_all();
            }
        }
        DesktopAction::CloseStartMenu => {
            close_start_menu(state);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let presentation = find_window_mut(state, window_id)?.presentation;
            raise_window(state, window_id);
            if presentation.mode() == WindowMode::Normal {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start: presentation.rect(),
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                window
                    .presentation
                    .set_rect(session.rect_start.offset(dx, dy));
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let presentation = find_window_mut(state, window_id)?.presentation;
            raise_window(state, window_id);
            if presentation.mode() == WindowMode::Normal {
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    rect_start: presentation.rect(),
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                window
                    .presentation
                    .set_rect(resize_rect(session.rect_start, session.edge, dx, dy));
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::OpenContextMenu { origin, pointer } => {
            close_start_menu(state);
            match origin {
                ContextMenuOrigin::Background => {
                    state
                        .menus
                        .show_at(MenuSite::Desktop, pointer.x, pointer.y, None);
                }
                ContextMenuOrigin::FolderIcon(folder_id) if state.folders.contains(folder_id) => {
                    state.menus.hide(MenuSite::Desktop);
                    state
                        .menus
                        .show_at(MenuSite::Folder, pointer.x, pointer.y, Some(folder_id));
                }
                ContextMenuOrigin::AppIcon(_) | ContextMenuOrigin::FolderIcon(_) => {
                    match state.menus.exclusion() {
                        MenuExclusion::Global => state.menus.hide_all(),
                        MenuExclusion::PerSite => state.menus.hide(MenuSite::Desktop),
                    }
                }
            }
        }
        DesktopAction::DismissContextMenus => {
            state.menus.hide_all();
        }
        DesktopAction::ActivateDesktopMenuItem { item } => {
            state.menus.hide(MenuSite::Desktop);
            match item {
                DesktopMenuItem::Refresh => effects.push(RuntimeEffect::ReloadShell),
                DesktopMenuItem::NewFolder => {
                    state.folders.create();
                }
                DesktopMenuItem::ChangeBackground => {
                    let count = state.config.background_count();
                    state.ambient.background_index = state.ambient.background_index % count + 1;
                }
            }
        }
        DesktopAction::ActivateFolderMenuItem { item } => {
            let target = state.menus.menu(MenuSite::Folder).active_target();
            state.menus.hide(MenuSite::Folder);
            let Some(folder) = target.and_then(|id| state.folders.get(id)) else {
                return Ok(effects);
            };
            let folder_id = folder.id;
            match item {
                FolderMenuItem::Rename => effects.push(RuntimeEffect::PromptFolderRename {
                    folder_id,
                    current_name: folder.name.clone(),
                }),
                FolderMenuItem::Delete => {
                    state.folders.delete(folder_id);
                }
            }
        }
        DesktopAction::RenameFolder { folder_id, name } => {
            if state.folders.rename(folder_id, &name) {
                sync_folder_window_titles(state, folder_id);
            }
        }
        DesktopAction::DismissWelcome => {
            state.ambient.welcome_visible = false;
        }
        DesktopAction::ToggleQuickSettings => state.quick_settings.toggle(),
        DesktopAction::SetBrightness { percent } => state.quick_settings.set_brightness(percent),
        DesktopAction::SetVolume { percent } => state.quick_settings.set_volume(percent),
        DesktopAction::ClearNotifications => state.quick_settings.clear_notifications(),
        DesktopAction::TogglePowerMenu => {
            if state.start_menu_open {
                state.power.menu_open = !state.power.menu_open;
            }
        }
        DesktopAction::RequestPowerAction { action } => {
            state.power.menu_open = false;
            if action.confirm_message().is_some() {
                effects.push(RuntimeEffect::ConfirmPowerAction { action });
            } else {
                effects.extend(apply_power_action(state, action));
            }
        }
        DesktopAction::ApplyPowerAction { action } => {
            effects.extend(apply_power_action(state, action));
        }
        DesktopAction::CompleteShutdown => {
            if state.power.display == DisplayMode::ShuttingDown {
                state.power.display = DisplayMode::Off;
            }
        }
        DesktopAction::WakeDisplay => {
            state.power.display = DisplayMode::On;
        }
        DesktopAction::ShowUnlockPrompt => state.power.lock.show_pin_prompt(),
        DesktopAction::SubmitUnlockPin { pin } => {
            let expected = state.config.unlock_pin.clone();
            state.power.lock.submit_pin(&pin, &expected);
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

/// Hides the start menu together with its power drop-up.
fn close_start_menu(state: &mut DesktopState) {
    state.start_menu_open = false;
    state.power.menu_open = false;
}

fn apply_power_action(state: &mut DesktopState, action: PowerAction) -> Option<RuntimeEffect> {
    match action {
        PowerAction::Restart => Some(RuntimeEffect::ReloadShell),
        PowerAction::ShutDown => {
            state.power.display = DisplayMode::ShuttingDown;
            Some(RuntimeEffect::ScheduleShutdownComplete {
                delay_ms: state.config.shutdown_notice_ms,
            })
        }
        PowerAction::Sleep => {
            state.power.display = DisplayMode::Asleep;
            None
        }
        PowerAction::Lock => {
            state.power.lock.lock();
            None
        }
    }
}

/// Resolves the title and icon for a launch, or `None` for a folder that no longer exists.
fn resolve_launch_target(state: &DesktopState, target: LaunchTarget) -> Option<(String, String)> {
    match target {
        LaunchTarget::App(app_id) => Some(
            apps::app_descriptor(app_id)
                .map(|d| (d.display_name.clone(), d.icon_ref.clone()))
                .unwrap_or_else(|| (app_id.to_string(), String::new())),
        ),
        LaunchTarget::Folder(folder_id) => state
            .folders
            .get(folder_id)
            .map(|folder| (folder.name.clone(), folder.icon_ref.clone())),
    }
}

fn sync_folder_window_titles(state: &mut DesktopState, folder_id: FolderId) {
    let Some(name) = state.folders.get(folder_id).map(|f| f.name.clone()) else {
        return;
    };
    for window in &mut state.windows {
        if window.target == LaunchTarget::Folder(folder_id) {
            window.title = name.clone();
        }
    }
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}
