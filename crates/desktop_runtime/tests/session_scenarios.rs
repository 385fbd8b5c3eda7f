use desktop_runtime::{
    reduce_desktop, AppId, ContextMenuOrigin, DesktopAction, DesktopMenuItem, DesktopState,
    DisplayMode, FolderMenuItem, InteractionState, LaunchTarget, MenuExclusion, MenuSite,
    PointerPosition, PowerAction, RuntimeEffect, ShellConfig, WindowId, WindowMode,
};
use pretty_assertions::assert_eq;

struct Session {
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    fn with_config(config: ShellConfig) -> Self {
        Self {
            state: DesktopState::with_config(config),
            interaction: InteractionState::default(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.interaction, action).expect("reduce")
    }

    fn open(&mut self, target: LaunchTarget) -> WindowId {
        let before = self.state.windows.len();
        self.dispatch(DesktopAction::Launch { target });
        assert_eq!(self.state.windows.len(), before + 1);
        self.state.windows.last().expect("opened window").id
    }

    fn right_click(&mut self, origin: ContextMenuOrigin) {
        self.dispatch(DesktopAction::OpenContextMenu {
            origin,
            pointer: PointerPosition { x: 120, y: 80 },
        });
    }

    fn mode(&self, window_id: WindowId) -> WindowMode {
        self.state
            .window(window_id)
            .expect("window")
            .presentation
            .mode()
    }

    /// Runs a rename prompt the way the shell executor does, answering with `answer`.
    fn answer_rename_prompt(&mut self, effects: Vec<RuntimeEffect>, answer: Option<&str>) {
        for effect in effects {
            if let RuntimeEffect::PromptFolderRename { folder_id, .. } = effect {
                if let Some(name) = answer {
                    self.dispatch(DesktopAction::RenameFolder {
                        folder_id,
                        name: name.to_string(),
                    });
                }
            }
        }
    }
}

#[test]
fn folder_survives_minimize_while_another_app_comes_and_goes() {
    let mut session = Session::new();

    session.right_click(ContextMenuOrigin::Background);
    session.dispatch(DesktopAction::ActivateDesktopMenuItem {
        item: DesktopMenuItem::NewFolder,
    });
    let folder_id = session.state.folders.iter().next().expect("folder").id;

    session.right_click(ContextMenuOrigin::FolderIcon(folder_id));
    let effects = session.dispatch(DesktopAction::ActivateFolderMenuItem {
        item: FolderMenuItem::Rename,
    });
    session.answer_rename_prompt(effects, Some("Taxes"));

    let folder_window = session.open(LaunchTarget::Folder(folder_id));
    session.dispatch(DesktopAction::MinimizeWindow {
        window_id: folder_window,
    });
    let calculator = session.open(LaunchTarget::App(AppId::Calculator));
    session.dispatch(DesktopAction::CloseWindow {
        window_id: calculator,
    });
    session.dispatch(DesktopAction::RestoreWindow {
        window_id: folder_window,
    });

    assert_eq!(session.state.windows.len(), 1);
    let record = session.state.window(folder_window).expect("folder window");
    assert_eq!(session.state.window_title(record), "Taxes");
    assert_eq!(session.mode(folder_window), WindowMode::Normal);
    assert_eq!(session.state.focused_window_id(), Some(folder_window));
}

#[test]
fn cancelled_rename_prompt_changes_nothing() {
    let mut session = Session::new();
    let folder = session.state.folders.create();
    let before = session.state.clone();

    session.right_click(ContextMenuOrigin::FolderIcon(folder.id));
    let effects = session.dispatch(DesktopAction::ActivateFolderMenuItem {
        item: FolderMenuItem::Rename,
    });
    session.answer_rename_prompt(effects, None);

    assert_eq!(session.state.folders, before.folders);
    assert!(!session.state.menus.any_visible());
}

#[test]
fn handles_are_never_reused() {
    let mut session = Session::new();
    let mut seen = Vec::new();

    for _ in 0..5 {
        let id = session.open(LaunchTarget::App(AppId::Notepad));
        assert!(!seen.contains(&id));
        seen.push(id);
        session.dispatch(DesktopAction::CloseWindow { window_id: id });
    }
    assert!(session.state.windows.is_empty());
}

#[test]
fn at_most_one_window_is_focused_across_a_busy_session() {
    let mut session = Session::new();
    let explorer = session.open(LaunchTarget::App(AppId::Explorer));
    let browser = session.open(LaunchTarget::App(AppId::Browser));
    let photos = session.open(LaunchTarget::App(AppId::Photos));

    let steps = [
        DesktopAction::MinimizeWindow { window_id: photos },
        DesktopAction::FocusWindow { window_id: explorer },
        DesktopAction::MaximizeWindow { window_id: browser },
        DesktopAction::ToggleTaskbarWindow { window_id: photos },
        DesktopAction::CloseWindow { window_id: browser },
        DesktopAction::ToggleTaskbarWindow { window_id: photos },
    ];
    for step in steps {
        session.dispatch(step);
        let focused = session.state.windows.iter().filter(|w| w.is_focused).count();
        assert!(focused <= 1);
        assert!(session
            .state
            .windows
            .iter()
            .all(|w| !(w.is_focused && w.is_minimized())));
    }

    assert_eq!(session.mode(photos), WindowMode::Minimized);
    assert_eq!(session.state.focused_window_id(), Some(explorer));
}

#[test]
fn per_site_exclusion_keeps_folder_menu_open_on_background_right_click() {
    let mut session = Session::with_config(ShellConfig {
        menu_exclusion: MenuExclusion::PerSite,
        ..ShellConfig::default()
    });
    let folder = session.state.folders.create();

    session.right_click(ContextMenuOrigin::FolderIcon(folder.id));
    session.right_click(ContextMenuOrigin::Background);

    assert!(session.state.menus.is_visible(MenuSite::Desktop));
    assert!(session.state.menus.is_visible(MenuSite::Folder));

    session.dispatch(DesktopAction::DismissContextMenus);
    assert!(!session.state.menus.any_visible());
}

#[test]
fn start_menu_stays_open_after_stale_folder_launch() {
    let mut session = Session::new();
    let folder = session.state.folders.create();
    session.state.folders.delete(folder.id);

    session.dispatch(DesktopAction::ToggleStartMenu);
    session.dispatch(DesktopAction::Launch {
        target: LaunchTarget::Folder(folder.id),
    });
    assert!(session.state.start_menu_open);

    session.open(LaunchTarget::App(AppId::Audio));
    assert!(!session.state.start_menu_open);
}

#[test]
fn opening_start_menu_hides_context_menus() {
    let mut session = Session::new();
    session.right_click(ContextMenuOrigin::Background);
    assert!(session.state.menus.is_visible(MenuSite::Desktop));

    session.dispatch(DesktopAction::ToggleStartMenu);
    assert!(session.state.start_menu_open);
    assert!(!session.state.menus.any_visible());
}

#[test]
fn reload_request_is_the_only_effect_of_refresh() {
    let mut session = Session::new();
    let calculator = session.open(LaunchTarget::App(AppId::Calculator));
    session.right_click(ContextMenuOrigin::Background);

    let effects = session.dispatch(DesktopAction::ActivateDesktopMenuItem {
        item: DesktopMenuItem::Refresh,
    });

    assert_eq!(effects, vec![RuntimeEffect::ReloadShell]);
    assert!(session.state.window(calculator).is_some());
}

#[test]
fn locking_from_start_menu_keeps_the_session_behind_the_lock() {
    let mut session = Session::with_config(ShellConfig {
        unlock_pin: "4321".to_string(),
        ..ShellConfig::default()
    });
    let notepad = session.open(LaunchTarget::App(AppId::Notepad));

    session.dispatch(DesktopAction::ToggleStartMenu);
    session.dispatch(DesktopAction::TogglePowerMenu);
    let effects = session.dispatch(DesktopAction::RequestPowerAction {
        action: PowerAction::Lock,
    });
    for effect in effects {
        if let RuntimeEffect::ConfirmPowerAction { action } = effect {
            session.dispatch(DesktopAction::ApplyPowerAction { action });
        }
    }
    assert!(session.state.power.lock.locked);
    assert!(!session.state.power.menu_open);

    session.dispatch(DesktopAction::ShowUnlockPrompt);
    session.dispatch(DesktopAction::SubmitUnlockPin {
        pin: "saba".to_string(),
    });
    assert!(session.state.power.lock.locked);

    session.dispatch(DesktopAction::SubmitUnlockPin {
        pin: "4321".to_string(),
    });
    assert!(!session.state.power.lock.locked);
    assert_eq!(session.state.focused_window_id(), Some(notepad));
    assert_eq!(session.mode(notepad), WindowMode::Normal);
}

#[test]
fn shutdown_blanks_then_click_wakes() {
    let mut session = Session::new();
    session.dispatch(DesktopAction::ToggleStartMenu);
    session.dispatch(DesktopAction::TogglePowerMenu);

    let effects = session.dispatch(DesktopAction::RequestPowerAction {
        action: PowerAction::ShutDown,
    });
    assert_eq!(session.state.power.display, DisplayMode::ShuttingDown);
    assert!(matches!(
        effects.as_slice(),
        [RuntimeEffect::ScheduleShutdownComplete { .. }]
    ));

    session.dispatch(DesktopAction::CompleteShutdown);
    assert_eq!(session.state.power.display, DisplayMode::Off);
    session.dispatch(DesktopAction::WakeDisplay);
    assert_eq!(session.state.power.display, DisplayMode::On);
}

#[test]
fn quick_settings_panel_closes_when_an_app_opens_from_the_taskbar() {
    let mut session = Session::new();
    session.dispatch(DesktopAction::ToggleQuickSettings);
    session.dispatch(DesktopAction::SetVolume { percent: 80 });
    assert!(session.state.quick_settings.open);

    session.open(LaunchTarget::App(AppId::Files));

    assert!(!session.state.quick_settings.open);
    assert_eq!(session.state.quick_settings.volume_pct, 80);
}
