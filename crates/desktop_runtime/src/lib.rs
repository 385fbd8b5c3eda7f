pub mod apps;
pub mod components;
pub mod config;
pub mod context_menu;
pub mod effect_executor;
pub mod folders;
pub mod host;
pub mod model;
pub mod power;
pub mod quick_settings;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{load_shell_config, ConfigError, ShellConfig};
pub use context_menu::{
    ContextMenuController, ContextMenuOrigin, DesktopMenuItem, FolderMenuItem, MenuExclusion,
    MenuSite,
};
pub use folders::FolderStore;
pub use model::*;
pub use power::{DisplayMode, LockScreen, PowerAction, PowerState};
pub use quick_settings::QuickSettings;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::{WindowMode, WindowPresentation};
