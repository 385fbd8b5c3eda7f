//! Start-menu power options, the blank display states, and the PIN lock screen.

use serde::{Deserialize, Serialize};

pub const WRONG_PIN_MESSAGE: &str = "Wrong PIN!";

/// Entries of the start menu's power drop-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerAction {
    Restart,
    ShutDown,
    Sleep,
    Lock,
}

impl PowerAction {
    pub const ALL: [PowerAction; 4] = [Self::Restart, Self::ShutDown, Self::Sleep, Self::Lock];

    pub fn label(self) -> &'static str {
        match self {
            Self::Restart => "Restart",
            Self::ShutDown => "Shut down",
            Self::Sleep => "Sleep",
            Self::Lock => "Lock",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Restart => "power-restart",
            Self::ShutDown => "power-shutdown",
            Self::Sleep => "power-sleep",
            Self::Lock => "power-lock",
        }
    }

    /// Question asked before the action runs, for the actions that need one.
    pub fn confirm_message(self) -> Option<&'static str> {
        match self {
            Self::Sleep => Some("Go to sleep?"),
            Self::Lock => Some("Lock the screen?"),
            Self::Restart | Self::ShutDown => None,
        }
    }
}

/// What the display shows on top of the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    On,
    /// Black screen with a "Shutting down..." notice.
    ShuttingDown,
    /// Black screen after the shutdown notice has elapsed.
    Off,
    /// Black screen entered from Sleep.
    Asleep,
}

impl DisplayMode {
    pub fn is_blank(self) -> bool {
        self != Self::On
    }
}

/// Lock-screen state. The typed PIN stays in the view; only the outcome lands here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockScreen {
    pub locked: bool,
    pub pin_prompt_visible: bool,
    pub error: Option<String>,
}

impl LockScreen {
    pub fn lock(&mut self) {
        *self = Self {
            locked: true,
            ..Self::default()
        };
    }

    pub fn show_pin_prompt(&mut self) {
        if self.locked {
            self.pin_prompt_visible = true;
        }
    }

    /// Unlocks when `pin` matches `expected`. Returns whether the screen unlocked.
    pub fn submit_pin(&mut self, pin: &str, expected: &str) -> bool {
        if !self.locked {
            return false;
        }
        if pin == expected {
            *self = Self::default();
            true
        } else {
            self.error = Some(WRONG_PIN_MESSAGE.to_string());
            false
        }
    }
}

/// Power drop-up, display, and lock state owned by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerState {
    pub menu_open: bool,
    pub display: DisplayMode,
    pub lock: LockScreen,
}
