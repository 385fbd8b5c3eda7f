//! Taskbar quick-settings panel state.

use serde::{Deserialize, Serialize};

/// Brightness slider bounds, in percent.
pub const BRIGHTNESS_RANGE: (u16, u16) = (50, 150);
/// Volume slider bounds, in percent.
pub const VOLUME_RANGE: (u16, u16) = (0, 100);

const DEFAULT_NOTIFICATIONS: [&str; 3] = ["Update available", "New message", "Battery low"];

/// Panel visibility plus the simulated device levels it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSettings {
    pub open: bool,
    pub brightness_pct: u16,
    pub volume_pct: u16,
    pub battery_pct: u8,
    pub wifi_connected: bool,
    pub bluetooth_on: bool,
    pub notifications: Vec<String>,
}

impl Default for QuickSettings {
    fn default() -> Self {
        Self {
            open: false,
            brightness_pct: 100,
            volume_pct: 50,
            battery_pct: 87,
            wifi_connected: true,
            bluetooth_on: true,
            notifications: DEFAULT_NOTIFICATIONS.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl QuickSettings {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Stores a brightness level, clamped to [`BRIGHTNESS_RANGE`].
    pub fn set_brightness(&mut self, percent: u16) {
        self.brightness_pct = percent.clamp(BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1);
    }

    /// Stores a volume level, clamped to [`VOLUME_RANGE`].
    pub fn set_volume(&mut self, percent: u16) {
        self.volume_pct = percent.clamp(VOLUME_RANGE.0, VOLUME_RANGE.1);
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// CSS filter applied to the whole shell for the current brightness.
    pub fn brightness_filter(&self) -> String {
        format!("filter:brightness({}%);", self.brightness_pct)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn levels_are_clamped_to_slider_bounds() {
        let mut settings = QuickSettings::default();
        settings.set_brightness(10);
        assert_eq!(settings.brightness_pct, 50);
        settings.set_brightness(400);
        assert_eq!(settings.brightness_pct, 150);

        settings.set_volume(101);
        assert_eq!(settings.volume_pct, 100);
        settings.set_volume(0);
        assert_eq!(settings.volume_pct, 0);
    }

    #[test]
    fn brightness_filter_tracks_level() {
        let mut settings = QuickSettings::default();
        assert_eq!(settings.brightness_filter(), "filter:brightness(100%);");
        settings.set_brightness(75);
        assert_eq!(settings.brightness_filter(), "filter:brightness(75%);");
    }

    #[test]
    fn clearing_notifications_empties_the_list() {
        let mut settings = QuickSettings::default();
        assert_eq!(settings.notifications.len(), 3);
        settings.clear_notifications();
        assert!(settings.notifications.is_empty());
    }
}
