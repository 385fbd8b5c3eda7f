//! Window presentation state machine and stack helpers used by the desktop reducer.

use serde::{Deserialize, Serialize};

use crate::model::{DesktopState, ResizeEdge, WindowId, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Presentation state owned by a single window instance.
///
/// `rect` is always the floating geometry. It is never overwritten by maximize, so leaving
/// [`WindowMode::Maximized`] reapplies it verbatim. `pre_minimize_mode` records whether the
/// window was Normal or Maximized when it was minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPresentation {
    mode: WindowMode,
    pre_minimize_mode: WindowMode,
    rect: WindowRect,
}

impl WindowPresentation {
    /// Opens in [`WindowMode::Normal`] at `rect`.
    pub fn new(rect: WindowRect) -> Self {
        Self {
            mode: WindowMode::Normal,
            pre_minimize_mode: WindowMode::Normal,
            rect: rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn is_minimized(&self) -> bool {
        self.mode == WindowMode::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.mode == WindowMode::Maximized
    }

    /// Geometry to render: the viewport while maximized, the floating rect otherwise.
    pub fn effective_rect(&self, viewport: WindowRect) -> WindowRect {
        match self.mode {
            WindowMode::Maximized => viewport,
            WindowMode::Normal | WindowMode::Minimized => self.rect,
        }
    }

    /// Normal or Maximized to Minimized. Returns `false` when already minimized.
    pub fn minimize(&mut self) -> bool {
        if self.mode == WindowMode::Minimized {
            return false;
        }
        self.pre_minimize_mode = self.mode;
        self.mode = WindowMode::Minimized;
        true
    }

    /// Normal to Maximized. A minimized window must be restored first.
    pub fn maximize(&mut self) -> bool {
        if self.mode != WindowMode::Normal {
            return false;
        }
        self.mode = WindowMode::Maximized;
        true
    }

    /// Minimized back to its pre-minimize mode, or Maximized back to Normal.
    pub fn restore(&mut self) -> bool {
        match self.mode {
            WindowMode::Minimized => {
                self.mode = self.pre_minimize_mode;
                self.pre_minimize_mode = WindowMode::Normal;
                true
            }
            WindowMode::Maximized => {
                self.mode = WindowMode::Normal;
                true
            }
            WindowMode::Normal => false,
        }
    }

    /// Title-bar maximize button: Normal to Maximized, Maximized to Normal.
    pub fn toggle_maximize(&mut self) -> bool {
        match self.mode {
            WindowMode::Normal => self.maximize(),
            WindowMode::Maximized => self.restore(),
            WindowMode::Minimized => false,
        }
    }

    /// Replaces the floating geometry. Ignored unless the window is Normal.
    pub fn set_rect(&mut self, rect: WindowRect) -> bool {
        if self.mode != WindowMode::Normal {
            return false;
        }
        let rect = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        if rect == self.rect {
            return false;
        }
        self.rect = rect;
        true
    }
}

/// Raises `window_id` to the top of the stack and focuses it unless it is minimized.
///
/// The presentation mode is left untouched. Returns `false` when the window does not exist.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused || w.is_minimized())
            .unwrap_or(false);
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = !window.is_minimized();
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.is_minimized() {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(last_visible) = state.windows.iter_mut().rev().find(|w| !w.is_minimized()) {
            last_visible.is_focused = true;
        }
    }
}

/// Applies resize deltas for a given edge/corner drag.
///
/// West and north deltas are capped so the opposite edge stays put once the minimum size is
/// reached.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let dx_west = dx.min(start.w - MIN_WINDOW_WIDTH);
    let dy_north = dy.min(start.h - MIN_WINDOW_HEIGHT);
    let (left, top, right, bottom) = match edge {
        ResizeEdge::North => (0, dy_north, 0, 0),
        ResizeEdge::South => (0, 0, 0, dy),
        ResizeEdge::East => (0, 0, dx, 0),
        ResizeEdge::West => (dx_west, 0, 0, 0),
        ResizeEdge::NorthEast => (0, dy_north, dx, 0),
        ResizeEdge::NorthWest => (dx_west, dy_north, 0, 0),
        ResizeEdge::SouthEast => (0, 0, dx, dy),
        ResizeEdge::SouthWest => (dx_west, 0, 0, dy),
    };
    WindowRect {
        x: start.x + left,
        y: start.y + top,
        w: start.w - left + right,
        h: start.h - top + bottom,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect() -> WindowRect {
        WindowRect {
            x: 10,
            y: 20,
            w: 400,
            h: 300,
        }
    }

    #[test]
    fn maximize_then_restore_returns_exact_geometry() {
        let mut presentation = WindowPresentation::new(rect());
        assert!(presentation.maximize());
        assert_eq!(presentation.mode(), WindowMode::Maximized);

        assert!(presentation.restore());
        assert_eq!(presentation.mode(), WindowMode::Normal);
        assert_eq!(presentation.rect(), rect());
    }

    #[test]
    fn restore_from_minimized_returns_to_normal() {
        let mut presentation = WindowPresentation::new(rect());
        presentation.minimize();
        presentation.restore();
        assert_eq!(presentation.mode(), WindowMode::Normal);
        assert_eq!(presentation.rect(), rect());
    }

    #[test]
    fn restore_from_minimized_remembers_maximized() {
        let mut presentation = WindowPresentation::new(rect());
        presentation.maximize();
        presentation.minimize();
        assert_eq!(presentation.mode(), WindowMode::Minimized);

        presentation.restore();
        assert_eq!(presentation.mode(), WindowMode::Maximized);

        presentation.restore();
        assert_eq!(presentation.mode(), WindowMode::Normal);
        assert_eq!(presentation.rect(), rect());
    }

    #[test]
    fn minimized_window_cannot_maximize_directly() {
        let mut presentation = WindowPresentation::new(rect());
        presentation.minimize();
        assert!(!presentation.maximize());
        assert!(!presentation.toggle_maximize());
        assert_eq!(presentation.mode(), WindowMode::Minimized);
    }

    #[test]
    fn geometry_is_frozen_outside_normal_mode() {
        let mut presentation = WindowPresentation::new(rect());
        presentation.maximize();
        assert!(!presentation.set_rect(rect().offset(50, 50)));
        presentation.restore();
        assert_eq!(presentation.rect(), rect());
    }

    #[test]
    fn effective_rect_uses_viewport_only_when_maximized() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 720,
        };
        let mut presentation = WindowPresentation::new(rect());
        assert_eq!(presentation.effective_rect(viewport), rect());
        presentation.toggle_maximize();
        assert_eq!(presentation.effective_rect(viewport), viewport);
    }

    #[test]
    fn resize_from_north_west_moves_origin_and_shrinks() {
        let resized = resize_rect(rect(), ResizeEdge::NorthWest, 15, 5);
        assert_eq!(
            resized,
            WindowRect {
                x: 25,
                y: 25,
                w: 385,
                h: 295,
            }
        );
    }

    #[test]
    fn west_and_north_resize_past_minimum_keeps_far_edges_fixed() {
        let start = WindowRect {
            x: 40,
            y: 48,
            w: 560,
            h: 380,
        };

        let west = resize_rect(start, ResizeEdge::West, 600, 0);
        assert_eq!(west.w, MIN_WINDOW_WIDTH);
        assert_eq!(west.x + west.w, start.x + start.w);

        let north = resize_rect(start, ResizeEdge::North, 0, 900);
        assert_eq!(north.h, MIN_WINDOW_HEIGHT);
        assert_eq!(north.y + north.h, start.y + start.h);

        let corner = resize_rect(start, ResizeEdge::NorthWest, 1_000, 1_000);
        assert_eq!(
            corner,
            WindowRect {
                x: start.x + start.w - MIN_WINDOW_WIDTH,
                y: start.y + start.h - MIN_WINDOW_HEIGHT,
                w: MIN_WINDOW_WIDTH,
                h: MIN_WINDOW_HEIGHT,
            }
        );
    }
}
