//! Contract between the desktop session manager and the app modules it hosts.
//!
//! A hosted app receives exactly one capability from its window: the ability to close it.
//! Window chrome state (minimized/maximized, geometry, focus) is owned by the runtime and is
//! never visible to the app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, fmt, rc::Rc};

use leptos::View;

/// Close capability handed to an app module by its hosting window.
///
/// The handle is single-shot: only the first [`AppCloseHandle::close`] call reaches the runtime.
#[derive(Clone)]
pub struct AppCloseHandle {
    close: Rc<dyn Fn()>,
    fired: Rc<Cell<bool>>,
}

impl AppCloseHandle {
    /// Creates a close handle from a runtime-provided callback.
    pub fn new(close: Rc<dyn Fn()>) -> Self {
        Self {
            close,
            fired: Rc::new(Cell::new(false)),
        }
    }

    /// Creates a handle that never closes anything.
    pub fn noop() -> Self {
        Self::new(Rc::new(|| {}))
    }

    /// Requests that the hosting window be closed.
    pub fn close(&self) {
        if !self.fired.replace(true) {
            (self.close)();
        }
    }

    /// Returns whether close has already been requested through this handle.
    pub fn is_closed(&self) -> bool {
        self.fired.get()
    }
}

impl fmt::Debug for AppCloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCloseHandle")
            .field("fired", &self.fired.get())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
/// Mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Capability to close the hosting window.
    pub close: AppCloseHandle,
}

impl AppMountContext {
    /// Creates a mount context around a close capability.
    pub fn new(close: AppCloseHandle) -> Self {
        Self { close }
    }
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_handle_fires_callback_once() {
        let count = Rc::new(Cell::new(0));
        let handle = AppCloseHandle::new({
            let count = count.clone();
            Rc::new(move || count.set(count.get() + 1))
        });
        let cloned = handle.clone();

        assert!(!handle.is_closed());
        handle.close();
        cloned.close();

        assert_eq!(count.get(), 1);
        assert!(cloned.is_closed());
    }

    #[test]
    fn noop_handle_records_close_request() {
        let handle = AppCloseHandle::noop();
        handle.close();
        assert!(handle.is_closed());
    }
}
