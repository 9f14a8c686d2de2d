//! Sidebar open/closed state.

use tokio::sync::watch;

/// Observable sidebar toggle.
///
/// Constructed where the UI shell is assembled and handed to whoever
/// needs it; deliberately not a process-global. Designed to be shared
/// via `Arc`.
pub struct SidebarStore {
    state: watch::Sender<bool>,
}

impl SidebarStore {
    /// A closed sidebar.
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state }
    }

    /// Whether the sidebar is currently open.
    pub fn is_open(&self) -> bool {
        *self.state.borrow()
    }

    /// The single mutator: flip open/closed and notify subscribers.
    pub fn toggle(&self) {
        self.state.send_modify(|open| *open = !*open);
    }

    /// Watch for changes. The receiver yields the current value first.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self::new()
    }
}
