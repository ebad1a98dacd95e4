//! Pointer event source
//!
//! Terminal mouse clicks are broadcast to whoever subscribed. A subscription
//! is an RAII guard: dropping the `ClickSubscription` removes the listener, so
//! a component that forgets to unsubscribe is impossible by construction.

use ratatui::layout::{Position, Rect};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// A left-button press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub column: u16,
    pub row: u16,
}

impl Click {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Whether the click landed inside `area`
    pub fn is_inside(&self, area: Rect) -> bool {
        area.contains(Position::new(self.column, self.row))
    }
}

type Listener = Box<dyn Fn(Click) + Send>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, Listener>>,
}

impl Registry {
    fn listeners(&self) -> MutexGuard<'_, HashMap<u64, Listener>> {
        match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Shared source of click events
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Arc<Registry>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered while the guard lives
    pub fn subscribe(&self, listener: impl Fn(Click) + Send + 'static) -> ClickSubscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners().insert(id, Box::new(listener));
        log::debug!("Pointer: listener {} subscribed", id);
        ClickSubscription {
            id,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Deliver a click to every listener
    pub fn emit(&self, click: Click) {
        for listener in self.registry.listeners().values() {
            listener(click);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners().len()
    }
}

impl std::fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Unsubscribes its listener when dropped
pub struct ClickSubscription {
    id: u64,
    registry: Arc<Registry>,
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        self.registry.listeners().remove(&self.id);
        log::debug!("Pointer: listener {} unsubscribed", self.id);
    }
}

impl std::fmt::Debug for ClickSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClickSubscription({})", self.id)
    }
}
