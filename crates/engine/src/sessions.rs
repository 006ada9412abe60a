//! Per-session state store.
//!
//! One [`SessionState`] per session identity, created lazily on first access.
//! Each session's state sits behind its own mutex, so actions on the same
//! session form a strict sequence while distinct sessions never contend
//! beyond the brief map lookup. Session lifetime is owned by the transport
//! layer; the store never evicts on its own.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use bonbon_core::{ItemId, NavigationTarget, SessionId};

use crate::cart::Cart;

/// Everything the shop remembers about one session.
#[derive(Debug, Default)]
pub struct SessionState {
    /// The session's cart.
    pub cart: Cart,
    /// The logical screen the session is currently looking at.
    pub screen: NavigationTarget,
}

/// Store of per-session state, keyed by the transport-supplied identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<SessionState>>>>,
}

impl SessionStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to a session's state.
    ///
    /// Creates the state (empty cart, category-list screen) if the session has
    /// no prior activity. The session mutex is held for the whole call, so a
    /// read-decide-mutate sequence inside `f` is atomic as observed by any
    /// later access to the same session.
    pub fn with_state<R>(&self, session: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let entry = self.entry(session);
        let mut state = entry.lock();
        f(&mut state)
    }

    /// Snapshot of a session's cart, with create-if-absent semantics.
    #[must_use]
    pub fn cart(&self, session: SessionId) -> Cart {
        self.with_state(session, |state| state.cart.clone())
    }

    /// Increment an item's quantity by 1 for a session.
    ///
    /// No catalogue validation happens at this layer.
    pub fn add(&self, session: SessionId, id: &ItemId) {
        self.with_state(session, |state| state.cart.add(id));
    }

    /// Remove all cart entries for a session.
    pub fn clear(&self, session: SessionId) {
        self.with_state(session, |state| state.cart.clear());
    }

    /// Snapshot of a session's current navigation target.
    #[must_use]
    pub fn screen(&self, session: SessionId) -> NavigationTarget {
        self.with_state(session, |state| state.screen.clone())
    }

    /// Number of sessions with materialized state.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    fn entry(&self, session: SessionId) -> Arc<Mutex<SessionState>> {
        if let Some(existing) = self.sessions.read().get(&session) {
            return Arc::clone(existing);
        }
        let mut sessions = self.sessions.write();
        Arc::clone(sessions.entry(session).or_default())
    }
}
