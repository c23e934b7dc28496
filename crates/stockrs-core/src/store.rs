//! Application state and its transitions.
//!
//! All mutable state lives in one [`AppState`] owned by the root component;
//! every transition goes through [`AppState::apply`] with a typed [`Action`],
//! so the whole lifecycle is auditable and testable without a display.

use crate::models::{InventoryItem, Session};

/// Fixed user-facing error strings. One per operation; failures of any kind
/// (transport or non-2xx status) collapse to the same text.
pub const FETCH_ITEMS_ERROR: &str = "Failed to fetch inventory items. Please try again.";
pub const AUTH_ERROR: &str = "Authentication failed. Please try again.";
pub const LOGOUT_ERROR: &str = "Logout failed. Please try again.";
pub const ADD_ITEM_ERROR: &str = "Failed to add item. Please try again.";
pub const DELETE_ITEM_ERROR: &str = "Failed to delete item. Please try again.";

/// A state transition.
#[derive(Debug)]
pub enum Action {
    /// Open the auth modal in login or signup mode.
    OpenAuth { signup: bool },
    /// Close the auth modal without authenticating.
    CloseAuth,
    /// Login/signup succeeded; adopt the returned session.
    SessionEstablished(Session),
    /// Login/signup failed. Any existing session is kept.
    AuthFailed,
    /// Logout succeeded; drop the session and the item collection.
    LoggedOut,
    /// Logout failed. The session stays valid.
    LogoutFailed,
    /// Open the add-item modal.
    OpenAddForm,
    /// Close the add-item modal without creating anything.
    CloseAddForm,
    /// A fetch finished. `generation` identifies which fetch; stale results
    /// are discarded rather than overwriting newer state.
    ItemsLoaded {
        generation: u64,
        items: Vec<InventoryItem>,
    },
    /// A fetch failed. The existing collection is left untouched.
    FetchFailed,
    /// The backend created an item; append it (with its assigned id).
    ItemAdded(InventoryItem),
    /// Creation failed. The form stays open.
    AddFailed,
    /// The backend deleted an item; remove the first matching entry.
    ItemDeleted(i64),
    /// Deletion failed. The collection is left untouched.
    DeleteFailed,
    /// Search text edited.
    SearchChanged(String),
}

/// The root component's single source of truth.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub items: Vec<InventoryItem>,
    pub search: String,
    pub show_add_form: bool,
    pub show_auth_form: bool,
    pub signup_mode: bool,
    /// Last failure message, if any. Last write wins; never cleared by a
    /// success, only overwritten by the next failure.
    pub error: Option<String>,
    fetch_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current session has the administrator flag.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }

    /// Whether a delete may be dispatched to the backend. Deletion is an
    /// administrator operation; requests from any other session are dropped
    /// before they reach the network.
    pub fn can_delete(&self) -> bool {
        self.is_admin()
    }

    /// Start a fetch and return its generation token. A completed fetch whose
    /// generation no longer matches is stale and must be dropped.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::OpenAuth { signup } => {
                self.show_auth_form = true;
                self.signup_mode = signup;
            }
            Action::CloseAuth => {
                self.show_auth_form = false;
            }
            Action::SessionEstablished(session) => {
                tracing::info!(username = %session.username, is_admin = session.is_admin, "session established");
                self.session = Some(session);
                self.show_auth_form = false;
            }
            Action::AuthFailed => {
                self.error = Some(AUTH_ERROR.to_string());
            }
            Action::LoggedOut => {
                self.session = None;
                self.items.clear();
                self.search.clear();
                // Invalidate any fetch still in flight so it cannot
                // resurrect the cleared collection.
                self.fetch_generation += 1;
            }
            Action::LogoutFailed => {
                self.error = Some(LOGOUT_ERROR.to_string());
            }
            Action::OpenAddForm => {
                self.show_add_form = true;
            }
            Action::CloseAddForm => {
                self.show_add_form = false;
            }
            Action::ItemsLoaded { generation, items } => {
                if generation != self.fetch_generation {
                    tracing::debug!(generation, current = self.fetch_generation, "dropping stale fetch result");
                    return;
                }
                self.items = items;
            }
            Action::FetchFailed => {
                self.error = Some(FETCH_ITEMS_ERROR.to_string());
            }
            Action::ItemAdded(item) => {
                self.items.push(item);
                self.show_add_form = false;
            }
            Action::AddFailed => {
                self.error = Some(ADD_ITEM_ERROR.to_string());
            }
            Action::ItemDeleted(id) => {
                if let Some(pos) = self.items.iter().position(|item| item.id == id) {
                    self.items.remove(pos);
                }
            }
            Action::DeleteFailed => {
                self.error = Some(DELETE_ITEM_ERROR.to_string());
            }
            Action::SearchChanged(text) => {
                self.search = text;
            }
        }
    }

    /// Items matching the search text: case-insensitive substring match over
    /// name, serial number, and location. Empty search shows everything.
    pub fn visible_items(&self) -> Vec<&InventoryItem> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.serial_number.to_lowercase().contains(&needle)
                    || item.location.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            item_type: "Computer".to_string(),
            serial_number: format!("SN{}", id),
            barcode: None,
            location: "HQ".to_string(),
            status: "In Use".to_string(),
        }
    }

    fn session(is_admin: bool) -> Session {
        Session {
            id: 1,
            username: "alice".to_string(),
            is_admin,
            token: "T1".to_string(),
        }
    }

    #[test]
    fn creations_append_backend_assigned_items() {
        let mut state = AppState::new();
        state.apply(Action::ItemAdded(item(7, "Dell XPS")));
        state.apply(Action::ItemAdded(item(9, "Rack A")));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, 7);
        assert_eq!(state.items[1].id, 9);
        assert!(!state.show_add_form);
    }

    #[test]
    fn delete_removes_first_match_and_keeps_order() {
        let mut state = AppState::new();
        for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
            state.apply(Action::ItemAdded(item(id, name)));
        }
        state.apply(Action::ItemDeleted(2));
        let ids: Vec<i64> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Absent id is a no-op.
        state.apply(Action::ItemDeleted(42));
        assert_eq!(state.items.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_fetch_keeps_items_and_overwrites_error() {
        let mut state = AppState::new();
        let generation = state.begin_fetch();
        state.apply(Action::ItemsLoaded {
            generation,
            items: vec![item(1, "a")],
        });
        state.apply(Action::FetchFailed);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some(FETCH_ITEMS_ERROR));

        // Next failure replaces, not appends.
        state.apply(Action::DeleteFailed);
        assert_eq!(state.error.as_deref(), Some(DELETE_ITEM_ERROR));

        // Success does not clear the slot.
        state.apply(Action::ItemAdded(item(2, "b")));
        assert_eq!(state.error.as_deref(), Some(DELETE_ITEM_ERROR));
    }

    #[test]
    fn stale_fetch_result_is_dropped() {
        let mut state = AppState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        state.apply(Action::ItemsLoaded {
            generation: second,
            items: vec![item(2, "new")],
        });
        state.apply(Action::ItemsLoaded {
            generation: first,
            items: vec![item(1, "old")],
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 2);
    }

    #[test]
    fn logout_clears_state_and_invalidates_inflight_fetch() {
        let mut state = AppState::new();
        state.apply(Action::SessionEstablished(session(false)));
        state.apply(Action::SearchChanged("dell".to_string()));
        let generation = state.begin_fetch();
        state.apply(Action::LoggedOut);
        assert!(state.session.is_none());
        assert!(state.items.is_empty());
        // The next user must not inherit the previous user's filter.
        assert!(state.search.is_empty());

        // The fetch dispatched before logout lands late; it must not
        // repopulate the cleared collection.
        state.apply(Action::ItemsLoaded {
            generation,
            items: vec![item(1, "stale")],
        });
        assert!(state.items.is_empty());
    }

    #[test]
    fn delete_dispatch_requires_an_admin_session() {
        let mut state = AppState::new();
        assert!(!state.can_delete());

        state.apply(Action::SessionEstablished(session(false)));
        assert!(!state.can_delete());

        state.apply(Action::SessionEstablished(session(true)));
        assert!(state.can_delete());

        state.apply(Action::LoggedOut);
        assert!(!state.can_delete());
    }

    #[test]
    fn auth_failure_keeps_existing_session() {
        let mut state = AppState::new();
        state.apply(Action::SessionEstablished(session(true)));
        state.apply(Action::AuthFailed);
        assert!(state.session.is_some());
        assert!(state.is_admin());
        assert_eq!(state.error.as_deref(), Some(AUTH_ERROR));
    }

    #[test]
    fn add_failure_leaves_form_open() {
        let mut state = AppState::new();
        state.apply(Action::OpenAddForm);
        state.apply(Action::AddFailed);
        assert!(state.show_add_form);
        assert_eq!(state.error.as_deref(), Some(ADD_ITEM_ERROR));
    }

    #[test]
    fn search_filters_name_serial_and_location_case_insensitively() {
        let mut state = AppState::new();
        state.apply(Action::ItemAdded(InventoryItem {
            id: 1,
            name: "Dell XPS".to_string(),
            item_type: "Computer".to_string(),
            serial_number: "ABC123".to_string(),
            barcode: None,
            location: "Warehouse".to_string(),
            status: "In Use".to_string(),
        }));
        state.apply(Action::ItemAdded(item(2, "ThinkPad")));

        state.apply(Action::SearchChanged("dell".to_string()));
        assert_eq!(state.visible_items().len(), 1);

        state.apply(Action::SearchChanged("abc".to_string()));
        assert_eq!(state.visible_items().len(), 1);

        state.apply(Action::SearchChanged("WAREHOUSE".to_string()));
        assert_eq!(state.visible_items().len(), 1);

        state.apply(Action::SearchChanged("  ".to_string()));
        assert_eq!(state.visible_items().len(), 2);

        state.apply(Action::SearchChanged("nothing".to_string()));
        assert!(state.visible_items().is_empty());
    }
}
