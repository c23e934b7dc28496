//! Core models, API client, and state store for stockrs.
//!
//! This crate is UI-independent: it holds the data types mirrored from the
//! inventory backend, the blocking REST client, and the reducer-style
//! application store the GUI drives.

pub mod api;
pub mod models;
pub mod store;

pub use api::{ApiClient, ApiError, ApiResult, AuthRequest, DEFAULT_API_URL};
pub use models::{InventoryItem, ItemKind, ItemStatus, NewItem, RoleSelection, Session};
pub use store::{Action, AppState};
