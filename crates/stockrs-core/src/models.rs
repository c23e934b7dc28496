//! Shared data types for the application.

use serde::{Deserialize, Serialize};

/// A hardware asset tracked by the backend.
///
/// The `id` is assigned by the backend on creation; everything else is
/// user-entered free text apart from `item_type` and `status`, which the
/// frontend only interprets for display (see [`ItemKind`] and [`ItemStatus`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub location: String,
    pub status: String,
}

/// Creation payload: an [`InventoryItem`] minus the backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub location: String,
    pub status: String,
}

/// An authenticated session as returned by login/signup.
///
/// Held in memory only; dropped on logout or process exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub token: String,
}

/// Display mapping for the item `type` string.
///
/// The backend stores the type as free text; the frontend only matches it
/// (case-insensitively) against the three known values to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Computer,
    Server,
    Mobile,
}

impl ItemKind {
    /// Match a raw type string. Unrecognized types fall back to `Computer`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "server" => Self::Server,
            "mobile" => Self::Mobile,
            _ => Self::Computer,
        }
    }

    /// Icon name for this kind.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Computer => "computer-symbolic",
            Self::Server => "network-server-symbolic",
            Self::Mobile => "phone-symbolic",
        }
    }

    /// The three labels offered by the creation form, in display order.
    pub const LABELS: [&'static str; 3] = ["Computer", "Server", "Mobile"];
}

/// Display mapping for the item `status` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    InUse,
    Operational,
    Maintenance,
}

impl ItemStatus {
    /// Match a raw status string. Unmapped statuses fall back to `Maintenance`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "In Use" => Self::InUse,
            "Operational" => Self::Operational,
            _ => Self::Maintenance,
        }
    }

    /// CSS class for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::InUse => "status-in-use",
            Self::Operational => "status-operational",
            Self::Maintenance => "status-maintenance",
        }
    }

    /// The three labels offered by the creation form, in display order.
    pub const LABELS: [&'static str; 3] = ["In Use", "Operational", "Maintenance"];
}

/// The auth form's mutually exclusive admin/user role pick.
///
/// Selecting one side deselects the other; exactly one side is always
/// selected, so the submitted flags are never ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSelection {
    admin: bool,
}

impl RoleSelection {
    /// Default selection: plain user.
    pub fn user() -> Self {
        Self { admin: false }
    }

    pub fn is_admin(self) -> bool {
        self.admin
    }

    pub fn is_user(self) -> bool {
        !self.admin
    }

    /// Toggle the admin checkbox. Deselecting it falls back to user.
    pub fn set_admin(&mut self, selected: bool) {
        self.admin = selected;
    }

    /// Toggle the user checkbox. Deselecting it falls back to admin.
    pub fn set_user(&mut self, selected: bool) {
        self.admin = !selected;
    }
}

impl Default for RoleSelection {
    fn default() -> Self {
        Self::user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_json_uses_backend_field_names() {
        let item = InventoryItem {
            id: 7,
            name: "Dell XPS".into(),
            item_type: "Computer".into(),
            serial_number: "SN1".into(),
            barcode: None,
            location: "HQ".into(),
            status: "In Use".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["serialNumber"], "SN1");
        assert_eq!(json["type"], "Computer");
        // Absent barcode is omitted, not serialized as null.
        assert!(json.get("barcode").is_none());
    }

    #[test]
    fn item_deserializes_without_barcode() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":1,"name":"n","type":"Server","serialNumber":"s","location":"l","status":"Operational"}"#,
        )
        .unwrap();
        assert_eq!(item.barcode, None);
        assert_eq!(item.serial_number, "s");
    }

    #[test]
    fn unknown_type_falls_back_to_computer_icon() {
        assert_eq!(ItemKind::from_label("SERVER"), ItemKind::Server);
        assert_eq!(ItemKind::from_label("mObIlE"), ItemKind::Mobile);
        assert_eq!(ItemKind::from_label("toaster"), ItemKind::Computer);
        assert_eq!(ItemKind::from_label(""), ItemKind::Computer);
    }

    #[test]
    fn unknown_status_falls_back_to_maintenance_styling() {
        assert_eq!(ItemStatus::from_label("In Use").css_class(), "status-in-use");
        assert_eq!(
            ItemStatus::from_label("Operational").css_class(),
            "status-operational"
        );
        assert_eq!(
            ItemStatus::from_label("Broken").css_class(),
            "status-maintenance"
        );
    }

    #[test]
    fn role_selection_is_mutually_exclusive() {
        let mut role = RoleSelection::default();
        assert!(role.is_user());
        assert!(!role.is_admin());

        role.set_admin(true);
        assert!(role.is_admin());
        assert!(!role.is_user());

        role.set_user(true);
        assert!(role.is_user());
        assert!(!role.is_admin());

        // Deselecting the active side re-selects the other; exactly one
        // side is selected at all times.
        role.set_user(false);
        assert!(role.is_admin());
        role.set_admin(false);
        assert!(role.is_user());
    }
}
