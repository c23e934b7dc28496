//! Add-item dialog component.

use gtk4::prelude::*;
use relm4::prelude::*;
use stockrs_core::{ItemKind, ItemStatus, NewItem};

/// Placeholder index in the type/status dropdowns; not a valid selection.
const PLACEHOLDER: u32 = 0;

/// Messages for the add-item dialog.
#[derive(Debug)]
pub enum AddItemFormInput {
    /// Open the dialog with cleared fields.
    Open,
    NameChanged(String),
    SerialNumberChanged(String),
    BarcodeChanged(String),
    LocationChanged(String),
    TypeSelected(u32),
    StatusSelected(u32),
    /// Submit the field bundle.
    Submit,
    /// Cancel and close.
    Cancel,
    /// The backend accepted the item; reset and close.
    Succeeded,
}

/// Output messages from the add-item dialog.
#[derive(Debug, Clone)]
pub enum AddItemFormOutput {
    /// The raw field bundle, forwarded without local transformation.
    Submitted(NewItem),
    /// Dialog was cancelled.
    Cancelled,
}

/// Add-item dialog model.
pub struct AddItemForm {
    name: String,
    serial_number: String,
    barcode: String,
    location: String,
    type_index: u32,
    status_index: u32,
    visible: bool,
}

impl AddItemForm {
    /// Mirror of native required-field validation: name, serial number, and
    /// location must be non-empty, and both dropdowns must have a real
    /// selection (not the placeholder). Barcode is optional.
    fn can_submit(&self) -> bool {
        !self.name.is_empty()
            && !self.serial_number.is_empty()
            && !self.location.is_empty()
            && selected_label(self.type_index, &ItemKind::LABELS).is_some()
            && selected_label(self.status_index, &ItemStatus::LABELS).is_some()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.serial_number.clear();
        self.barcode.clear();
        self.location.clear();
        self.type_index = PLACEHOLDER;
        self.status_index = PLACEHOLDER;
    }
}

/// Map a dropdown index back to its label. Index 0 is the placeholder, and
/// GTK reports `GTK_INVALID_LIST_POSITION` (`u32::MAX`) when nothing is
/// selected; neither is a valid choice.
fn selected_label(index: u32, labels: &[&'static str]) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| labels.get(i as usize))
        .copied()
}

/// Dropdown entries: a placeholder followed by the fixed label set.
fn with_placeholder(placeholder: &'static str, labels: &[&'static str]) -> gtk4::StringList {
    let list = gtk4::StringList::new(&[placeholder]);
    for label in labels {
        list.append(label);
    }
    list
}

#[relm4::component(pub)]
impl Component for AddItemForm {
    type Init = ();
    type Input = AddItemFormInput;
    type Output = AddItemFormOutput;
    type CommandOutput = ();

    view! {
        #[name = "dialog"]
        gtk4::Window {
            set_modal: true,
            set_default_width: 420,
            set_title: Some("Add New Item"),
            #[watch]
            set_visible: model.visible,

            connect_close_request[sender] => move |_| {
                sender.input(AddItemFormInput::Cancel);
                gtk4::glib::Propagation::Stop
            },

            gtk4::Box {
                set_orientation: gtk4::Orientation::Vertical,
                set_spacing: 0,

                gtk4::HeaderBar {
                    set_show_title_buttons: false,

                    #[wrap(Some)]
                    set_title_widget = &gtk4::Label {
                        set_text: "Add New Item",
                        add_css_class: "title",
                    },

                    pack_start = &gtk4::Button {
                        set_label: "Cancel",
                        connect_clicked => AddItemFormInput::Cancel,
                    },

                    pack_end = &gtk4::Button {
                        set_label: "Add Item",
                        add_css_class: "suggested-action",
                        #[watch]
                        set_sensitive: model.can_submit(),
                        connect_clicked => AddItemFormInput::Submit,
                    },
                },

                gtk4::ScrolledWindow {
                    set_vexpand: true,
                    set_hexpand: true,
                    set_min_content_height: 420,

                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 16,
                        set_margin_all: 24,

                        // Name field
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Name",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "name_entry"]
                            gtk4::Entry {
                                set_placeholder_text: Some("Item name"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AddItemFormInput::NameChanged(entry.text().to_string()));
                                },
                            },
                        },

                        // Type dropdown
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Type",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "type_dropdown"]
                            gtk4::DropDown {
                                set_model: Some(&with_placeholder("Select a type", &ItemKind::LABELS)),
                                connect_selected_notify[sender] => move |dropdown| {
                                    sender.input(AddItemFormInput::TypeSelected(dropdown.selected()));
                                },
                            },
                        },

                        // Serial number field
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Serial Number",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "serial_entry"]
                            gtk4::Entry {
                                set_placeholder_text: Some("Serial number"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AddItemFormInput::SerialNumberChanged(entry.text().to_string()));
                                },
                            },
                        },

                        // Barcode field (optional)
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Barcode",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "barcode_entry"]
                            gtk4::Entry {
                                set_placeholder_text: Some("Optional"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AddItemFormInput::BarcodeChanged(entry.text().to_string()));
                                },
                            },
                        },

                        // Location field
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Location",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "location_entry"]
                            gtk4::Entry {
                                set_placeholder_text: Some("Location"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AddItemFormInput::LocationChanged(entry.text().to_string()));
                                },
                            },
                        },

                        // Status dropdown
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Vertical,
                            set_spacing: 4,

                            gtk4::Label {
                                set_text: "Status",
                                set_halign: gtk4::Align::Start,
                                add_css_class: "dim-label",
                            },

                            #[name = "status_dropdown"]
                            gtk4::DropDown {
                                set_model: Some(&with_placeholder("Select a status", &ItemStatus::LABELS)),
                                connect_selected_notify[sender] => move |dropdown| {
                                    sender.input(AddItemFormInput::StatusSelected(dropdown.selected()));
                                },
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = AddItemForm {
            name: String::new(),
            serial_number: String::new(),
            barcode: String::new(),
            location: String::new(),
            type_index: PLACEHOLDER,
            status_index: PLACEHOLDER,
            visible: false,
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            AddItemFormInput::Open => {
                self.clear();
                self.visible = true;
                widgets.name_entry.set_text("");
                widgets.serial_entry.set_text("");
                widgets.barcode_entry.set_text("");
                widgets.location_entry.set_text("");
                widgets.type_dropdown.set_selected(PLACEHOLDER);
                widgets.status_dropdown.set_selected(PLACEHOLDER);
                widgets.dialog.present();
            }
            AddItemFormInput::NameChanged(name) => {
                self.name = name;
            }
            AddItemFormInput::SerialNumberChanged(serial_number) => {
                self.serial_number = serial_number;
            }
            AddItemFormInput::BarcodeChanged(barcode) => {
                self.barcode = barcode;
            }
            AddItemFormInput::LocationChanged(location) => {
                self.location = location;
            }
            AddItemFormInput::TypeSelected(index) => {
                self.type_index = index;
            }
            AddItemFormInput::StatusSelected(index) => {
                self.status_index = index;
            }
            AddItemFormInput::Submit => {
                if !self.can_submit() {
                    return;
                }
                let (Some(item_type), Some(status)) = (
                    selected_label(self.type_index, &ItemKind::LABELS),
                    selected_label(self.status_index, &ItemStatus::LABELS),
                ) else {
                    return;
                };
                let item = NewItem {
                    name: self.name.clone(),
                    item_type: item_type.to_string(),
                    serial_number: self.serial_number.clone(),
                    barcode: if self.barcode.trim().is_empty() {
                        None
                    } else {
                        Some(self.barcode.clone())
                    },
                    location: self.location.clone(),
                    status: status.to_string(),
                };
                // The dialog stays open: it only closes once the backend
                // accepts the item (Succeeded).
                let _ = sender.output(AddItemFormOutput::Submitted(item));
            }
            AddItemFormInput::Cancel => {
                self.visible = false;
                widgets.dialog.set_visible(false);
                let _ = sender.output(AddItemFormOutput::Cancelled);
            }
            AddItemFormInput::Succeeded => {
                self.clear();
                self.visible = false;
                widgets.dialog.set_visible(false);
            }
        }

        self.update_view(widgets, sender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddItemForm {
        AddItemForm {
            name: "Dell XPS".to_string(),
            serial_number: "SN1".to_string(),
            barcode: String::new(),
            location: "HQ".to_string(),
            type_index: 1,
            status_index: 1,
            visible: true,
        }
    }

    #[test]
    fn selected_label_rejects_placeholder_and_invalid_positions() {
        assert_eq!(selected_label(1, &ItemKind::LABELS), Some("Computer"));
        assert_eq!(
            selected_label(ItemKind::LABELS.len() as u32, &ItemKind::LABELS),
            Some("Mobile")
        );
        assert_eq!(selected_label(PLACEHOLDER, &ItemKind::LABELS), None);
        // GTK_INVALID_LIST_POSITION, reported when nothing is selected.
        assert_eq!(selected_label(u32::MAX, &ItemKind::LABELS), None);
        assert_eq!(
            selected_label(ItemKind::LABELS.len() as u32 + 1, &ItemKind::LABELS),
            None
        );
    }

    #[test]
    fn submit_gate_requires_valid_dropdown_selections() {
        assert!(filled_form().can_submit());

        let mut form = filled_form();
        form.type_index = u32::MAX;
        assert!(!form.can_submit());

        let mut form = filled_form();
        form.status_index = PLACEHOLDER;
        assert!(!form.can_submit());
    }
}
