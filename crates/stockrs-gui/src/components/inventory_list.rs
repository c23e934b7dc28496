//! Inventory table component.
//!
//! Pure rendering: receives the item collection and emits delete intents.
//! No sorting, filtering, or pagination happens here; the parent decides
//! what to show.

use gtk4::prelude::*;
use relm4::prelude::*;
use stockrs_core::{InventoryItem, ItemKind, ItemStatus};

const COLUMN_TITLES: [&str; 7] = [
    "Type",
    "Name",
    "Serial Number",
    "Barcode",
    "Location",
    "Status",
    "Actions",
];

/// Messages for the inventory table.
#[derive(Debug)]
pub enum InventoryListInput {
    /// Replace the rendered collection.
    SetItems(Vec<InventoryItem>),
}

/// Output messages from the inventory table.
#[derive(Debug, Clone)]
pub enum InventoryListOutput {
    /// The delete control of an item was clicked.
    DeleteRequested(i64),
}

/// Inventory table model.
pub struct InventoryList {
    items: Vec<InventoryItem>,
}

#[relm4::component(pub)]
impl Component for InventoryList {
    type Init = ();
    type Input = InventoryListInput;
    type Output = InventoryListOutput;
    type CommandOutput = ();

    view! {
        gtk4::Box {
            set_orientation: gtk4::Orientation::Vertical,
            set_hexpand: true,
            set_vexpand: true,

            gtk4::ScrolledWindow {
                set_vexpand: true,
                set_hexpand: true,
                set_hscrollbar_policy: gtk4::PolicyType::Automatic,

                #[name = "table"]
                gtk4::Grid {
                    set_column_spacing: 24,
                    set_row_spacing: 8,
                    set_margin_all: 16,
                },
            },

            gtk4::Label {
                set_text: "No items in inventory.",
                set_vexpand: true,
                add_css_class: "dim-label",
                #[watch]
                set_visible: model.items.is_empty(),
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = InventoryList { items: Vec::new() };

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
            InventoryListInput::SetItems(items) => {
                self.items = items;
                self.rebuild_table(widgets, &sender);
            }
        }

        self.update_view(widgets, sender);
    }
}

impl InventoryList {
    /// Rebuild the table grid from the current collection.
    fn rebuild_table(&self, widgets: &mut <Self as Component>::Widgets, sender: &ComponentSender<Self>) {
        let table = &widgets.table;

        // Clear existing rows
        while let Some(child) = table.first_child() {
            table.remove(&child);
        }

        table.set_visible(!self.items.is_empty());
        if self.items.is_empty() {
            return;
        }

        // Header row
        for (column, title) in COLUMN_TITLES.iter().enumerate() {
            let label = gtk4::Label::new(Some(title));
            label.set_halign(gtk4::Align::Start);
            label.add_css_class("heading");
            label.add_css_class("dim-label");
            table.attach(&label, column as i32, 0, 1, 1);
        }

        for (i, item) in self.items.iter().enumerate() {
            let row = (i + 1) as i32;

            // Type: icon plus label. Unrecognized types get the computer icon.
            let type_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
            let icon = gtk4::Image::from_icon_name(ItemKind::from_label(&item.item_type).icon_name());
            type_box.append(&icon);
            let type_label = gtk4::Label::new(Some(&item.item_type));
            type_label.set_halign(gtk4::Align::Start);
            type_box.append(&type_label);
            table.attach(&type_box, 0, row, 1, 1);

            let name = gtk4::Label::new(Some(&item.name));
            name.set_halign(gtk4::Align::Start);
            name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
            table.attach(&name, 1, row, 1, 1);

            let serial = gtk4::Label::new(Some(&item.serial_number));
            serial.set_halign(gtk4::Align::Start);
            table.attach(&serial, 2, row, 1, 1);

            let barcode = match &item.barcode {
                Some(code) => {
                    let barcode_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
                    let icon = gtk4::Image::from_icon_name("view-barcode-symbolic");
                    barcode_box.append(&icon);
                    let label = gtk4::Label::new(Some(code));
                    label.set_halign(gtk4::Align::Start);
                    barcode_box.append(&label);
                    barcode_box.upcast::<gtk4::Widget>()
                }
                None => {
                    let label = gtk4::Label::new(Some("N/A"));
                    label.set_halign(gtk4::Align::Start);
                    label.add_css_class("dim-label");
                    label.upcast::<gtk4::Widget>()
                }
            };
            table.attach(&barcode, 3, row, 1, 1);

            let location = gtk4::Label::new(Some(&item.location));
            location.set_halign(gtk4::Align::Start);
            table.attach(&location, 4, row, 1, 1);

            // Status badge. Unmapped statuses fall through to the
            // maintenance styling.
            let badge = gtk4::Label::new(Some(&item.status));
            badge.set_halign(gtk4::Align::Start);
            badge.add_css_class("status-badge");
            badge.add_css_class(ItemStatus::from_label(&item.status).css_class());
            table.attach(&badge, 5, row, 1, 1);

            let delete_btn = gtk4::Button::from_icon_name("user-trash-symbolic");
            delete_btn.add_css_class("flat");
            delete_btn.set_tooltip_text(Some("Delete item"));
            let id = item.id;
            let sender_clone = sender.clone();
            delete_btn.connect_clicked(move |_| {
                let _ = sender_clone.output(InventoryListOutput::DeleteRequested(id));
            });
            table.attach(&delete_btn, 6, row, 1, 1);
        }
    }
}
