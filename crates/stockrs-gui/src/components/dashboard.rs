//! Dashboard component.
//!
//! Composes the inventory table with role-appropriate controls: admins get
//! an "Add New Item" action and working delete controls; for plain users the
//! delete controls are rendered but inert.

use gtk4::prelude::*;
use relm4::prelude::*;
use stockrs_core::InventoryItem;

use crate::components::inventory_list::{InventoryList, InventoryListInput, InventoryListOutput};

/// Messages for the dashboard.
#[derive(Debug)]
pub enum DashboardInput {
    /// Replace the rendered collection.
    SetItems(Vec<InventoryItem>),
    /// Switch between the admin and user variants.
    SetAdmin(bool),
    /// The "Add New Item" button was clicked.
    AddItemClicked,
    /// Message from the inventory table.
    ListMessage(InventoryListOutput),
}

/// Output messages from the dashboard.
#[derive(Debug, Clone)]
pub enum DashboardOutput {
    /// Admin wants to open the add-item form.
    AddItemRequested,
    /// Admin wants an item deleted.
    DeleteItem(i64),
}

/// Dashboard model.
pub struct Dashboard {
    is_admin: bool,
    list: Controller<InventoryList>,
}

#[relm4::component(pub)]
impl Component for Dashboard {
    type Init = ();
    type Input = DashboardInput;
    type Output = DashboardOutput;
    type CommandOutput = ();

    view! {
        gtk4::Box {
            set_orientation: gtk4::Orientation::Vertical,
            set_spacing: 12,
            set_hexpand: true,
            set_vexpand: true,

            gtk4::Box {
                set_orientation: gtk4::Orientation::Horizontal,
                set_spacing: 12,

                gtk4::Label {
                    #[watch]
                    set_label: if model.is_admin { "Admin Dashboard" } else { "User Dashboard" },
                    set_halign: gtk4::Align::Start,
                    add_css_class: "title-2",
                },

                gtk4::Button {
                    set_label: "Add New Item",
                    add_css_class: "suggested-action",
                    set_halign: gtk4::Align::End,
                    set_hexpand: true,
                    #[watch]
                    set_visible: model.is_admin,
                    connect_clicked => DashboardInput::AddItemClicked,
                },
            },

            model.list.widget().clone() {},
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let list = InventoryList::builder()
            .launch(())
            .forward(sender.input_sender(), DashboardInput::ListMessage);

        let model = Dashboard {
            is_admin: false,
            list,
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
            DashboardInput::SetItems(items) => {
                self.list.emit(InventoryListInput::SetItems(items));
            }
            DashboardInput::SetAdmin(is_admin) => {
                self.is_admin = is_admin;
            }
            DashboardInput::AddItemClicked => {
                let _ = sender.output(DashboardOutput::AddItemRequested);
            }
            DashboardInput::ListMessage(InventoryListOutput::DeleteRequested(id)) => {
                // The delete control is rendered for everyone but only
                // dispatches for administrators.
                if self.is_admin {
                    let _ = sender.output(DashboardOutput::DeleteItem(id));
                } else {
                    tracing::debug!(id, "delete ignored for non-admin session");
                }
            }
        }

        self.update_view(widgets, sender);
    }
}
