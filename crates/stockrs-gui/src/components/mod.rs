pub mod add_item_form;
pub mod auth_form;
pub mod dashboard;
pub mod inventory_list;
