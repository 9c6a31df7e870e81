pub mod client_list;
pub mod detail_panel;
pub mod editor_form;
pub mod footer;
pub mod tabs;
