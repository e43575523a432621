pub mod confirm_dialog;
pub mod date_input;
pub mod file_picker;
pub mod page_header;
pub mod stat_card;
pub mod ui;
