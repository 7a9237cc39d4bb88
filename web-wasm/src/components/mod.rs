pub mod category_tabs;
pub mod header;
pub mod restaurant_card;
pub mod review_modal;
pub mod settings_panel;
pub mod status;
