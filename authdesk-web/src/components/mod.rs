pub(crate) mod category_picker;
pub(crate) mod error_alert;
pub(crate) mod header_nav_item;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use category_picker::CategoryPicker;
pub use error_alert::ErrorAlert;
pub use loading::Loading;
pub use user_dropdown::{UserDropdown, use_logout};
