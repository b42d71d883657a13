pub mod catalog;
pub mod selection;
pub mod selection_form;
pub mod tooltip;
