pub mod selection_form;
