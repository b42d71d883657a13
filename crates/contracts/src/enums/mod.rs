pub mod event_category;
