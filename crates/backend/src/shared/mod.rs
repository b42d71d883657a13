pub mod catalogs;
pub mod config;
