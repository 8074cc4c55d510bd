pub mod api;
pub mod browser;
pub mod components;
pub mod detail;
pub mod models;
pub mod page;
pub mod tables;
