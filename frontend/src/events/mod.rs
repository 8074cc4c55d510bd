pub mod api;
pub mod components;
pub mod feed;
pub mod models;
pub mod page;
