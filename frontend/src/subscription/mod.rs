pub mod api;
pub mod components;
pub mod form;
pub mod models;
