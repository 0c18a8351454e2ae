pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod feedback;
pub mod form;
pub mod icons;
pub mod list;
pub mod list_utils;
pub mod number_format;

#[cfg(test)]
pub mod testing;
