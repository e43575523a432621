pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod download;
pub mod http;
pub mod icons;
pub mod modal_frame;
