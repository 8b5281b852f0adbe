pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod list_view;
pub mod request_seq;
