pub mod api_utils;
pub mod calendar;
pub mod components;
pub mod date_utils;
pub mod geometry;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod polling;
pub mod remote;
