// src/utils.rs

//! Utility helpers shared across the application.

pub mod time;

pub use time::{format_timestamp_csv, format_timestamp_display, parse_timestamp};
