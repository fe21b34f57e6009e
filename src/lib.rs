// src/lib.rs

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod formatter;
pub mod key_handlers;
pub mod language;
pub mod logging;
pub mod models;
pub mod status_indicator;
pub mod translations;
pub mod translator;
pub mod ui;
