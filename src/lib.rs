pub mod app;
pub mod command;
pub mod config;
pub mod content;
pub mod cue;
pub mod error;
pub mod event;
pub mod input;
pub mod nav;
pub mod registry;
pub mod ui;
