mod app;
pub mod app_core;
pub mod background;
pub mod cli;
pub mod commands;
pub mod events;
pub mod logging;
pub mod settings;
pub mod state;
pub mod storage;
pub mod ui;
pub mod utils;

pub use app::{App, LiveDataHandler};

// Always expose testing module (integration tests need it)
pub mod testing;
