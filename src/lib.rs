//! Library entry for newsdeck exposing core logic for integration tests.

pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod net;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
