//! Contact form core and terminal front end
//!
//! `controller` holds the form state machine; `transport` delivers finished
//! submissions; `app` and `ui` wire both to a Ratatui terminal.

pub mod app;
pub mod config;
pub mod controller;
pub mod platform;
pub mod state;
pub mod transport;
pub mod ui;
