//! Shared helpers for command handlers

pub mod health;
pub mod logging;
