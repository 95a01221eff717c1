//! # FormGuest API
//!
//! HTTP application layer - handlers, wiring and main entry point.
//!
//! This crate contains:
//! - Command handlers (dialog and webhook → services)
//! - Application context (dependency injection)
//! - The axum router and server loop
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the dialog operations and the submission webhook over HTTP

pub mod commands;
pub mod context;
pub mod server;
pub mod utils;

pub use context::*;
pub use server::{router, serve};
