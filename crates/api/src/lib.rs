//! HTTP API: user store, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod store;
