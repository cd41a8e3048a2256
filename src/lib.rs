//! Linkdeck - a terminal client for URL shortener services
//!
//! Create, search and share short links against a remote shortener API
//! without leaving the terminal. All shortening logic (slug generation,
//! uniqueness, persistence, redirects) lives on the server; this crate is
//! the client-side orchestration around it.
//!
//! # Architecture
//! - `client`: HTTP API client and wire types
//! - `store`: shared state container (pagination, search, debouncing)
//! - `tui`: ratatui terminal interface
//! - `config`: configuration management
//! - `system`: logging, browser and clipboard glue
//! - `errors`: crate error type
//! - `utils`: display helpers

pub mod client;
pub mod config;
pub mod errors;
pub mod store;
pub mod system;
pub mod tui;
pub mod utils;
