//! zoneblog - client library for the zone01 blog API
//!
//! Session handling, typed API clients and per-screen view models, plus the
//! pieces the `zoneblog` binary is built from. Modules are public for use in
//! integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod models;
pub mod routes;
pub mod session;
pub mod traits;
pub mod view;

pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
