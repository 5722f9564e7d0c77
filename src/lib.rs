//! To-do service: lifecycle rules for to-do items behind a small REST API.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: to-do items and their completion rules, free of
//!   infrastructure dependencies
//! - **Ports**: the repository trait the lifecycle service depends on
//! - **Adapters**: in-memory and `SQLite` implementations of the port
//!
//! # Modules
//!
//! - [`todo`]: domain, ports, adapters and the lifecycle service
//! - [`http`]: axum routes, API-key gate and JSON bodies
//! - [`config`]: environment-driven server configuration

pub mod config;
pub mod http;
pub mod todo;
