//! Adapter implementations of the to-do repository port.

pub mod memory;
pub mod sqlite;
