//! Middleware components for the relay server

pub mod cors;
pub mod logging;
