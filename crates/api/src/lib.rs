//! HTTP API: product list endpoint and contact inquiry intake.

pub mod app;
pub mod config;
pub mod middleware;
