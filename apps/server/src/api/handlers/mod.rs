//! HTTP handlers

pub mod metrics;
pub mod pokemon;
