//! Pokédex Server
//!
//! HTTP lookup service for Pokémon data:
//! - Lookups by Pokédex number, name, keyword, or a bundle of conditions
//! - Query compilation via `pokedex-query`
//! - Elasticsearch as the search backend

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
