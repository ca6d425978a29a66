//! Service layer - lookup orchestration between handlers and the search backend

pub mod search;

pub use search::{Lookup, SearchService};
