//! Pokédex query compiler
//!
//! Turns typed lookup parameters into Elasticsearch query documents:
//!
//! - [`param`]: one compiler per searchable attribute
//! - [`query`]: single-attribute and conditional query assembly
//! - [`conditions`]: the query-string bundle of the conditional lookup
//! - [`document`]: indexed documents and the response record
//!
//! # Example
//!
//! ```rust
//! use pokedex_query::{conditional_query, Param};
//!
//! let query = conditional_query(&[
//!     Param::Form(Some("れいじゅうフォルム".to_string())),
//!     Param::legendary(Some("1")),
//! ]);
//! assert_eq!(query.must().clauses().len(), 2);
//! ```
//!
//! Bad input never fails; it only loosens the query.

#![forbid(unsafe_code)]

pub mod clause;
pub mod conditions;
pub mod decode;
pub mod document;
pub mod param;
pub mod query;

pub use clause::{Clause, MatchOperator, TermValue};
pub use conditions::Conditions;
pub use decode::{decode_flag, decode_pokedex_number};
pub use document::{
    reshape, Abilities, BaseStats, GenderType, PokemonDocument, PokemonRecord, PokemonType,
    SearchHit, SearchResponse,
};
pub use param::{Compile, Compiled, Param};
pub use query::{
    conditional_query, keyword_query, name_query, pokedex_number_query, single_param_query,
    single_query, Must, SearchQuery,
};
