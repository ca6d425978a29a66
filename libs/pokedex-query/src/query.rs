//! Query assembly.
//!
//! Both shapes wrap clauses in a boolean `must` query:
//!
//! ```json
//! {"query": {"bool": {"must": ...}}}
//! ```
//!
//! Single-attribute lookups carry one bare clause in `must`. Conditional
//! lookups carry a flat list of every clause their compilers produced.

use serde::Serialize;

use crate::clause::Clause;
use crate::param::{keyword_clause, Compile, Compiled, Param};

/// Contents of a `must` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Must {
    One(Clause),
    All(Vec<Clause>),
}

impl Must {
    pub fn clauses(&self) -> &[Clause] {
        match self {
            Must::One(clause) => std::slice::from_ref(clause),
            Must::All(clauses) => clauses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoolQuery {
    pub must: Must,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryBody {
    pub bool: BoolQuery,
}

/// Complete search request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub query: QueryBody,
}

impl SearchQuery {
    pub fn new(must: Must) -> Self {
        Self {
            query: QueryBody {
                bool: BoolQuery { must },
            },
        }
    }

    pub fn must(&self) -> &Must {
        &self.query.bool.must
    }

    /// True when the query carries no clause at all and matches every document.
    pub fn matches_all(&self) -> bool {
        self.must().clauses().is_empty()
    }
}

/// Wrap one compiled clause.
///
/// Returns `None` when nothing was compiled; callers skip the backend call
/// in that case.
pub fn single_query(clause: Option<Clause>) -> Option<SearchQuery> {
    clause.map(|c| SearchQuery::new(Must::One(c)))
}

/// Compile a single-attribute param and wrap its clause.
///
/// Multi-slot params are not single-attribute lookups and yield `None`.
pub fn single_param_query(param: &Param) -> Option<SearchQuery> {
    single_query(param.compile().and_then(Compiled::into_single))
}

/// Assemble the conditional query from every compiler, in order.
///
/// `None` results are dropped, lists are flattened one level. No conditions
/// at all still yields a query whose `must` is `[]`, which matches every
/// document.
pub fn conditional_query<'a, C, I>(compilers: I) -> SearchQuery
where
    C: Compile + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut clauses = Vec::new();
    for compiler in compilers {
        match compiler.compile() {
            None => continue,
            Some(Compiled::Many(many)) => clauses.extend(many),
            Some(Compiled::Single(one)) => clauses.push(one),
        }
    }
    SearchQuery::new(Must::All(clauses))
}

/// Number lookup query. A non-integer raw value yields `None`.
pub fn pokedex_number_query(raw: Option<&str>) -> Option<SearchQuery> {
    single_param_query(&Param::pokedex_number(raw))
}

/// Exact name lookup query.
pub fn name_query(name: Option<&str>) -> Option<SearchQuery> {
    single_param_query(&Param::Name(name.map(str::to_string)))
}

/// Free-text keyword query. A keyword is always present, so this never
/// short-circuits.
pub fn keyword_query(keyword: &str) -> SearchQuery {
    SearchQuery::new(Must::One(keyword_clause(keyword)))
}
