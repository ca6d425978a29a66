//! Pokémon lookup handlers
//!
//! Every lookup answers with a JSON array of records, possibly empty.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use pokedex_query::{decode_pokedex_number, Conditions, PokemonRecord};
use rand::Rng;

use crate::{request_context::RequestContext, state::AppState, Error, Result};

type Records = Json<Vec<PokemonRecord>>;

/// `GET /pokemon`: one Pokémon picked at random by Pokédex number.
pub async fn random(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Records> {
    let max = state.config.search.max_pokedex_number;
    let number = rand::rng().random_range(1..=max);
    tracing::debug!(request_id = %ctx.request_id, number, "Random Pokédex number drawn");

    let records = state.search_service.by_random_number(number).await?;
    Ok(Json(records))
}

/// `GET /pokemon/pokedex_number/{pokedex_number}`
///
/// A segment that is not an integer yields an empty list. An integer outside
/// the National Pokédex range is rejected with 422.
pub async fn by_pokedex_number(
    State(state): State<AppState>,
    Path(pokedex_number): Path<String>,
) -> Result<Records> {
    let max = state.config.search.max_pokedex_number;
    if let Some(number) = decode_pokedex_number(Some(&pokedex_number)) {
        if !(1..=max).contains(&number) {
            return Err(Error::UnprocessableEntity(format!(
                "pokedex_number must be between 1 and {max}, got {number}"
            )));
        }
    }

    let records = state
        .search_service
        .by_pokedex_number(&pokedex_number)
        .await?;
    Ok(Json(records))
}

/// `GET /pokemon/name/{name}`
pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Records> {
    let records = state.search_service.by_name(&name).await?;
    Ok(Json(records))
}

/// `GET /pokemon/keyword/{keyword}`
pub async fn by_keyword(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Records> {
    let records = state.search_service.by_keyword(&keyword).await?;
    Ok(Json(records))
}

/// `GET /pokemon/conditions`
///
/// Parameters are read as raw pairs so that a repeated one keeps its last
/// value instead of rejecting the request.
pub async fn by_conditions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Records> {
    let conditions = Conditions::from_pairs(pairs);
    tracing::debug!(
        request_id = %ctx.request_id,
        lookup = ctx.lookup.unwrap_or("conditions"),
        "Conditional lookup"
    );
    let records = state.search_service.by_conditions(&conditions).await?;
    Ok(Json(records))
}
