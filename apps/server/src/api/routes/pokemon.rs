//! Pokémon lookup routes

use crate::api::handlers::pokemon;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/pokemon` routes, each with its trailing-slash variant.
pub fn pokemon_routes() -> Router<AppState> {
    let routes: [(&str, axum::routing::MethodRouter<AppState>); 5] = [
        ("/pokemon", get(pokemon::random)),
        ("/pokemon/name/:name", get(pokemon::by_name)),
        (
            "/pokemon/pokedex_number/:pokedex_number",
            get(pokemon::by_pokedex_number),
        ),
        ("/pokemon/keyword/:keyword", get(pokemon::by_keyword)),
        ("/pokemon/conditions", get(pokemon::by_conditions)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router
                .route(path, handler.clone())
                .route(&format!("{path}/"), handler)
        })
}
