use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::game;
use service::games::{CreateGameInput, UpdateGameInput};
use tracing::info;

use crate::{errors::JsonApiError, observability::record_write, routes::ServerState};

#[utoipa::path(
    get, path = "/games", tag = "games",
    responses(
        (status = 200, description = "Every game, ordered by id", body = [crate::openapi::GameDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<game::Model>>, JsonApiError> {
    let games = state.games.list_all().await?;
    info!(count = games.len(), "list games");
    Ok(Json(games))
}

#[utoipa::path(
    post, path = "/games", tag = "games",
    request_body = crate::openapi::CreateGameInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::GameDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateGameInput>, JsonRejection>,
) -> Result<(StatusCode, Json<game::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.games.create(input).await?;
    record_write("create");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/games/{id}", tag = "games",
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::GameDoc),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<game::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.games.find_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/games/platform/{platform}", tag = "games",
    params(("platform" = String, Path, description = "Platform, matched ignoring case")),
    responses((status = 200, description = "Matching games, possibly empty", body = [crate::openapi::GameDoc]))
)]
pub async fn by_platform(
    State(state): State<ServerState>,
    platform: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<game::Model>>, JsonApiError> {
    let Path(platform) = platform?;
    let games = state.games.find_by_platform(&platform).await?;
    info!(%platform, count = games.len(), "list games by platform");
    Ok(Json(games))
}

#[utoipa::path(
    get, path = "/games/genre/{genre}", tag = "games",
    params(("genre" = String, Path, description = "Genre, matched ignoring case")),
    responses((status = 200, description = "Matching games, possibly empty", body = [crate::openapi::GameDoc]))
)]
pub async fn by_genre(
    State(state): State<ServerState>,
    genre: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<game::Model>>, JsonApiError> {
    let Path(genre) = genre?;
    let games = state.games.find_by_genre(&genre).await?;
    info!(%genre, count = games.len(), "list games by genre");
    Ok(Json(games))
}

#[utoipa::path(
    patch, path = "/games/{id}", tag = "games",
    params(("id" = i32, Path, description = "Game id")),
    request_body = crate::openapi::UpdateGameInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::GameDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateGameInput>, JsonRejection>,
) -> Result<Json<game::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let updated = state.games.update(id, input).await?;
    record_write("update");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/games/{id}", tag = "games",
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.games.delete(id).await?;
    record_write("delete");
    Ok(StatusCode::NO_CONTENT)
}
