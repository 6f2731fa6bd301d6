use crate::error::Error;
use crate::pagination::{paginate, DEFAULT_PER_PAGE};
use crate::store;
use crate::types::{
    AppState, CreateUserBody, PageParams, PageResponse, Result, UpdateUserBody, User,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

/// All /api/users routes. The static asset routes live in main.rs.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/users/all", get(all_users))
        .route("/api/users/page/:page", get(get_page))
        .route("/api/users/create", post(create_user))
        .route("/api/users/delete/:user_id", delete(delete_user))
        .route("/api/users/:user_id", get(get_user).put(update_user))
        .with_state(state)
}

pub async fn all_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    let users = store::load(&state.data_file)?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    let id: u64 = user_id
        .parse()
        .map_err(|_| Error::Validation(user_id.clone()))?;
    let users = store::load(&state.data_file)?;
    let user = users
        .into_iter()
        .find(|u| u.id == id)
        .ok_or(Error::UserNotFound(user_id))?;
    Ok(Json(user))
}

/// The web client puts the id in the body, so the path segment is ignored
/// in its favor. Only email and the two name fields are overwritten; the
/// stored avatar stays as-is.
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(_user_id): Path<String>,
    Json(body): Json<UpdateUserBody>,
) -> Result<StatusCode> {
    let mut users = store::load(&state.data_file)?;
    let Some(user) = users.iter_mut().find(|u| body.id.matches(u.id)) else {
        return Err(Error::UserNotFound(body.id.to_string()).into());
    };
    user.email = body.email;
    user.first_name = body.first_name;
    user.last_name = body.last_name;
    store::persist(&state.data_file, &mut users)?;
    Ok(StatusCode::CREATED)
}

pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse>> {
    let users = store::load(&state.data_file)?;
    let per_page = params.perpage.unwrap_or(DEFAULT_PER_PAGE);
    let page = paginate(&users, page, per_page)?;
    Ok(Json(page))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<User>)> {
    let mut users = store::load(&state.data_file)?;
    let user = User {
        id: store::next_available_id(&users),
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
        avatar: body.avatar,
    };
    users.push(user.clone());
    store::persist(&state.data_file, &mut users)?;
    info!("created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<StatusCode> {
    let mut users = store::load(&state.data_file)?;
    let Some(pos) = users.iter().position(|u| u.id == user_id) else {
        return Err(Error::UserNotFound(user_id.to_string()).into());
    };
    users.remove(pos);
    store::persist(&state.data_file, &mut users)?;
    info!("deleted user {}", user_id);
    Ok(StatusCode::NO_CONTENT)
}
