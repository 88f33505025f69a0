//! Content & progress HTTP contract (spec §6): media catalog, group
//! selections, posts, the spoiler-gated feed, and mark/rollback progress.

use actix_web::{web, HttpResponse};

use crate::dto::content::{
    CreateMediaItemRequest, CreateMediaUnitRequest, CreatePostRequest, FeedQuery,
    MarkProgressRequest, ProgressAuditQuery, RollbackProgressRequest, SelectGroupMediaRequest,
};
use crate::errors::ApiError;
use crate::middleware::auth::{AuthenticatedUser, JwtAuth};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .wrap(JwtAuth::new())
            .route("/media-items", web::post().to(create_media_item))
            .route("/media-units", web::post().to(create_media_unit))
            .route("/group-selections", web::post().to(select_group_media))
            .route(
                "/group-selections/active",
                web::get().to(get_active_selection),
            )
            .route("/posts", web::post().to(create_post))
            .route("/feed", web::get().to(get_feed_for_user))
            .route("/progress/mark", web::post().to(mark_as_read))
            .route("/progress/rollback", web::post().to(rollback_progress))
            .route("/progress/audit", web::get().to(get_progress_audit_trail)),
    );
}

async fn create_media_item(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    body: web::Json<CreateMediaItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let item = state
        .content
        .create_media_item(body.kind, body.title, body.description, body.author, body.metadata)
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

async fn create_media_unit(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    body: web::Json<CreateMediaUnitRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let unit = state
        .content
        .create_media_unit(
            body.media_item_id,
            body.release_order,
            body.chapter,
            body.season,
            body.episode,
            body.label,
        )
        .await?;
    Ok(HttpResponse::Ok().json(unit))
}

async fn select_group_media(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    body: web::Json<SelectGroupMediaRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let selection = state
        .content
        .select_group_media(body.group_id, body.media_item_id, body.is_active)
        .await?;
    Ok(HttpResponse::Ok().json(selection))
}

async fn get_active_selection(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let selection = state
        .content
        .get_active_selection(&query.group_id, query.media_item_id)
        .await?;
    Ok(HttpResponse::Ok().json(selection))
}

async fn create_post(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let post = state
        .content
        .create_post(
            body.group_id,
            body.media_item_id,
            body.author_id,
            body.preview_text,
            body.body,
            body.required_unit_id,
        )
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

async fn get_feed_for_user(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let feed = state
        .content
        .get_feed_for_user(user.0, &query.group_id, query.media_item_id)
        .await?;
    Ok(HttpResponse::Ok().json(feed))
}

async fn mark_as_read(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<MarkProgressRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let result = state
        .content
        .mark_as_read(user.0, body.group_id, body.media_item_id, body.unit_id)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn rollback_progress(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<RollbackProgressRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .content
        .rollback_progress(user.0, &body.rollback_token)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_progress_audit_trail(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<ProgressAuditQuery>,
) -> Result<HttpResponse, ApiError> {
    let events = state
        .content
        .get_progress_audit_trail(user.0, &query.group_id, query.media_item_id)
        .await?;
    Ok(HttpResponse::Ok().json(events))
}
