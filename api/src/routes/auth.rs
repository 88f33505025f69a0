//! Authentication & identity HTTP contract (spec §6): phone OTP, OAuth,
//! email/password, profile, usernames, avatar uploads, and sessions.

use actix_web::{web, HttpResponse};

use crate::dto::auth::{
    AuthSessionResponse, AuthUser, CreateAvatarUploadPlanRequest, EmailLoginRequest,
    FinalizeAvatarUploadRequest, OAuthLoginRequest, RefreshSessionRequest, ReserveUsernameRequest,
    StartPhoneLoginRequest, UpdateProfileRequest, UsernameAvailabilityQuery,
    VerifyPhoneCodeRequest,
};
use crate::errors::ApiError;
use crate::middleware::auth::{AuthenticatedUser, JwtAuth};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/phone/start", web::post().to(start_phone_login))
            .route("/phone/verify", web::post().to(verify_phone_code))
            .route("/oauth", web::post().to(login_with_oauth))
            .route("/email", web::post().to(login_with_email_password))
            .route(
                "/username/availability",
                web::get().to(check_username_availability),
            )
            .route("/session/refresh", web::post().to(refresh_session))
            .service(
                web::scope("")
                    .wrap(JwtAuth::new())
                    .route("/me", web::get().to(get_profile))
                    .route("/profile", web::patch().to(update_profile))
                    .route("/username/reservation", web::post().to(reserve_username))
                    .route("/avatar/upload-plan", web::post().to(create_avatar_upload_plan))
                    .route(
                        "/avatar/upload-plan/{upload_id}/finalize",
                        web::post().to(finalize_avatar_upload),
                    )
                    .route("/logout", web::post().to(logout)),
            ),
    );
}

async fn start_phone_login(
    state: web::Data<AppState>,
    body: web::Json<StartPhoneLoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let challenge = state.auth.start_phone_login(&body.phone).await?;
    Ok(HttpResponse::Ok().json(challenge))
}

async fn verify_phone_code(
    state: web::Data<AppState>,
    body: web::Json<VerifyPhoneCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .auth
        .verify_phone_code(&body.challenge_id, &body.code)
        .await?;
    Ok(HttpResponse::Ok().json(AuthSessionResponse::from(result)))
}

async fn login_with_oauth(
    state: web::Data<AppState>,
    body: web::Json<OAuthLoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .auth
        .login_with_oauth(body.provider, &body.subject, body.email_hint.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(AuthSessionResponse::from(result)))
}

async fn login_with_email_password(
    state: web::Data<AppState>,
    body: web::Json<EmailLoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .auth
        .login_with_email_password(&body.email, &body.password)
        .await?;
    Ok(HttpResponse::Ok().json(AuthSessionResponse::from(result)))
}

async fn check_username_availability(
    state: web::Data<AppState>,
    query: web::Query<UsernameAvailabilityQuery>,
) -> Result<HttpResponse, ApiError> {
    let availability = state
        .auth
        .check_username_availability(&query.username)
        .await?;
    Ok(HttpResponse::Ok().json(availability))
}

async fn refresh_session(
    state: web::Data<AppState>,
    body: web::Json<RefreshSessionRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = state
        .auth
        .refresh_session(body.into_inner().refresh_token)
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let profile = state.auth.get_profile(user.0).await?;
    Ok(HttpResponse::Ok().json(AuthUser::from(profile)))
}

async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let profile = state
        .auth
        .update_profile(
            user.0,
            body.display_name,
            body.username,
            body.theme_preference,
        )
        .await?;
    Ok(HttpResponse::Ok().json(AuthUser::from(profile)))
}

async fn reserve_username(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<ReserveUsernameRequest>,
) -> Result<HttpResponse, ApiError> {
    let availability = state
        .auth
        .reserve_username(&body.username, user.0)
        .await?;
    Ok(HttpResponse::Ok().json(availability))
}

async fn create_avatar_upload_plan(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<CreateAvatarUploadPlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = state
        .auth
        .create_avatar_upload_plan(user.0, body.into_inner().request)
        .await?;
    Ok(HttpResponse::Ok().json(plan))
}

async fn finalize_avatar_upload(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<FinalizeAvatarUploadRequest>,
) -> Result<HttpResponse, ApiError> {
    let profile = state
        .auth
        .finalize_avatar_upload(user.0, &path.into_inner(), body.into_inner().meta)
        .await?;
    Ok(HttpResponse::Ok().json(AuthUser::from(profile)))
}

async fn logout(state: web::Data<AppState>, user: AuthenticatedUser) -> Result<HttpResponse, ApiError> {
    state.auth.logout(user.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
