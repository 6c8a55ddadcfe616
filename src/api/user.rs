use axum::{extract::State, Json};
use tower_cookies::Cookies;

use super::{clear_access_token, set_access_token, ApiResult, AppState, Input, Params, Payload};
use crate::{
    service::{self, AuthPayload, CurrentUser, LoginInput, Profile, RegisterInput, UpdateUserInput, UserId},
    Context,
};

pub(super) async fn register(
    State(state): State<AppState>,
    ctx: Context,
    cookies: Cookies,
    Payload(input): Payload<RegisterInput>,
) -> ApiResult<AuthPayload> {
    let payload = service::user::register(&ctx, &state.keys, input).await?;
    set_access_token(&cookies, &payload.access_token);
    Ok(Json(payload))
}

pub(super) async fn login(
    State(state): State<AppState>,
    ctx: Context,
    cookies: Cookies,
    Payload(input): Payload<LoginInput>,
) -> ApiResult<AuthPayload> {
    let payload = service::user::login(&ctx, &state.keys, input).await?;
    set_access_token(&cookies, &payload.access_token);
    Ok(Json(payload))
}

pub(super) async fn logout(cookies: Cookies) -> ApiResult<()> {
    clear_access_token(&cookies);
    Ok(Json(()))
}

pub(super) async fn update(ctx: Context, Payload(input): Payload<UpdateUserInput>) -> ApiResult<UserId> {
    Ok(Json(service::user::update(&ctx, input).await?))
}

pub(super) async fn current_user(ctx: Context) -> ApiResult<Option<CurrentUser>> {
    Ok(Json(service::user::current_user(&ctx).await?))
}

pub(super) async fn by_username(
    ctx: Context,
    Params(Input { input }): Params<Input<String>>,
) -> ApiResult<Profile> {
    Ok(Json(service::user::by_username(&ctx, &input).await?))
}

pub(super) async fn change_following_status(
    ctx: Context,
    Payload(user_id): Payload<i32>,
) -> ApiResult<bool> {
    Ok(Json(service::user::toggle_follow(&ctx, user_id).await?))
}
