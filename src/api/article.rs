use axum::Json;

use super::{ApiResult, Input, Params, Payload};
use crate::{
    service::{self, ArticleView, CreateArticleInput, ListArticlesInput, UpdateArticleInput},
    Context,
};

pub(super) async fn create(ctx: Context, Payload(input): Payload<CreateArticleInput>) -> ApiResult<String> {
    Ok(Json(service::article::create(&ctx, input).await?))
}

pub(super) async fn update(ctx: Context, Payload(input): Payload<UpdateArticleInput>) -> ApiResult<String> {
    Ok(Json(service::article::update(&ctx, input).await?))
}

pub(super) async fn delete(ctx: Context, Payload(slug): Payload<String>) -> ApiResult<()> {
    service::article::delete(&ctx, &slug).await?;
    Ok(Json(()))
}

pub(super) async fn change_favorited_status(ctx: Context, Payload(slug): Payload<String>) -> ApiResult<String> {
    Ok(Json(service::article::toggle_favorite(&ctx, &slug).await?))
}

pub(super) async fn by_slug(
    ctx: Context,
    Params(Input { input }): Params<Input<String>>,
) -> ApiResult<ArticleView> {
    Ok(Json(service::article::by_slug(&ctx, &input).await?))
}

pub(super) async fn list(
    ctx: Context,
    Params(input): Params<ListArticlesInput>,
) -> ApiResult<Vec<ArticleView>> {
    Ok(Json(service::article::list(&ctx, input).await?))
}

pub(super) async fn feed(ctx: Context) -> ApiResult<Vec<ArticleView>> {
    Ok(Json(service::article::feed(&ctx).await?))
}
