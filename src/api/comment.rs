use axum::Json;

use super::{ApiResult, Input, Params, Payload};
use crate::{
    service::{self, CommentView, CreateCommentInput},
    Context,
};

pub(super) async fn create(ctx: Context, Payload(input): Payload<CreateCommentInput>) -> ApiResult<()> {
    service::comment::create(&ctx, input).await?;
    Ok(Json(()))
}

pub(super) async fn delete_by_id(ctx: Context, Payload(id): Payload<i32>) -> ApiResult<()> {
    service::comment::delete_by_id(&ctx, id).await?;
    Ok(Json(()))
}

pub(super) async fn by_article_slug(
    ctx: Context,
    Params(Input { input }): Params<Input<String>>,
) -> ApiResult<Vec<CommentView>> {
    Ok(Json(service::comment::by_article_slug(&ctx, &input).await?))
}
