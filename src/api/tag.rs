use axum::Json;

use super::ApiResult;
use crate::{service, Context};

pub(super) async fn popular(ctx: Context) -> ApiResult<Vec<String>> {
    Ok(Json(service::tag::popular(&ctx).await?))
}
