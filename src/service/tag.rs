use sea_orm::{
    prelude::*,
    sea_query::{Expr, Order},
    FromQueryResult, JoinType, QueryOrder, QuerySelect,
};
use tracing::debug;

use crate::{
    entity::{article_tag, article_to_tag, prelude::ArticleTag},
    Context, Result,
};

/// How many tags `popular` returns at most
pub const POPULAR_TAGS_LIMIT: u64 = 10;

#[derive(Debug, FromQueryResult)]
struct TagName {
    name: String,
}

/// Names of the tags on the most articles, most used first
///
/// A tag carried by a single article is never popular.
pub async fn popular(ctx: &Context) -> Result<Vec<String>> {
    let count = Expr::col((article_to_tag::Entity, article_to_tag::Column::ArticleId)).count();
    let tags = ArticleTag::find()
        .select_only()
        .column(article_tag::Column::Name)
        .join(JoinType::InnerJoin, article_tag::Relation::ArticleToTag.def())
        .group_by(article_tag::Column::Name)
        .having(Expr::expr(count.clone()).gt(1))
        .order_by(count, Order::Desc)
        .order_by_asc(article_tag::Column::Name)
        .limit(POPULAR_TAGS_LIMIT)
        .into_model::<TagName>()
        .all(&ctx.db)
        .await?;
    debug!(count = tags.len(), "popular tags");
    Ok(tags.into_iter().map(|tag| tag.name).collect())
}
