use chrono::Utc;
use sea_orm::{prelude::*, sea_query::Query, ActiveValue::Set, QueryOrder};
use tracing::info;

use super::{CommentAuthor, CommentView, CreateCommentInput};
use crate::{
    entity::{
        article, article_comment,
        prelude::{Article, ArticleComment, User},
    },
    validate, Context, Error, Result,
};

/// Comment on the article at `article_slug`
pub async fn create(ctx: &Context, input: CreateCommentInput) -> Result<()> {
    let author_id = ctx.require_user()?;
    validate::not_blank("article slug", &input.article_slug)?;
    validate::not_blank("comment body", &input.comment_body)?;
    let article = Article::find()
        .filter(article::Column::Slug.eq(input.article_slug.as_str()))
        .one(&ctx.db)
        .await?
        .ok_or_else(|| Error::not_found("Article not found"))?;

    let comment = article_comment::ActiveModel {
        body: Set(input.comment_body),
        created_at: Set(Utc::now()),
        article_id: Set(article.id),
        author_id: Set(author_id),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;
    info!(user_id = author_id, comment_id = comment.id, slug = %article.slug, "comment created");
    Ok(())
}

/// Delete a comment written by the current user
pub async fn delete_by_id(ctx: &Context, id: i32) -> Result<()> {
    let author_id = ctx.require_user()?;
    let res = ArticleComment::delete_many()
        .filter(article_comment::Column::Id.eq(id))
        .filter(article_comment::Column::AuthorId.eq(author_id))
        .exec(&ctx.db)
        .await?;
    if res.rows_affected == 0 {
        return Err(Error::not_found("Comment not found"));
    }
    info!(user_id = author_id, comment_id = id, "comment deleted");
    Ok(())
}

/// Comments on the article, newest first; empty for an unknown slug
pub async fn by_article_slug(ctx: &Context, slug: &str) -> Result<Vec<CommentView>> {
    let rows = ArticleComment::find()
        .filter(
            article_comment::Column::ArticleId.in_subquery(
                Query::select()
                    .column(article::Column::Id)
                    .from(Article)
                    .and_where(article::Column::Slug.eq(slug))
                    .to_owned(),
            ),
        )
        .order_by_desc(article_comment::Column::CreatedAt)
        .order_by_desc(article_comment::Column::Id)
        .find_also_related(User)
        .all(&ctx.db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(comment, author)| {
            let author = author?;
            Some(CommentView {
                id: comment.id,
                body: comment.body,
                created_at: comment.created_at,
                author: CommentAuthor {
                    id: author.id,
                    username: author.username,
                    image: author.image,
                },
            })
        })
        .collect())
}
