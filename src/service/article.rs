use chrono::Utc;
use itertools::Itertools;
use sea_orm::{
    prelude::*,
    sea_query::{Expr, Query},
    ActiveValue::Set,
    FromQueryResult, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::{
    relation, ArticleView, CreateArticleInput, ListArticlesInput, Profile, UpdateArticleInput,
};
use crate::{
    entity::{
        article, article_favorite, article_tag, article_to_tag,
        prelude::{Article, ArticleFavorite, ArticleTag, ArticleToTag, User, UserFollow},
        user, user_follow,
    },
    slug, validate, Context, Error, Result,
};

fn article_not_found() -> Error {
    Error::not_found("Article not found")
}

fn check_tags(tags: &[String]) -> Result<()> {
    if tags.iter().any(|tag| tag.is_empty()) {
        return Err(Error::bad_request("tag can't be blank"));
    }
    Ok(())
}

async fn find_by_slug<C>(db: &C, slug: &str) -> Result<article::Model>
where
    C: ConnectionTrait,
{
    Article::find()
        .filter(article::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(article_not_found)
}

/// Publish an article as the current user; returns its slug
pub async fn create(ctx: &Context, input: CreateArticleInput) -> Result<String> {
    let author_id = ctx.require_user()?;
    validate::not_blank("title", &input.title)?;
    validate::not_blank("description", &input.description)?;
    validate::not_blank("body", &input.body)?;
    let tags = input.tags.unwrap_or_default();
    check_tags(&tags)?;

    let now = Utc::now();
    let txn = ctx.db.begin().await?;
    let article = article::ActiveModel {
        slug: Set(slug::slug_at(&input.title, now.timestamp_millis())),
        title: Set(input.title),
        description: Set(input.description),
        body: Set(input.body),
        created_at: Set(now),
        updated_at: Set(now),
        author_id: Set(author_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    relation::connect_or_create_tags(&txn, article.id, &tags).await?;
    txn.commit().await?;

    info!(user_id = author_id, slug = %article.slug, "article created");
    Ok(article.slug)
}

/// Edit an article owned by the current user; returns the (possibly new) slug
///
/// Empty strings leave a field as is. A changed title regenerates the slug.
/// The tag list is always replaced: old tags are detached, then `tags` (or
/// nothing) is attached.
pub async fn update(ctx: &Context, input: UpdateArticleInput) -> Result<String> {
    let author_id = ctx.require_user()?;
    validate::not_blank("slug", &input.slug)?;
    let current = find_by_slug(&ctx.db, &input.slug).await?;

    let title = validate::non_empty(input.title);
    let description = validate::non_empty(input.description);
    let body = validate::non_empty(input.body);
    let tags = input.tags.unwrap_or_default();
    check_tags(&tags)?;

    let now = Utc::now();
    let mut update = Article::update_many().col_expr(article::Column::UpdatedAt, Expr::value(now));
    let mut new_slug = current.slug.clone();
    if let Some(title) = title {
        if title != current.title {
            new_slug = slug::slug_at(&title, now.timestamp_millis());
            update = update.col_expr(article::Column::Slug, Expr::value(new_slug.clone()));
        }
        update = update.col_expr(article::Column::Title, Expr::value(title));
    }
    if let Some(description) = description {
        update = update.col_expr(article::Column::Description, Expr::value(description));
    }
    if let Some(body) = body {
        update = update.col_expr(article::Column::Body, Expr::value(body));
    }

    let txn = ctx.db.begin().await?;
    // the ownership check lives in the predicate
    let res = update
        .filter(article::Column::Slug.eq(current.slug.as_str()))
        .filter(article::Column::AuthorId.eq(author_id))
        .exec(&txn)
        .await?;
    if res.rows_affected == 0 {
        debug!(user_id = author_id, slug = %current.slug, "update matched no owned article");
        return Err(article_not_found());
    }
    relation::disconnect_tags(&txn, current.id).await?;
    relation::connect_or_create_tags(&txn, current.id, &tags).await?;
    txn.commit().await?;

    info!(user_id = author_id, slug = %new_slug, "article updated");
    Ok(new_slug)
}

/// Delete an article owned by the current user
///
/// A caller who is not the author gets the same error as for a missing slug.
pub async fn delete(ctx: &Context, slug: &str) -> Result<()> {
    let author_id = ctx.require_user()?;
    let current = find_by_slug(&ctx.db, slug).await?;

    let txn = ctx.db.begin().await?;
    relation::disconnect_tags(&txn, current.id).await?;
    let res = Article::delete_many()
        .filter(article::Column::Slug.eq(slug))
        .filter(article::Column::AuthorId.eq(author_id))
        .exec(&txn)
        .await?;
    if res.rows_affected == 0 {
        // dropping the transaction rolls back the tag detach
        debug!(user_id = author_id, slug, "delete matched no owned article");
        return Err(article_not_found());
    }
    txn.commit().await?;

    info!(user_id = author_id, slug, "article deleted");
    Ok(())
}

/// Favorite the article if the caller has not yet, unfavorite otherwise
///
/// Returns the article's slug. Like [`super::user::toggle_follow`], the read
/// and the write are not atomic.
pub async fn toggle_favorite(ctx: &Context, slug: &str) -> Result<String> {
    let me = ctx.require_user()?;
    let article = find_by_slug(&ctx.db, slug).await?;

    let favorited = if relation::is_favorited(&ctx.db, article.id, me).await? {
        relation::unfavorite(&ctx.db, article.id, me).await?;
        false
    } else {
        relation::favorite(&ctx.db, article.id, me).await?;
        true
    };
    info!(user_id = me, slug = %article.slug, favorited, "favorited status changed");
    Ok(article.slug)
}

pub async fn by_slug(ctx: &Context, slug: &str) -> Result<ArticleView> {
    let article = find_by_slug(&ctx.db, slug).await?;
    views(ctx, vec![article])
        .await?
        .pop()
        .ok_or_else(article_not_found)
}

/// Articles matching every given filter, newest first
pub async fn list(ctx: &Context, input: ListArticlesInput) -> Result<Vec<ArticleView>> {
    let mut query = Article::find();
    if let Some(author_id) = input.author_id {
        query = query.filter(article::Column::AuthorId.eq(author_id));
    }
    if let Some(user_id) = input.favorited_by_user_id {
        query = query.filter(
            article::Column::Id.in_subquery(
                Query::select()
                    .column(article_favorite::Column::ArticleId)
                    .from(ArticleFavorite)
                    .and_where(article_favorite::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        );
    }
    if let Some(tag) = validate::non_empty(input.tag) {
        query = query.filter(
            article::Column::Id.in_subquery(
                Query::select()
                    .column((ArticleToTag, article_to_tag::Column::ArticleId))
                    .from(ArticleToTag)
                    .inner_join(
                        ArticleTag,
                        Expr::col((ArticleTag, article_tag::Column::Id))
                            .equals((ArticleToTag, article_to_tag::Column::TagId)),
                    )
                    .and_where(Expr::col((ArticleTag, article_tag::Column::Name)).eq(tag))
                    .to_owned(),
            ),
        );
    }

    let articles = query
        .order_by_desc(article::Column::CreatedAt)
        .order_by_desc(article::Column::Id)
        .all(&ctx.db)
        .await?;
    views(ctx, articles).await
}

/// Articles by the users the caller follows, newest first
pub async fn feed(ctx: &Context) -> Result<Vec<ArticleView>> {
    let me = ctx.require_user()?;
    let articles = Article::find()
        .filter(
            article::Column::AuthorId.in_subquery(
                Query::select()
                    .column(user_follow::Column::FollowingId)
                    .from(UserFollow)
                    .and_where(user_follow::Column::FollowerId.eq(me))
                    .to_owned(),
            ),
        )
        .order_by_desc(article::Column::CreatedAt)
        .order_by_desc(article::Column::Id)
        .all(&ctx.db)
        .await?;
    views(ctx, articles).await
}

#[derive(Debug, FromQueryResult)]
struct FavoriteCount {
    article_id: i32,
    count: i64,
}

/// Most ids bound into a single `IN (...)` list
const IN_LIST_CHUNK: usize = 500;

/// Decorate articles with author, tags and favorite state, keeping order
///
/// Lookups are keyed by article and author id, a few queries per
/// [`IN_LIST_CHUNK`] ids, so any number of articles stays within the
/// backend's bind parameter limit.
async fn views(ctx: &Context, articles: Vec<article::Model>) -> Result<Vec<ArticleView>> {
    if articles.is_empty() {
        return Ok(Vec::new());
    }
    let db = &ctx.db;
    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    let author_ids: Vec<i32> = articles.iter().map(|a| a.author_id).unique().collect();

    let mut authors: HashMap<i32, user::Model> = HashMap::with_capacity(author_ids.len());
    let mut following: HashSet<i32> = HashSet::new();
    for chunk in author_ids.chunks(IN_LIST_CHUNK) {
        authors.extend(
            User::find()
                .filter(user::Column::Id.is_in(chunk.iter().copied()))
                .all(db)
                .await?
                .into_iter()
                .map(|user| (user.id, user)),
        );
        if let Some(me) = ctx.user_id {
            following.extend(
                UserFollow::find()
                    .filter(user_follow::Column::FollowerId.eq(me))
                    .filter(user_follow::Column::FollowingId.is_in(chunk.iter().copied()))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|row| row.following_id),
            );
        }
    }

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    let mut counts: HashMap<i32, i64> = HashMap::new();
    let mut favorited: HashSet<i32> = HashSet::new();
    for chunk in ids.chunks(IN_LIST_CHUNK) {
        // chunks are disjoint, so each article's tags come from one query
        tags.extend(
            ArticleToTag::find()
                .filter(article_to_tag::Column::ArticleId.is_in(chunk.iter().copied()))
                .order_by_asc(article_to_tag::Column::TagId)
                .find_also_related(ArticleTag)
                .all(db)
                .await?
                .into_iter()
                .filter_map(|(link, tag)| tag.map(|tag| (link.article_id, tag.name)))
                .into_group_map(),
        );

        counts.extend(
            ArticleFavorite::find()
                .select_only()
                .column(article_favorite::Column::ArticleId)
                .column_as(Expr::col(article_favorite::Column::UserId).count(), "count")
                .filter(article_favorite::Column::ArticleId.is_in(chunk.iter().copied()))
                .group_by(article_favorite::Column::ArticleId)
                .into_model::<FavoriteCount>()
                .all(db)
                .await?
                .into_iter()
                .map(|row| (row.article_id, row.count)),
        );

        if let Some(me) = ctx.user_id {
            favorited.extend(
                ArticleFavorite::find()
                    .filter(article_favorite::Column::UserId.eq(me))
                    .filter(article_favorite::Column::ArticleId.is_in(chunk.iter().copied()))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|row| row.article_id),
            );
        }
    }

    let mut views = Vec::with_capacity(articles.len());
    for article in articles {
        let author = authors.get(&article.author_id).cloned().ok_or_else(|| {
            Error::Db(DbErr::RecordNotFound(format!(
                "author {} of article {}",
                article.author_id, article.id
            )))
        })?;
        let is_following = following.contains(&author.id);
        views.push(ArticleView {
            tags: tags.remove(&article.id).unwrap_or_default(),
            is_favorited: favorited.contains(&article.id),
            favorites_count: counts.get(&article.id).copied().unwrap_or(0) as u64,
            author: Profile::new(author, is_following),
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            created_at: article.created_at,
        });
    }
    Ok(views)
}
