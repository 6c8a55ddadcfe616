//! Explicit connect / disconnect on the relation tables.
//!
//! Each helper is a single statement and accepts any connection, so callers
//! can run it inside a transaction. Connects ignore an already present row.

use itertools::Itertools;
use sea_orm::{prelude::*, sea_query::OnConflict, ActiveValue::Set};

use crate::entity::{
    article_favorite, article_tag, article_to_tag,
    prelude::{ArticleFavorite, ArticleTag, ArticleToTag, UserFollow},
    user_follow,
};

pub async fn is_following<C>(db: &C, follower_id: i32, following_id: i32) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(UserFollow::find_by_id((follower_id, following_id))
        .one(db)
        .await?
        .is_some())
}

pub async fn follow<C>(db: &C, follower_id: i32, following_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    UserFollow::insert(user_follow::ActiveModel {
        follower_id: Set(follower_id),
        following_id: Set(following_id),
    })
    .on_conflict(
        OnConflict::columns([
            user_follow::Column::FollowerId,
            user_follow::Column::FollowingId,
        ])
        .do_nothing()
        .to_owned(),
    )
    .exec_without_returning(db)
    .await?;
    Ok(())
}

pub async fn unfollow<C>(db: &C, follower_id: i32, following_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    UserFollow::delete_by_id((follower_id, following_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn is_favorited<C>(db: &C, article_id: i32, user_id: i32) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(ArticleFavorite::find_by_id((article_id, user_id))
        .one(db)
        .await?
        .is_some())
}

pub async fn favorite<C>(db: &C, article_id: i32, user_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    ArticleFavorite::insert(article_favorite::ActiveModel {
        article_id: Set(article_id),
        user_id: Set(user_id),
    })
    .on_conflict(
        OnConflict::columns([
            article_favorite::Column::ArticleId,
            article_favorite::Column::UserId,
        ])
        .do_nothing()
        .to_owned(),
    )
    .exec_without_returning(db)
    .await?;
    Ok(())
}

pub async fn unfavorite<C>(db: &C, article_id: i32, user_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    ArticleFavorite::delete_by_id((article_id, user_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Attach tags named `names` to the article, creating missing tags
///
/// Duplicate names are attached once.
pub async fn connect_or_create_tags<C>(
    db: &C,
    article_id: i32,
    names: &[String],
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for name in names.iter().unique() {
        let tag = match ArticleTag::find()
            .filter(article_tag::Column::Name.eq(name.as_str()))
            .one(db)
            .await?
        {
            Some(tag) => tag,
            None => {
                article_tag::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };

        ArticleToTag::insert(article_to_tag::ActiveModel {
            article_id: Set(article_id),
            tag_id: Set(tag.id),
        })
        .on_conflict(
            OnConflict::columns([
                article_to_tag::Column::ArticleId,
                article_to_tag::Column::TagId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    }
    Ok(())
}

/// Detach every tag from the article; the tags themselves stay
pub async fn disconnect_tags<C>(db: &C, article_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let res = ArticleToTag::delete_many()
        .filter(article_to_tag::Column::ArticleId.eq(article_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
