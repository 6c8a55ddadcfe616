use super::m20240101_000001_create_user_table::User;
use super::m20240101_000002_create_article_table::Article;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFollow::Table)
                    .col(integer(UserFollow::FollowerId))
                    .col(integer(UserFollow::FollowingId))
                    .primary_key(
                        Index::create()
                            .name("pk-user_follow")
                            .col(UserFollow::FollowerId)
                            .col(UserFollow::FollowingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_follow-follower_id")
                            .from(UserFollow::Table, UserFollow::FollowerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_follow-following_id")
                            .from(UserFollow::Table, UserFollow::FollowingId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleFavorite::Table)
                    .col(integer(ArticleFavorite::ArticleId))
                    .col(integer(ArticleFavorite::UserId))
                    .primary_key(
                        Index::create()
                            .name("pk-article_favorite")
                            .col(ArticleFavorite::ArticleId)
                            .col(ArticleFavorite::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_favorite-article_id")
                            .from(ArticleFavorite::Table, ArticleFavorite::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_favorite-user_id")
                            .from(ArticleFavorite::Table, ArticleFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleFavorite::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserFollow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFollow {
    Table,
    FollowerId,
    FollowingId,
}

#[derive(DeriveIden)]
enum ArticleFavorite {
    Table,
    ArticleId,
    UserId,
}
