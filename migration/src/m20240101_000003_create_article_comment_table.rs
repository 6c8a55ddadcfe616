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
                    .table(ArticleComment::Table)
                    .col(pk_auto(ArticleComment::Id))
                    .col(text(ArticleComment::Body))
                    .col(
                        ColumnDef::new(ArticleComment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(integer(ArticleComment::ArticleId))
                    .col(integer(ArticleComment::AuthorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_comment-article_id")
                            .from(ArticleComment::Table, ArticleComment::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_comment-author_id")
                            .from(ArticleComment::Table, ArticleComment::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-article_comment-article_id")
                    .table(ArticleComment::Table)
                    .col(ArticleComment::ArticleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleComment {
    Table,
    Id,
    Body,
    CreatedAt,
    ArticleId,
    AuthorId,
}
