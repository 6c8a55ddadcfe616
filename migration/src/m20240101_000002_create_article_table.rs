use super::m20240101_000001_create_user_table::User;
use sea_orm_migration::sea_orm::DbBackend;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .col(pk_auto(Article::Id))
                    .col(string_uniq(Article::Slug))
                    .col(string(Article::Title))
                    .col(string(Article::Description))
                    .col(text(Article::Body))
                    .col(
                        ColumnDef::new(Article::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Article::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(integer(Article::AuthorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article-author_id")
                            .from(Article::Table, Article::AuthorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-article-author_id")
                    .table(Article::Table)
                    .col(Article::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleTag::Table)
                    .col(pk_auto(ArticleTag::Id))
                    .col(string_uniq(ArticleTag::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleToTag::Table)
                    .col(integer(ArticleToTag::ArticleId))
                    .col(integer(ArticleToTag::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk-article_to_tag")
                            .col(ArticleToTag::ArticleId)
                            .col(ArticleToTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_to_tag-article_id")
                            .from(ArticleToTag::Table, ArticleToTag::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-article_to_tag-tag_id")
                            .from(ArticleToTag::Table, ArticleToTag::TagId)
                            .to(ArticleTag::Table, ArticleTag::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleToTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArticleTag::Table).to_owned())
            .await?;
        if manager.get_database_backend() != DbBackend::Sqlite {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .table(Article::Table)
                        .name("fk-article-author_id")
                        .to_owned(),
                )
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Body,
    CreatedAt,
    UpdatedAt,
    AuthorId,
}

#[derive(DeriveIden)]
pub enum ArticleTag {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum ArticleToTag {
    Table,
    ArticleId,
    TagId,
}
