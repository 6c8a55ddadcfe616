use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::article_comment::Entity")]
    ArticleComment,
    #[sea_orm(has_many = "super::article_favorite::Entity")]
    ArticleFavorite,
    #[sea_orm(has_many = "super::article_to_tag::Entity")]
    ArticleToTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::article_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleComment.def()
    }
}

impl Related<super::article_tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_to_tag::Relation::ArticleTag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::article_to_tag::Relation::Article.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Users who favorited this article
#[derive(Debug)]
pub struct FavoritedBy;

impl Linked for FavoritedBy {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::article_favorite::Relation::Article.def().rev(),
            super::article_favorite::Relation::User.def(),
        ]
    }
}
