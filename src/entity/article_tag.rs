use sea_orm::entity::prelude::*;

/// A topic label, shared by every article that carries it
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "article_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article_to_tag::Entity")]
    ArticleToTag,
}

impl Related<super::article_to_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleToTag.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_to_tag::Relation::Article.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::article_to_tag::Relation::ArticleTag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
