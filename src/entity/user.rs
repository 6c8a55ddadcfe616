use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string, never the plaintext
    pub password: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
    #[sea_orm(has_many = "super::article_comment::Entity")]
    ArticleComment,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl Related<super::article_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Users following this user
#[derive(Debug)]
pub struct Followers;

impl Linked for Followers {
    type FromEntity = Entity;

    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::user_follow::Relation::Following.def().rev(),
            super::user_follow::Relation::Follower.def(),
        ]
    }
}

/// Users this user follows
#[derive(Debug)]
pub struct Following;

impl Linked for Following {
    type FromEntity = Entity;

    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::user_follow::Relation::Follower.def().rev(),
            super::user_follow::Relation::Following.def(),
        ]
    }
}

/// Articles this user has favorited
#[derive(Debug)]
pub struct Favorites;

impl Linked for Favorites {
    type FromEntity = Entity;

    type ToEntity = super::article::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::article_favorite::Relation::User.def().rev(),
            super::article_favorite::Relation::Article.def(),
        ]
    }
}
