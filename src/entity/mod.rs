//! SeaORM entities backing the blogging domain.
//!
//! Relation tables (`user_follow`, `article_favorite`, `article_to_tag`) carry
//! nothing beyond a composite primary key: a row being present is the
//! relation being true.

pub mod prelude;

pub mod article;
pub mod article_comment;
pub mod article_favorite;
pub mod article_tag;
pub mod article_to_tag;
pub mod user;
pub mod user_follow;
