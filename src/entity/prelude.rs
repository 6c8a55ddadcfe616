pub use super::article::Entity as Article;
pub use super::article_comment::Entity as ArticleComment;
pub use super::article_favorite::Entity as ArticleFavorite;
pub use super::article_tag::Entity as ArticleTag;
pub use super::article_to_tag::Entity as ArticleToTag;
pub use super::user::Entity as User;
pub use super::user_follow::Entity as UserFollow;
