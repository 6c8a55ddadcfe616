use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Settings form; empty strings leave a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub image: Option<String>,
    pub bio: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArticleInput {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
}

/// Editor form; empty strings leave a field unchanged, `tags` replaces the
/// whole tag list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleInput {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListArticlesInput {
    pub author_id: Option<i32>,
    pub favorited_by_user_id: Option<i32>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    pub article_slug: String,
    pub comment_body: String,
}
