use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::user;

/// Returned by register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub id: i32,
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserId {
    pub id: i32,
}

/// The signed-in user, as shown on the settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<user::Model> for CurrentUser {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            image: user.image,
        }
    }
}

/// A user as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    /// Whether the caller follows this user; always false when anonymous
    pub is_following: bool,
}

impl Profile {
    pub(crate) fn new(user: user::Model, is_following: bool) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image: user.image,
            bio: user.bio,
            is_following,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_favorited: bool,
    pub favorites_count: u64,
    pub author: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentAuthor {
    pub id: i32,
    pub username: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: CommentAuthor,
}
