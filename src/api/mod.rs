//! HTTP surface: one route per procedure.
//!
//! Queries are `GET /api/<router>.<procedure>` and take their input from the
//! query string (`?input=<value>` for a scalar). Mutations are
//! `POST /api/<router>.<procedure>` with a JSON body. Input that does not
//! deserialize is answered like any other BAD_REQUEST. Every handler receives
//! the request [`Context`](crate::Context) by value.

mod article;
mod comment;
mod error;
mod extract;
mod tag;
mod user;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::{cookie::SameSite, Cookie, CookieManagerLayer, Cookies};
use tower_http::trace::TraceLayer;

use crate::auth::TokenKeys;

pub use error::{ApiError, ApiResult};
use extract::{Params, Payload};

/// Name of the cookie holding the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, keys: TokenKeys) -> Self {
        Self {
            db,
            keys: Arc::new(keys),
        }
    }
}

/// Scalar query string input, `?input=<value>`
#[derive(Debug, Deserialize)]
struct Input<T> {
    input: T,
}

fn access_token_cookie(value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(ACCESS_TOKEN_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn set_access_token(cookies: &Cookies, token: &str) {
    cookies.add(access_token_cookie(token.to_owned()));
}

fn clear_access_token(cookies: &Cookies) {
    cookies.remove(access_token_cookie(String::new()));
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/user.register", post(user::register))
        .route("/api/user.login", post(user::login))
        .route("/api/user.logout", post(user::logout))
        .route("/api/user.update", post(user::update))
        .route("/api/user.getCurrentUser", get(user::current_user))
        .route("/api/user.getByUsername", get(user::by_username))
        .route(
            "/api/user.changeFollowingStatus",
            post(user::change_following_status),
        )
        .route("/api/article.create", post(article::create))
        .route("/api/article.update", post(article::update))
        .route("/api/article.delete", post(article::delete))
        .route(
            "/api/article.changeFavoritedStatus",
            post(article::change_favorited_status),
        )
        .route("/api/article.getBySlug", get(article::by_slug))
        .route("/api/article.listArticles", get(article::list))
        .route("/api/article.getUserFeed", get(article::feed))
        .route("/api/comment.create", post(comment::create))
        .route("/api/comment.deleteById", post(comment::delete_by_id))
        .route(
            "/api/comment.getCommentsByArticleSlug",
            get(comment::by_article_slug),
        )
        .route("/api/tag.getPopularTags", get(tag::popular))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
