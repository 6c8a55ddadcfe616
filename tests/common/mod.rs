#![allow(dead_code)]

use conduit::{
    auth::TokenKeys,
    service::{self, CreateArticleInput, RegisterInput},
    Context,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub const JWT_SECRET: &[u8] = b"test-secret";

pub struct TestContext {
    pub db: DatabaseConnection,
    pub keys: TokenKeys,
}

impl TestContext {
    /// A fresh in-memory database with every migration applied
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Self {
            db,
            keys: TokenKeys::new(JWT_SECRET, chrono::Duration::hours(1)),
        }
    }

    pub fn anonymous(&self) -> Context {
        Context::anonymous(self.db.clone())
    }

    pub fn as_user(&self, user_id: i32) -> Context {
        Context::authenticated(self.db.clone(), user_id)
    }

    /// Register `name` with `name@x.com` / `pw-name`; returns the new id
    pub async fn register(&self, name: &str) -> i32 {
        service::user::register(
            &self.anonymous(),
            &self.keys,
            RegisterInput {
                email: format!("{name}@x.com"),
                password: format!("pw-{name}"),
                username: name.to_owned(),
            },
        )
        .await
        .unwrap()
        .id
    }

    /// Publish an article as `author`; returns its slug
    pub async fn article(&self, author: i32, title: &str, tags: &[&str]) -> String {
        service::article::create(
            &self.as_user(author),
            CreateArticleInput {
                title: title.to_owned(),
                description: format!("about {title}"),
                body: format!("{title} body"),
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            },
        )
        .await
        .unwrap()
    }
}
