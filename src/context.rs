use sea_orm::DatabaseConnection;

use crate::{Error, Result};

/// Per-request state handed to every procedure
///
/// Built once per call by the API layer and passed by value; procedures
/// borrow it. `user_id` is the authenticated subject, if any.
#[derive(Debug, Clone)]
pub struct Context {
    pub db: DatabaseConnection,
    pub user_id: Option<i32>,
}

impl Context {
    /// A context with no authenticated subject
    pub fn anonymous(db: DatabaseConnection) -> Self {
        Self { db, user_id: None }
    }

    /// A context acting as `user_id`
    pub fn authenticated(db: DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id: Some(user_id),
        }
    }

    /// The subject id, or [`Error::Unauthorized`]
    pub fn require_user(&self) -> Result<i32> {
        self.user_id.ok_or(Error::Unauthorized)
    }
}
