use sea_orm::{DbErr, SqlErr};
use std::fmt;

/// The coarse category of an [`Error`], used by callers to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The target entity does not exist, or the caller does not own it
    NotFound,
    /// Malformed input or a uniqueness violation
    BadRequest,
    /// The operation needs an authenticated subject
    Unauthorized,
    /// Anything the caller cannot fix
    Internal,
}

impl ErrorKind {
    /// Upper snake case code, as reported on the wire
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An error from a procedure
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target entity was not found
    #[error("{0}")]
    NotFound(String),
    /// The input was rejected
    #[error("{0}")]
    BadRequest(String),
    /// No authenticated subject in the context
    #[error("you must be logged in")]
    Unauthorized,
    /// The database reported an error
    #[error("Database Error: {0}")]
    Db(DbErr),
    /// An access token could not be issued
    #[error("Token Error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    /// A password could not be hashed or a stored hash could not be parsed
    #[error("Password Hash Error: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
}

/// Result alias for procedures
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Db(_) | Self::Token(_) | Self::PasswordHash(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        // a duplicate insert that raced past the application checks
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::BadRequest("record already exists".to_owned())
            }
            _ => Self::Db(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_each_variant() {
        assert_eq!(Error::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(Error::bad_request("x").kind(), ErrorKind::BadRequest);
        assert_eq!(Error::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            Error::from(DbErr::Custom("boom".to_owned())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            Error::from(argon2::password_hash::Error::Password).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn message_is_passed_through() {
        assert_eq!(
            Error::bad_request("password is not correct").to_string(),
            "password is not correct"
        );
        assert_eq!(ErrorKind::NotFound.to_string(), "NOT_FOUND");
    }
}
