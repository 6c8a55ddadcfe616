use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts},
    Json,
};
use sea_orm::EntityTrait;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tower_cookies::Cookies;
use tracing::{debug, warn};

use super::{ApiError, AppState, ACCESS_TOKEN_COOKIE};
use crate::{entity::prelude::User, Context, Error};

/// JSON request body; a malformed body is a BAD_REQUEST in the error envelope
#[derive(Debug)]
pub(super) struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "rejected request body");
                ApiError(Error::BadRequest(rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// Query string input; malformed parameters are a BAD_REQUEST in the error
/// envelope
#[derive(Debug)]
pub(super) struct Params<T>(pub T);

impl<T, S> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "rejected query string");
                ApiError(Error::BadRequest(rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// Token from `Authorization: Bearer <jwt>` or `Authorization: Token <jwt>`
fn header_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    match scheme {
        "Bearer" | "Token" => Some(token.trim().to_owned()),
        _ => None,
    }
}

async fn cookie_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    let cookies = Cookies::from_request_parts(parts, state).await.ok()?;
    cookies
        .get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

/// Resolves the caller; any failure yields an anonymous context
impl FromRequestParts<AppState> for Context {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = match header_token(parts) {
            Some(token) => Some(token),
            None => cookie_token(parts, state).await,
        };
        let Some(user_id) = token.and_then(|token| state.keys.verify(&token)) else {
            return Ok(Context::anonymous(state.db.clone()));
        };

        match User::find_by_id(user_id).one(&state.db).await {
            Ok(Some(_)) => Ok(Context::authenticated(state.db.clone(), user_id)),
            Ok(None) => {
                debug!(user_id, "token subject no longer exists");
                Ok(Context::anonymous(state.db.clone()))
            }
            Err(err) => {
                warn!(error = %err, "fail to look up token subject");
                Ok(Context::anonymous(state.db.clone()))
            }
        }
    }
}
