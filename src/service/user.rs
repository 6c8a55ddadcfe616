use sea_orm::{
    prelude::*,
    ActiveValue::{Set, Unchanged},
};
use tracing::{debug, info};

use super::{relation, AuthPayload, CurrentUser, LoginInput, Profile, RegisterInput, UpdateUserInput, UserId};
use crate::{
    auth::{self, TokenKeys},
    entity::{prelude::User, user},
    validate, Context, Error, Result,
};

async fn find_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

async fn find_by_username<C>(db: &C, username: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?)
}

/// Create an account and sign it in
pub async fn register(ctx: &Context, keys: &TokenKeys, input: RegisterInput) -> Result<AuthPayload> {
    let RegisterInput {
        email,
        password,
        username,
    } = input;
    validate::email(&email)?;
    validate::not_blank("password", &password)?;
    validate::not_blank("username", &username)?;

    if find_by_email(&ctx.db, &email).await?.is_some() {
        return Err(Error::bad_request("user with this email already exists"));
    }
    if find_by_username(&ctx.db, &username).await?.is_some() {
        return Err(Error::bad_request("user with this username already exists"));
    }

    let user = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        password: Set(auth::hash_password(&password)?),
        bio: Set(None),
        image: Set(None),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;
    info!(user_id = user.id, username = %user.username, "user registered");

    Ok(AuthPayload {
        id: user.id,
        access_token: keys.issue(user.id)?,
    })
}

pub async fn login(ctx: &Context, keys: &TokenKeys, input: LoginInput) -> Result<AuthPayload> {
    validate::not_blank("email", &input.email)?;
    validate::not_blank("password", &input.password)?;

    let user = find_by_email(&ctx.db, &input.email)
        .await?
        .ok_or_else(|| Error::bad_request("user with this email does not exist"))?;
    if !auth::verify_password(&input.password, &user.password)? {
        debug!(user_id = user.id, "wrong password");
        return Err(Error::bad_request("password is not correct"));
    }

    Ok(AuthPayload {
        id: user.id,
        access_token: keys.issue(user.id)?,
    })
}

/// Apply the settings form to the current user
///
/// Empty strings are skipped rather than written, so a field can be changed
/// but never cleared.
pub async fn update(ctx: &Context, input: UpdateUserInput) -> Result<UserId> {
    let id = ctx.require_user()?;
    let image = validate::non_empty(input.image);
    let bio = validate::non_empty(input.bio);
    let username = validate::non_empty(input.username);
    let email = validate::non_empty(input.email);
    let password = validate::non_empty(input.password);

    if let Some(email) = &email {
        if !validate::is_email(email) {
            return Err(Error::bad_request("email is invalid"));
        }
        let taken = User::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .filter(user::Column::Id.ne(id))
            .one(&ctx.db)
            .await?;
        if taken.is_some() {
            return Err(Error::bad_request("email must be unique"));
        }
    }
    if let Some(username) = &username {
        let taken = User::find()
            .filter(user::Column::Username.eq(username.as_str()))
            .filter(user::Column::Id.ne(id))
            .one(&ctx.db)
            .await?;
        if taken.is_some() {
            return Err(Error::bad_request("username must be unique"));
        }
    }

    let mut model = user::ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(image) = image {
        model.image = Set(Some(image));
    }
    if let Some(bio) = bio {
        model.bio = Set(Some(bio));
    }
    if let Some(username) = username {
        model.username = Set(username);
    }
    if let Some(email) = email {
        model.email = Set(email);
    }
    if let Some(password) = password {
        model.password = Set(auth::hash_password(&password)?);
    }

    if model.is_changed() {
        model.update(&ctx.db).await?;
        info!(user_id = id, "user settings updated");
    }
    Ok(UserId { id })
}

/// The signed-in user, or `None` for an anonymous context
pub async fn current_user(ctx: &Context) -> Result<Option<CurrentUser>> {
    let Some(id) = ctx.user_id else {
        return Ok(None);
    };
    Ok(User::find_by_id(id)
        .one(&ctx.db)
        .await?
        .map(CurrentUser::from))
}

pub async fn by_username(ctx: &Context, username: &str) -> Result<Profile> {
    let user = find_by_username(&ctx.db, username)
        .await?
        .ok_or_else(|| Error::not_found("user with this username does not exist"))?;
    let is_following = match ctx.user_id {
        Some(me) => relation::is_following(&ctx.db, me, user.id).await?,
        None => false,
    };
    Ok(Profile::new(user, is_following))
}

/// Follow `target_user_id` if the caller does not yet, unfollow otherwise
///
/// Returns whether the caller follows the target afterwards. The read and
/// the write are separate statements; two concurrent toggles by the same
/// caller may both observe the same state.
pub async fn toggle_follow(ctx: &Context, target_user_id: i32) -> Result<bool> {
    let me = ctx.require_user()?;
    let target = User::find_by_id(target_user_id)
        .one(&ctx.db)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;

    let following = if relation::is_following(&ctx.db, me, target.id).await? {
        relation::unfollow(&ctx.db, me, target.id).await?;
        false
    } else {
        relation::follow(&ctx.db, me, target.id).await?;
        true
    };
    info!(user_id = me, target = target.id, following, "following status changed");
    Ok(following)
}
