pub mod common;

use common::TestContext;
use conduit::{
    service::{self, LoginInput, RegisterInput, UpdateUserInput},
    ErrorKind,
};
use pretty_assertions::assert_eq;

fn alice() -> RegisterInput {
    RegisterInput {
        email: "alice@x.com".to_owned(),
        password: "pw1".to_owned(),
        username: "alice".to_owned(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn register_then_login() {
    let ctx = TestContext::new().await;
    let registered = service::user::register(&ctx.anonymous(), &ctx.keys, alice())
        .await
        .unwrap();
    assert_eq!(ctx.keys.verify(&registered.access_token), Some(registered.id));

    let logged_in = service::user::login(
        &ctx.anonymous(),
        &ctx.keys,
        login_input("alice@x.com", "pw1"),
    )
    .await
    .unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(ctx.keys.verify(&logged_in.access_token), Some(registered.id));

    let err = service::user::login(
        &ctx.anonymous(),
        &ctx.keys,
        login_input("alice@x.com", "pw2"),
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.to_string(), "password is not correct");

    let err = service::user::login(
        &ctx.anonymous(),
        &ctx.keys,
        login_input("bob@x.com", "pw1"),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "user with this email does not exist");
}

#[tokio::test]
async fn register_validation() {
    let ctx = TestContext::new().await;
    let cases = [
        (
            RegisterInput {
                email: String::new(),
                ..alice()
            },
            "email can't be blank",
        ),
        (
            RegisterInput {
                email: "alice".to_owned(),
                ..alice()
            },
            "email is invalid",
        ),
        (
            RegisterInput {
                password: String::new(),
                ..alice()
            },
            "password can't be blank",
        ),
        (
            RegisterInput {
                username: String::new(),
                ..alice()
            },
            "username can't be blank",
        ),
    ];
    for (input, message) in cases {
        let err = service::user::register(&ctx.anonymous(), &ctx.keys, input)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_string(), message);
    }
}

#[tokio::test]
async fn register_duplicates() {
    let ctx = TestContext::new().await;
    service::user::register(&ctx.anonymous(), &ctx.keys, alice())
        .await
        .unwrap();

    let err = service::user::register(&ctx.anonymous(), &ctx.keys, alice())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.to_string(), "user with this email already exists");

    let err = service::user::register(
        &ctx.anonymous(),
        &ctx.keys,
        RegisterInput {
            email: "other@x.com".to_owned(),
            ..alice()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "user with this username already exists");
}

#[tokio::test]
async fn update_skips_empty_fields() {
    let ctx = TestContext::new().await;
    let id = ctx.register("alice").await;
    let me = ctx.as_user(id);

    service::user::update(
        &me,
        UpdateUserInput {
            email: Some(String::new()),
            bio: Some("hello".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let current = service::user::current_user(&me).await.unwrap().unwrap();
    assert_eq!(current.email, "alice@x.com");
    assert_eq!(current.bio.as_deref(), Some("hello"));
    assert_eq!(current.image, None);

    // an empty bio does not clear it
    service::user::update(
        &me,
        UpdateUserInput {
            bio: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let current = service::user::current_user(&me).await.unwrap().unwrap();
    assert_eq!(current.bio.as_deref(), Some("hello"));
}

#[tokio::test]
async fn update_rules() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    ctx.register("bob").await;
    let me = ctx.as_user(alice);

    let err = service::user::update(
        &me,
        UpdateUserInput {
            email: Some("nope".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "email is invalid");

    let err = service::user::update(
        &me,
        UpdateUserInput {
            email: Some("bob@x.com".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "email must be unique");

    let err = service::user::update(
        &me,
        UpdateUserInput {
            username: Some("bob".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "username must be unique");

    // keeping one's own email is not a conflict
    service::user::update(
        &me,
        UpdateUserInput {
            email: Some("alice@x.com".to_owned()),
            password: Some("new-pw".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    service::user::login(&ctx.anonymous(), &ctx.keys, login_input("alice@x.com", "new-pw"))
        .await
        .unwrap();

    let err = service::user::update(&ctx.anonymous(), UpdateUserInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn current_user_when_anonymous() {
    let ctx = TestContext::new().await;
    assert_eq!(
        service::user::current_user(&ctx.anonymous()).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn follow_toggle_round_trip() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    let bob = ctx.register("bob").await;
    let me = ctx.as_user(alice);

    let profile = service::user::by_username(&me, "bob").await.unwrap();
    assert!(!profile.is_following);

    assert!(service::user::toggle_follow(&me, bob).await.unwrap());
    assert!(service::user::by_username(&me, "bob").await.unwrap().is_following);
    // not visible to anonymous callers
    assert!(
        !service::user::by_username(&ctx.anonymous(), "bob")
            .await
            .unwrap()
            .is_following
    );

    assert!(!service::user::toggle_follow(&me, bob).await.unwrap());
    assert!(!service::user::by_username(&me, "bob").await.unwrap().is_following);
}

#[tokio::test]
async fn follow_errors() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;

    let err = service::user::toggle_follow(&ctx.as_user(alice), alice + 100)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "User not found");

    let err = service::user::toggle_follow(&ctx.anonymous(), alice)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    let err = service::user::by_username(&ctx.anonymous(), "nobody")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "user with this username does not exist");
}
