pub mod common;

use common::TestContext;
use conduit::{
    service::{self, CreateCommentInput},
    ErrorKind,
};
use pretty_assertions::assert_eq;

fn comment(slug: &str, body: &str) -> CreateCommentInput {
    CreateCommentInput {
        article_slug: slug.to_owned(),
        comment_body: body.to_owned(),
    }
}

#[tokio::test]
async fn comments_newest_first() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    let bob = ctx.register("bob").await;
    let slug = ctx.article(alice, "Discuss", &[]).await;

    service::comment::create(&ctx.as_user(bob), comment(&slug, "first"))
        .await
        .unwrap();
    service::comment::create(&ctx.as_user(alice), comment(&slug, "second"))
        .await
        .unwrap();

    let comments = service::comment::by_article_slug(&ctx.anonymous(), &slug)
        .await
        .unwrap();
    let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["second", "first"]);
    assert_eq!(comments[0].author.username, "alice");
    assert_eq!(comments[1].author.id, bob);

    assert!(service::comment::by_article_slug(&ctx.anonymous(), "nope-000000")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn create_errors() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    let slug = ctx.article(alice, "Discuss", &[]).await;
    let me = ctx.as_user(alice);

    let err = service::comment::create(&me, comment(&slug, ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    let err = service::comment::create(&me, comment("", "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    let err = service::comment::create(&me, comment("nope-000000", "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service::comment::create(&ctx.anonymous(), comment(&slug, "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn only_the_author_deletes() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    let bob = ctx.register("bob").await;
    let slug = ctx.article(alice, "Discuss", &[]).await;
    service::comment::create(&ctx.as_user(bob), comment(&slug, "mine"))
        .await
        .unwrap();
    let id = service::comment::by_article_slug(&ctx.anonymous(), &slug)
        .await
        .unwrap()[0]
        .id;

    let err = service::comment::delete_by_id(&ctx.as_user(alice), id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Comment not found");

    service::comment::delete_by_id(&ctx.as_user(bob), id)
        .await
        .unwrap();
    assert!(service::comment::by_article_slug(&ctx.anonymous(), &slug)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn deleting_an_article_drops_its_comments() {
    let ctx = TestContext::new().await;
    let alice = ctx.register("alice").await;
    let slug = ctx.article(alice, "Short Lived", &["gone"]).await;
    service::comment::create(&ctx.as_user(alice), comment(&slug, "bye"))
        .await
        .unwrap();
    service::article::toggle_favorite(&ctx.as_user(alice), &slug)
        .await
        .unwrap();

    service::article::delete(&ctx.as_user(alice), &slug)
        .await
        .unwrap();
    assert!(service::comment::by_article_slug(&ctx.anonymous(), &slug)
        .await
        .unwrap()
        .is_empty());
}
