#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Conduit
//!
//! A Medium-style blogging backend: users follow each other, publish tagged
//! articles, favorite and comment on them.
//!
//! The crate is layered the same way a request flows through it:
//!
//! - [`api`] is the axum router. It resolves the caller into a [`Context`]
//!   and dispatches to a procedure.
//! - [`service`] holds the procedures, one module per router
//!   (`user`, `article`, `comment`, `tag`), plus the explicit relation
//!   helpers that connect and disconnect rows of the membership tables.
//! - [`entity`] holds the SeaORM entities. The schema itself is owned by the
//!   `conduit-migration` crate.
//!
//! ## Example
//!
//! ```no_run
//! use conduit::{service, Context};
//! use sea_orm::Database;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//! let ctx = Context::anonymous(db);
//! let tags = service::tag::popular(&ctx).await?;
//! println!("{tags:?}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
mod context;
pub mod entity;
mod error;
pub mod service;
mod slug;
mod validate;

pub use context::Context;
pub use error::{Error, ErrorKind, Result};
pub use slug::{generate_slug, slug_at};
