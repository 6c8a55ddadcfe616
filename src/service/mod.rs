//! Procedures: one module per RPC router.
//!
//! Every procedure takes the request [`Context`](crate::Context) by reference
//! and returns a [`Result`](crate::Result). Queries are free to run on an
//! anonymous context; mutations call
//! [`Context::require_user`](crate::Context::require_user) first.

pub mod article;
pub mod comment;
pub mod relation;
pub mod tag;
pub mod user;

mod input;
mod view;

pub use input::*;
pub use view::*;
