//! HTTP-facing command protocol
//!
//! Turns a request path and its query parameters into a [`Command`], runs it
//! against the store, and renders the outcome as a plain-text [`Reply`].

pub mod command;
pub mod reply;

pub use command::Command;
pub use reply::Reply;
