//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands borrow
//! the [`FlavorContext`](crate::context::FlavorContext) owned by the
//! [`CommandDispatcher`].

pub mod check;
pub mod detect;
pub mod dispatcher;
pub mod display;
pub mod features;
pub mod probe;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
