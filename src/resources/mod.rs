//! Object-style handles over the services.
//!
//! Each method forwards to the matching service on an [`OpenAIClient`] and
//! copies the server's answer over the local value, so a handle always holds
//! the last state the server reported. Failures carry the attempted action
//! as [`OpenAIError::Operation`](crate::errors::OpenAIError::Operation).
//!
//! [`OpenAIClient`]: crate::client::OpenAIClient

mod assistant;
mod file;
mod organization;
mod run;
mod thread;


pub use organization::Organization;
