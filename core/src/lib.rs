//! Client library for the task coordination service.
//!
//! The service owns all task and agent state; this crate only validates
//! inputs, sends one request per operation and decodes the response.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
