//! Portfolio content API.
//!
//! `model` holds the JSON request/response types exchanged with clients, `server` holds the
//! axum application: configuration, routing, controllers, services and repositories.

pub mod model;
pub mod server;
