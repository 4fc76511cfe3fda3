//! Request and response types for the HTTP API.

pub mod api;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod work;
