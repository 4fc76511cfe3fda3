//! Server application core modules.
//!
//! HTTP routing and controllers sit on top of services, which hold the business rules and call
//! into the repositories in `data` for all database access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
