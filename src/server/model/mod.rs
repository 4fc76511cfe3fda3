//! Server application models.
//!
//! Application state shared with every handler and aliases for the database entity models.

pub mod app;
pub mod db;
