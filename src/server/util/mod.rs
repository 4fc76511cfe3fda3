//! Utility functions and helpers for server operations.
//!
//! Query-string parsing and SQL `LIKE` pattern building shared by services and repositories.

pub mod filter;
