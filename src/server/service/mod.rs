//! Business logic layer.
//!
//! Services validate requests, check that referenced records exist and compose repository
//! calls into the shapes returned by the API. They return the application [`Error`] so
//! controllers only map results to status codes.
//!
//! [`Error`]: crate::server::error::Error

pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod work;

/// Keep a value only if it contains something other than whitespace
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
