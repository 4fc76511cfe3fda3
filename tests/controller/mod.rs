//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors against an in-memory database and
//! checked for status codes and decoded bodies.

mod health;
mod profile;
mod project;
mod search;
mod work;

use showcase_test_utils::prelude::*;

use crate::util::{read_json, respond, TestContextExt};
