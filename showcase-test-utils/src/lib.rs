//! Test harness for the showcase workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables exist and which
//! rows are seeded, then the resulting [`TestContext`] exposes the in-memory database and
//! fixture helpers for the test body.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::portfolio::factory, TestBuilder, TestContext, TestError};
}
