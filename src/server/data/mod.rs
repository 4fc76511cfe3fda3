//! Data access layer repositories.
//!
//! Each repository wraps a borrowed connection, so the same code runs against a pooled
//! connection or an open transaction. Repositories return `DbErr` and never apply
//! business rules such as required fields.

pub mod profile;
pub mod project;
pub mod project_skill;
pub mod skill;
pub mod work_experience;

use sea_orm::{
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr},
    Condition, ExprTrait,
};

use crate::server::util::filter::contains_pattern;

/// Case-insensitive substring match of `term` against `column`
///
/// `LIKE` wildcards in `term` are matched literally. NULL columns never match.
pub(crate) fn contains_ignore_case(column: impl IntoColumnRef, term: &str) -> Condition {
    Condition::all().add(
        Expr::expr(Func::lower(Expr::col(column)))
            .like(LikeExpr::new(contains_pattern(term)).escape('\\')),
    )
}
