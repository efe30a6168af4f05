//! Helpers shared by the SeaORM adapters.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{DatabaseTransaction, DbErr};
use tracing::error;

use crate::shared::text_match::LikePattern;

/// `column ILIKE '%search%'` with LIKE metacharacters in `search` escaped.
pub fn ilike_contains<C: IntoColumnRef>(column: C, search: &str) -> SimpleExpr {
    let pattern = format!("%{}%", LikePattern::escape_like(search));
    Expr::col(column).ilike(pattern)
}

/// `lower(column) = lower(value)`.
pub fn lower_eq<C: IntoColumnRef>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).eq(value.to_lowercase())
}

/// Whether `err` is a unique-constraint violation mentioning `column`
/// (constraint names follow `<table>_<column>_key`).
pub fn is_unique_violation(err: &DbErr, column: &str) -> bool {
    let msg = err.to_string().to_lowercase();

    (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains(column)
}

/// Rolls `txn` back after a failed write. The caller still returns the
/// write's own error; a rollback failure is only logged.
pub async fn rollback_logged(txn: DatabaseTransaction, context: &'static str) {
    if let Err(e) = txn.rollback().await {
        error!(error = %e, context, "Transaction rollback failed");
    }
}
