use async_trait::async_trait;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::outcome::Outcome;

/// Find-or-create by case-insensitive title.
///
/// Yields exactly one tag per non-blank input name, in input order, so
/// repeated names repeat the same tag. Names that trim to nothing are
/// skipped and produce no entry. Tags created here are committed immediately.
#[async_trait]
pub trait SyncTagsUseCase: Send + Sync {
    async fn execute(&self, names: Vec<String>) -> Outcome<Vec<Tag>>;
}
