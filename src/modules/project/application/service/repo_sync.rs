use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectRepo, RepoTarget};
use crate::modules::project::application::domain::relation_sync::{plan_sync, RelationChanges};
use crate::shared::outcome::{Failure, Outcome};

pub const REPOSITORY_FIELDS_REQUIRED: &str = "Repository title and url are required.";

/// Diffs the repository collection. Repositories have no single-occupancy
/// category, so only orphans are removed.
pub fn prepare_repositories(
    project_id: Uuid,
    current: Vec<ProjectRepo>,
    targets: Vec<RepoTarget>,
) -> Outcome<RelationChanges<ProjectRepo>> {
    let plan = plan_sync(current, targets, |_| false);

    let mut create = Vec::with_capacity(plan.to_create.len());
    for target in plan.to_create {
        let title = target.title.trim();
        let url = target.url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(Failure::bad_request(REPOSITORY_FIELDS_REQUIRED));
        }

        create.push(ProjectRepo {
            id: Uuid::now_v7(),
            project_id,
            title: title.to_string(),
            url: url.to_string(),
            order: target.order,
        });
    }

    Ok(RelationChanges {
        delete_ids: plan.to_delete.into_iter().map(|r| r.id).collect(),
        create,
        reorder: plan.reordered,
    })
}
