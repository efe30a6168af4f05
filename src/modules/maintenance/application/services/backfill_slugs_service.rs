use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::company::application::ports::outgoing::{CompanyQuery, CompanyRepository};
use crate::modules::maintenance::application::ports::incoming::use_cases::{
    BackfillSlugsUseCase, SlugBackfillReport,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectFilter, ProjectQuery, ProjectRepository,
};
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagRepository};
use crate::shared::outcome::{Failure, FailureKind, Outcome};
use crate::shared::slug::slug_for;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct BackfillSlugsService {
    tag_query: Arc<dyn TagQuery>,
    tag_repository: Arc<dyn TagRepository>,
    company_query: Arc<dyn CompanyQuery>,
    company_repository: Arc<dyn CompanyRepository>,
    project_query: Arc<dyn ProjectQuery>,
    project_repository: Arc<dyn ProjectRepository>,
}

impl BackfillSlugsService {
    pub fn new(
        tag_query: Arc<dyn TagQuery>,
        tag_repository: Arc<dyn TagRepository>,
        company_query: Arc<dyn CompanyQuery>,
        company_repository: Arc<dyn CompanyRepository>,
        project_query: Arc<dyn ProjectQuery>,
        project_repository: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            tag_query,
            tag_repository,
            company_query,
            company_repository,
            project_query,
            project_repository,
        }
    }

    async fn backfill_tags(&self) -> Outcome<usize> {
        let mut count = 0;
        for tag in self.tag_query.list(None).await? {
            if !tag.slug.trim().is_empty() {
                continue;
            }
            let result = self
                .tag_repository
                .set_slug(tag.id, &slug_for(&tag.title))
                .await
                .map_err(Failure::from);
            count += settle("tag", tag.id, result)?;
        }
        Ok(count)
    }

    async fn backfill_companies(&self) -> Outcome<usize> {
        let mut count = 0;
        for company in self.company_query.list(None).await? {
            if !company.slug.trim().is_empty() {
                continue;
            }
            let result = self
                .company_repository
                .set_slug(company.id, &slug_for(&company.name))
                .await
                .map_err(Failure::from);
            count += settle("company", company.id, result)?;
        }
        Ok(count)
    }

    async fn backfill_projects(&self) -> Outcome<usize> {
        let mut count = 0;
        for view in self.project_query.list(ProjectFilter::default()).await? {
            let project = view.project;
            if !project.slug.trim().is_empty() {
                continue;
            }
            let result = self
                .project_repository
                .set_slug(project.id, &slug_for(&project.title))
                .await
                .map_err(Failure::from);
            count += settle("project", project.id, result)?;
        }
        Ok(count)
    }
}

/// A slug already taken by another row is skipped, anything else aborts.
fn settle(entity: &str, id: Uuid, result: Outcome<()>) -> Outcome<usize> {
    match result {
        Ok(()) => Ok(1),
        Err(f) if f.kind == FailureKind::Conflict => {
            warn!(entity, id = %id, "Generated slug already taken, skipping");
            Ok(0)
        }
        Err(f) => Err(f),
    }
}

#[async_trait]
impl BackfillSlugsUseCase for BackfillSlugsService {
    async fn execute(&self) -> Outcome<SlugBackfillReport> {
        let report = SlugBackfillReport {
            tags: self.backfill_tags().await?,
            companies: self.backfill_companies().await?,
            projects: self.backfill_projects().await?,
        };

        info!(
            tags = report.tags,
            companies = report.companies,
            projects = report.projects,
            "Slug backfill finished"
        );

        Ok(report)
    }
}
