use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use super::{MemoryStore, StoreState};
use crate::modules::project::application::domain::entities::{
    Project, ProjectImage, ProjectRepo, ProjectView,
};
use crate::modules::project::application::domain::relation_sync::{sort_children, RelationChanges};
use crate::modules::project::application::ports::outgoing::{
    ProjectChangeset, ProjectFilter, ProjectQuery, ProjectQueryError, ProjectRepository,
    ProjectRepositoryError, TagOverlap,
};
use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::slug::normalize_slug;

impl StoreState {
    fn view(&self, project: &Project) -> ProjectView {
        let mut tags: Vec<Tag> = self
            .project_tags
            .iter()
            .filter(|(project_id, _)| *project_id == project.id)
            .filter_map(|(_, tag_id)| self.tags.iter().find(|t| t.id == *tag_id))
            .cloned()
            .collect();
        tags.sort_by_key(|t| t.title.to_lowercase());

        ProjectView {
            project: project.clone(),
            tags,
            images: self.images_of(project.id),
            repositories: self.repos_of(project.id),
        }
    }

    fn images_of(&self, project_id: Uuid) -> Vec<ProjectImage> {
        let mut images: Vec<ProjectImage> = self
            .images
            .iter()
            .filter(|i| i.project_id == project_id)
            .cloned()
            .collect();
        sort_children(&mut images);
        images
    }

    fn repos_of(&self, project_id: Uuid) -> Vec<ProjectRepo> {
        let mut repos: Vec<ProjectRepo> = self
            .repos
            .iter()
            .filter(|r| r.project_id == project_id)
            .cloned()
            .collect();
        sort_children(&mut repos);
        repos
    }

    fn replace_tag_links(&mut self, project_id: Uuid, tag_ids: &[Uuid]) {
        self.project_tags.retain(|(p, _)| *p != project_id);

        let mut seen = HashSet::new();
        for tag_id in tag_ids {
            if seen.insert(*tag_id) {
                self.project_tags.push((project_id, *tag_id));
            }
        }
    }

    fn apply_images(&mut self, project_id: Uuid, changes: RelationChanges<ProjectImage>) {
        self.images
            .retain(|i| !(i.project_id == project_id && changes.delete_ids.contains(&i.id)));

        for (id, order) in changes.reorder {
            if let Some(image) = self
                .images
                .iter_mut()
                .find(|i| i.id == id && i.project_id == project_id)
            {
                image.order = Some(order);
            }
        }

        self.images.extend(changes.create);
    }

    fn apply_repos(&mut self, project_id: Uuid, changes: RelationChanges<ProjectRepo>) {
        self.repos
            .retain(|r| !(r.project_id == project_id && changes.delete_ids.contains(&r.id)));

        for (id, order) in changes.reorder {
            if let Some(repo) = self
                .repos
                .iter_mut()
                .find(|r| r.id == id && r.project_id == project_id)
            {
                repo.order = Some(order);
            }
        }

        self.repos.extend(changes.create);
    }
}

impl MemoryStore {
    fn project_conflict(
        &self,
        projects: &[Project],
        candidate: &Project,
    ) -> Option<ProjectRepositoryError> {
        for other in projects.iter().filter(|p| p.id != candidate.id) {
            if self.matcher.equals(&other.title, &candidate.title) {
                return Some(ProjectRepositoryError::TitleAlreadyExists);
            }
            if !candidate.slug.is_empty() && other.slug == candidate.slug {
                return Some(ProjectRepositoryError::SlugAlreadyExists);
            }
        }
        None
    }
}

#[async_trait]
impl ProjectQuery for MemoryStore {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let state = self.state.read().await;

        let mut projects: Vec<&Project> = state
            .projects
            .iter()
            .filter(|p| {
                self.matches_search(
                    filter.search.as_deref(),
                    &[p.title.as_str(), p.short_description.as_str()],
                )
            })
            .collect();
        projects.sort_by(|a, b| b.year.cmp(&a.year));

        Ok(projects.into_iter().map(|p| state.view(p)).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let state = self.state.read().await;
        state
            .projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| state.view(p))
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectQueryError> {
        let slug = normalize_slug(slug);
        let state = self.state.read().await;
        state
            .projects
            .iter()
            .find(|p| p.slug == slug)
            .map(|p| state.view(p))
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ProjectQueryError> {
        let state = self.state.read().await;
        Ok(state.projects.iter().any(|p| p.id == id))
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError> {
        let state = self.state.read().await;
        Ok(state
            .projects
            .iter()
            .any(|p| Some(p.id) != exclude && self.matcher.equals(&p.title, title)))
    }

    async fn tag_overlaps(&self, project_id: Uuid) -> Result<Vec<TagOverlap>, ProjectQueryError> {
        let state = self.state.read().await;

        let subject: HashSet<Uuid> = state
            .project_tags
            .iter()
            .filter(|(p, _)| *p == project_id)
            .map(|(_, t)| *t)
            .collect();

        if subject.is_empty() {
            return Ok(Vec::new());
        }

        Ok(state
            .projects
            .iter()
            .filter(|p| p.id != project_id)
            .filter_map(|p| {
                let shared = state
                    .project_tags
                    .iter()
                    .filter(|(pid, tid)| *pid == p.id && subject.contains(tid))
                    .count();
                (shared > 0).then_some(TagOverlap {
                    project_id: p.id,
                    shared,
                })
            })
            .collect())
    }

    async fn images(&self, project_id: Uuid) -> Result<Vec<ProjectImage>, ProjectQueryError> {
        let state = self.state.read().await;
        Ok(state.images_of(project_id))
    }

    async fn repositories(&self, project_id: Uuid) -> Result<Vec<ProjectRepo>, ProjectQueryError> {
        let state = self.state.read().await;
        Ok(state.repos_of(project_id))
    }

    async fn unoptimised_images(&self) -> Result<Vec<ProjectImage>, ProjectQueryError> {
        let state = self.state.read().await;
        Ok(state
            .images
            .iter()
            .filter(|i| !i.is_optimised)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn insert_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.project_conflict(&state.projects, &changes.project) {
            return Err(err);
        }

        let project_id = changes.project.id;
        state.projects.push(changes.project);
        state.replace_tag_links(project_id, &changes.tag_ids);
        state.apply_images(project_id, changes.images);
        state.apply_repos(project_id, changes.repositories);

        Ok(())
    }

    async fn update_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.project_conflict(&state.projects, &changes.project) {
            return Err(err);
        }

        let project_id = changes.project.id;
        let slot = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        *slot = changes.project;

        state.replace_tag_links(project_id, &changes.tag_ids);
        state.apply_images(project_id, changes.images);
        state.apply_repos(project_id, changes.repositories);

        Ok(())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        let before = state.projects.len();
        state.projects.retain(|p| p.id != id);
        if state.projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }

        state.images.retain(|i| i.project_id != id);
        state.repos.retain(|r| r.project_id != id);
        state.project_tags.retain(|(p, _)| *p != id);

        Ok(())
    }

    async fn apply_image_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectImage>,
    ) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        if !state.projects.iter().any(|p| p.id == project_id) {
            return Err(ProjectRepositoryError::NotFound);
        }

        state.apply_images(project_id, changes);
        Ok(())
    }

    async fn apply_repository_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectRepo>,
    ) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        if !state.projects.iter().any(|p| p.id == project_id) {
            return Err(ProjectRepositoryError::NotFound);
        }

        state.apply_repos(project_id, changes);
        Ok(())
    }

    async fn mark_image_optimised(
        &self,
        image_id: Uuid,
        stored_name: &str,
    ) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        let image = state
            .images
            .iter_mut()
            .find(|i| i.id == image_id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        image.image = stored_name.to_string();
        image.is_optimised = true;

        Ok(())
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), ProjectRepositoryError> {
        let mut state = self.state.write().await;

        if state.projects.iter().any(|p| p.id != id && p.slug == slug) {
            return Err(ProjectRepositoryError::SlugAlreadyExists);
        }

        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        project.slug = slug.to_string();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::ImageType;

    fn project(title: &str, year: i32) -> Project {
        Project {
            id: Uuid::now_v7(),
            title: title.to_string(),
            short_description: format!("{title} summary"),
            description: String::new(),
            year,
            website: None,
            show_mockup: false,
            company_id: None,
            slug: title.to_lowercase().replace(' ', "-"),
        }
    }

    fn changeset(project: Project) -> ProjectChangeset {
        ProjectChangeset {
            project,
            tag_ids: vec![],
            images: RelationChanges::default(),
            repositories: RelationChanges::default(),
        }
    }

    fn image(project_id: Uuid, kind: ImageType, order: Option<i32>) -> ProjectImage {
        ProjectImage {
            id: Uuid::now_v7(),
            project_id,
            image: format!("{}.png", Uuid::new_v4()),
            image_type: kind,
            order,
            is_optimised: false,
        }
    }

    #[tokio::test]
    async fn slug_lookup_ignores_case_and_padding() {
        let store = MemoryStore::default();
        let row = project("My Slug", 2024);
        let id = row.id;
        store.insert_project(changeset(row)).await.unwrap();

        let view = ProjectQuery::get_by_slug(&store, " My-Slug ").await.unwrap();
        assert_eq!(view.project.id, id);
    }

    #[tokio::test]
    async fn list_orders_by_year_descending() {
        let store = MemoryStore::default();
        for (title, year) in [("Old", 2015), ("New", 2024), ("Mid", 2019)] {
            store.insert_project(changeset(project(title, year))).await.unwrap();
        }

        let views = ProjectQuery::list(&store, ProjectFilter::default()).await.unwrap();
        let years: Vec<i32> = views.iter().map(|v| v.project.year).collect();
        assert_eq!(years, vec![2024, 2019, 2015]);

        let found = ProjectQuery::list(
            &store,
            ProjectFilter {
                search: Some("MID SUM".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].project.title, "Mid");
    }

    #[tokio::test]
    async fn images_come_back_by_category_then_order() {
        let store = MemoryStore::default();
        let p = project("Gallery", 2020);
        let id = p.id;

        let desktop_2 = image(id, ImageType::Desktop, Some(2));
        let desktop_1 = image(id, ImageType::Desktop, Some(1));
        let logo = image(id, ImageType::Logo, None);

        let mut changes = changeset(p);
        changes.images.create = vec![desktop_2.clone(), desktop_1.clone(), logo.clone()];
        store.insert_project(changes).await.unwrap();

        let images = store.images(id).await.unwrap();
        let ids: Vec<Uuid> = images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![logo.id, desktop_1.id, desktop_2.id]);
    }

    #[tokio::test]
    async fn delete_cascades_children_but_not_tags() {
        let store = MemoryStore::default();
        let p = project("Doomed", 2020);
        let id = p.id;
        let tag_id = Uuid::now_v7();

        let mut changes = changeset(p);
        changes.tag_ids = vec![tag_id, tag_id];
        changes.images.create = vec![image(id, ImageType::Card, None)];
        store.insert_project(changes).await.unwrap();
        assert_eq!(store.state.read().await.project_tags.len(), 1);

        store.delete_project(id).await.unwrap();

        let state = store.state.read().await;
        assert!(state.images.is_empty());
        assert!(state.project_tags.is_empty());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_title_in_any_case() {
        let store = MemoryStore::default();
        store.insert_project(changeset(project("Foo", 2020))).await.unwrap();

        let mut dup = project("FOO", 2021);
        dup.slug = "foo-2".into();
        let err = store.insert_project(changeset(dup)).await.unwrap_err();

        assert_eq!(err, ProjectRepositoryError::TitleAlreadyExists);
        assert_eq!(store.state.read().await.projects.len(), 1);
    }
}
