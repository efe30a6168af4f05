pub mod config;
pub mod health;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use crate::config::{AppConfig, StorageBackend};
use crate::health::ReadinessProbe;
use crate::infrastructure::memory_store::MemoryStore;
use crate::modules::company::adapter::outgoing::{
    CompanyQueryPostgres, CompanyRepositoryPostgres,
};
use crate::modules::company::application::company_use_cases::CompanyUseCases;
use crate::modules::company::application::ports::outgoing::{CompanyQuery, CompanyRepository};
use crate::modules::maintenance::application::maintenance_use_cases::MaintenanceUseCases;
use crate::modules::maintenance::application::services::BackfillSlugsService;
use crate::modules::media::adapter::outgoing::{
    DisabledOptimiser, LocalFileStorage, TinifyOptimiser,
};
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::outgoing::{FileStorage, ImageOptimiser};
use crate::modules::project::adapter::outgoing::{
    ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::ImageSync;
use crate::modules::tag::adapter::outgoing::{TagQueryPostgres, TagRepositoryPostgres};
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagRepository};
use crate::modules::tag::application::tag_use_cases::TagUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub tag: TagUseCases,
    pub company: CompanyUseCases,
    pub media: MediaUseCases,
    pub maintenance: MaintenanceUseCases,
}

/// Persistence adapters for every aggregate, one backend at a time.
pub struct Stores<TQ, TR, CQ, CR, PQ, PR> {
    pub tag_query: TQ,
    pub tag_repository: TR,
    pub company_query: CQ,
    pub company_repository: CR,
    pub project_query: PQ,
    pub project_repository: PR,
}

impl Stores<MemoryStore, MemoryStore, MemoryStore, MemoryStore, MemoryStore, MemoryStore> {
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            tag_query: store.clone(),
            tag_repository: store.clone(),
            company_query: store.clone(),
            company_repository: store.clone(),
            project_query: store.clone(),
            project_repository: store,
        }
    }
}

pub fn build_state<TQ, TR, CQ, CR, PQ, PR>(
    stores: Stores<TQ, TR, CQ, CR, PQ, PR>,
    storage: Arc<dyn FileStorage>,
    optimiser: Arc<dyn ImageOptimiser>,
) -> AppState
where
    TQ: TagQuery + Clone + 'static,
    TR: TagRepository + Clone + 'static,
    CQ: CompanyQuery + Clone + 'static,
    CR: CompanyRepository + Clone + 'static,
    PQ: ProjectQuery + Clone + 'static,
    PR: ProjectRepository + Clone + 'static,
{
    let tag = TagUseCases::build(stores.tag_query.clone(), stores.tag_repository.clone());

    let company = CompanyUseCases::build(
        stores.company_query.clone(),
        stores.company_repository.clone(),
        Arc::clone(&storage),
    );

    let project = ProjectUseCases::build(
        stores.project_query.clone(),
        stores.project_repository.clone(),
        Arc::clone(&tag.sync),
        ImageSync::new(Arc::clone(&storage), optimiser),
    );

    let maintenance = MaintenanceUseCases {
        backfill_slugs: Arc::new(BackfillSlugsService::new(
            Arc::new(stores.tag_query),
            Arc::new(stores.tag_repository),
            Arc::new(stores.company_query),
            Arc::new(stores.company_repository),
            Arc::new(stores.project_query),
            Arc::new(stores.project_repository),
        )),
    };

    AppState {
        project,
        tag,
        company,
        media: MediaUseCases::build(storage),
        maintenance,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let storage: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new(&config.upload_dir));

    let optimiser: Arc<dyn ImageOptimiser> = match &config.tinify {
        Some(tinify) => Arc::new(TinifyOptimiser::new(&tinify.api_url, &tinify.api_key)),
        None => {
            info!("TINIFY_API_KEY not set, images are stored unoptimised");
            Arc::new(DisabledOptimiser)
        }
    };

    let (state, probe) = match &config.storage {
        StorageBackend::Memory { matcher } => {
            info!(?matcher, "Using in-memory storage");
            let stores = Stores::memory(MemoryStore::with_matcher(*matcher));
            (build_state(stores, storage, optimiser), ReadinessProbe::Memory)
        }
        StorageBackend::Postgres { database_url } => {
            let mut opt = ConnectOptions::new(database_url.clone());
            opt.max_connections(50)
                .min_connections(5)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e))?;
            let db = Arc::new(conn);

            let stores = Stores {
                tag_query: TagQueryPostgres::new(Arc::clone(&db)),
                tag_repository: TagRepositoryPostgres::new(Arc::clone(&db)),
                company_query: CompanyQueryPostgres::new(Arc::clone(&db)),
                company_repository: CompanyRepositoryPostgres::new(Arc::clone(&db)),
                project_query: ProjectQueryPostgres::new(Arc::clone(&db)),
                project_repository: ProjectRepositoryPostgres::new(Arc::clone(&db)),
            };
            (
                build_state(stores, storage, optimiser),
                ReadinessProbe::Database(db),
            )
        }
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(probe.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::company::adapter::incoming::web::routes as company;
    use crate::modules::maintenance::adapter::incoming::web::routes as maintenance;
    use crate::modules::media::adapter::incoming::web::routes as media;
    use crate::modules::project::adapter::incoming::web::routes as project;
    use crate::modules::tag::adapter::incoming::web::routes as tag;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects (literal segments before `{id}`)
    cfg.service(project::get_project_by_slug_handler);
    cfg.service(project::optimise_images_handler);
    cfg.service(project::get_projects_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::get_project_by_id_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    cfg.service(project::get_related_projects_handler);
    cfg.service(project::get_project_images_handler);
    cfg.service(project::get_project_image_handler);
    cfg.service(project::sync_project_images_handler);
    cfg.service(project::get_project_repositories_handler);
    cfg.service(project::get_project_repository_handler);
    cfg.service(project::sync_project_repositories_handler);
    // Tags
    cfg.service(tag::get_tag_by_slug_handler);
    cfg.service(tag::get_tags_handler);
    cfg.service(tag::create_tag_handler);
    cfg.service(tag::get_tag_by_id_handler);
    cfg.service(tag::update_tag_handler);
    cfg.service(tag::delete_tag_handler);
    // Companies
    cfg.service(company::get_company_by_slug_handler);
    cfg.service(company::get_companies_handler);
    cfg.service(company::create_company_handler);
    cfg.service(company::get_company_by_id_handler);
    cfg.service(company::update_company_handler);
    cfg.service(company::delete_company_handler);
    // Media
    cfg.service(media::serve_media_handler);
    // Maintenance
    cfg.service(maintenance::backfill_slugs_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
