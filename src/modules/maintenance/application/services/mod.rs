pub mod backfill_slugs_service;

pub use backfill_slugs_service::BackfillSlugsService;
