mod backfill_slugs;

pub use backfill_slugs::backfill_slugs_handler;
