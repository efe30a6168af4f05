mod backfill_slugs;

pub use backfill_slugs::{BackfillSlugsUseCase, SlugBackfillReport};
