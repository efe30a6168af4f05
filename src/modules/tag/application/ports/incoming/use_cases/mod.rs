pub mod create_tag;
pub mod delete_tag;
pub mod get_tags;
pub mod sync_tags;
pub mod update_tag;

pub use create_tag::CreateTagUseCase;
pub use delete_tag::DeleteTagUseCase;
pub use get_tags::{GetTagUseCase, GetTagsUseCase};
pub use sync_tags::SyncTagsUseCase;
pub use update_tag::UpdateTagUseCase;
