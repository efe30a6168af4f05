pub mod create_tag_service;
pub mod delete_tag_service;
pub mod get_tags_service;
pub mod sync_tags_service;
pub mod update_tag_service;

pub use create_tag_service::CreateTagService;
pub use delete_tag_service::DeleteTagService;
pub use get_tags_service::{GetTagService, GetTagsService};
pub use sync_tags_service::SyncTagsService;
pub use update_tag_service::UpdateTagService;
