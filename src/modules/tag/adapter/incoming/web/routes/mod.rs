mod create_tag;
mod delete_tag;
mod dto;
mod get_tags;
mod update_tag;

pub use create_tag::create_tag_handler;
pub use delete_tag::delete_tag_handler;
pub use get_tags::{get_tag_by_id_handler, get_tag_by_slug_handler, get_tags_handler};
pub use update_tag::update_tag_handler;
