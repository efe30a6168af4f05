pub mod entities;

pub use entities::{Tag, TagDraft, TagType};
