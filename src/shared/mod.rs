pub mod api;
pub mod outcome;
pub mod persistence;
pub mod slug;
pub mod text_match;
