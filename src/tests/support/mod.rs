pub mod app_state_builder;
pub mod fixtures;
pub mod media_doubles;
