pub mod company;
pub mod maintenance;
pub mod media;
pub mod project;
pub mod tag;
