pub mod entities;

pub use entities::{Company, CompanyDraft};
