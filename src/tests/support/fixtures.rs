use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    Project, ProjectCommand, ProjectDetails,
};
use crate::shared::slug::slugify;

/// A stored project row with no relations.
pub fn project(title: &str, year: i32) -> Project {
    Project {
        id: Uuid::now_v7(),
        title: title.to_string(),
        short_description: format!("{title} summary"),
        description: format!("All about {title}."),
        year,
        website: None,
        show_mockup: false,
        company_id: None,
        slug: slugify(title),
    }
}

/// Create/update input with empty tag, image and repository lists.
pub fn project_command(title: &str) -> ProjectCommand {
    ProjectCommand {
        details: ProjectDetails {
            title: title.to_string(),
            short_description: format!("{title} summary"),
            description: format!("All about {title}."),
            year: 2024,
            website: None,
            show_mockup: false,
            company_id: None,
        },
        tags: vec![],
        images: vec![],
        repositories: vec![],
    }
}

/// Body of an upload as the web layer expects it.
pub fn upload_json(file_name: &str, bytes: &[u8]) -> serde_json::Value {
    serde_json::json!({
        "file_name": file_name,
        "content": STANDARD.encode(bytes),
    })
}
