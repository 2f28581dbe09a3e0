//! Shared test utilities for manggad-db unit tests.

pub(crate) mod helpers {
    use manggad_core::entities::NewThesis;
    use manggad_core::enums::{Department, Program};

    use crate::service::ManggadService;

    /// Create an in-memory service.
    pub async fn test_service() -> ManggadService {
        ManggadService::new_local(":memory:").await.unwrap()
    }

    /// Build a payload whose department matches the program's school.
    pub fn new_thesis(title: &str, program: Program, year: Option<i32>) -> NewThesis {
        NewThesis {
            title: title.to_string(),
            abstract_text: None,
            keywords: Vec::new(),
            authors: vec![String::from("Test Author")],
            department: program.department().label().to_string(),
            program: program.label().to_string(),
            year_of_submission: year,
            degree_awarded: None,
            cover_image_url: None,
        }
    }

    /// Shorthand for a department label.
    pub fn dept(department: Department) -> String {
        department.label().to_string()
    }
}
