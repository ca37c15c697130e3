//! DTOs for professors_sea adapter.

#[derive(Debug, Clone)]
pub struct ProfessorCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialties: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfessorUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<String>,
}
