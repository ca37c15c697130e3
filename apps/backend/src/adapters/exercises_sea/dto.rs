//! DTOs for exercises_sea adapter.

#[derive(Debug, Clone)]
pub struct ExerciseCreate {
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

/// Exact-match catalog filters; `None` means no constraint.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    pub muscle_group: Option<String>,
    pub difficulty: Option<String>,
}
